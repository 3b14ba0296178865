//! Application descriptor for the app being staged
//!
//! The build orchestrator normally hands this component a ready-made
//! descriptor; [`AppDescriptor::discover`] builds one from the build
//! directory for the bundled CLI.

use std::path::Path;

use walkdir::WalkDir;

/// The application being staged, as seen by the SDK pipeline
#[derive(Debug, Clone, Default)]
pub struct AppDescriptor {
    /// Relative path of the pre-published artifact, when the app was
    /// published as a single self-contained unit
    pub published_project: Option<String>,

    /// Discovered project paths, in restore order. Either msbuild project
    /// files (`src1/project1.csproj`) or project.json-style directories.
    pub project_paths: Vec<String>,
}

impl AppDescriptor {
    pub fn new(published_project: Option<String>, project_paths: Vec<String>) -> Self {
        Self {
            published_project,
            project_paths,
        }
    }

    /// Whether the app ships its own runtime and needs no SDK at all.
    ///
    /// True exactly when a published project is recorded and its target
    /// actually exists under the build directory. Shared by both the
    /// install and restore decisions.
    pub fn is_self_contained(&self, build_dir: &Path) -> bool {
        match self.published_project.as_deref() {
            Some(published) if !published.is_empty() => build_dir.join(published).exists(),
            _ => false,
        }
    }

    /// Build a descriptor by scanning the build directory.
    ///
    /// Project paths are the relative locations of `*.csproj` files plus
    /// directories holding a `project.json`, sorted for a deterministic
    /// restore order. A root-level `*.runtimeconfig.json` marks the app as
    /// pre-published.
    pub fn discover(build_dir: &Path) -> Self {
        let mut project_paths = Vec::new();
        let mut published_project = None;

        for entry in WalkDir::new(build_dir)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| e.file_name() != ".dotnet" && e.file_name() != ".nuget")
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            let relative = entry
                .path()
                .strip_prefix(build_dir)
                .unwrap_or(entry.path())
                .to_string_lossy()
                .replace('\\', "/");

            if name.ends_with(".csproj") {
                project_paths.push(relative);
            } else if name == "project.json" {
                let dir = relative.trim_end_matches("project.json").trim_end_matches('/');
                project_paths.push(if dir.is_empty() {
                    ".".to_string()
                } else {
                    dir.to_string()
                });
            } else if name.ends_with(".runtimeconfig.json") && entry.depth() == 1 {
                published_project = Some(relative);
            }
        }

        project_paths.sort();

        Self {
            published_project,
            project_paths,
        }
    }
}
