//! Dependency restore for the staged application
//!
//! Runs `dotnet restore` against the discovered projects and reconciles the
//! staging-time package cache paths recorded in `project.assets.json` with
//! the runtime filesystem layout.

use std::path::Path;

use crate::app::AppDescriptor;
use crate::cache;
use crate::error::{Result, fs as fs_err, restore as restore_err};
use crate::progress::ProgressSink;
use crate::shell::Shell;

/// Absolute package cache location while the app is being staged
const STAGING_NUGET_CACHE: &str = "/tmp/app/.nuget/packages/";

/// Equivalent location once the app is running
const RUNTIME_NUGET_CACHE: &str = "/app/.nuget/packages/";

/// Lock document produced by an msbuild-style restore, relative to the
/// project's directory
const PROJECT_ASSETS_JSON: &str = "obj/project.assets.json";

/// Project format of the installed SDK, decided once per build directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectFormat {
    /// Modern toolchain: project files plus a per-project lock document
    Msbuild,
    /// Legacy toolchain: project.json directories, no lock document
    ProjectJson,
}

/// Restores package dependencies after the SDK is in place
pub struct RestoreOrchestrator<'a> {
    build_dir: &'a Path,
    shell: &'a dyn Shell,
}

impl<'a> RestoreOrchestrator<'a> {
    pub fn new(build_dir: &'a Path, shell: &'a dyn Shell) -> Self {
        Self { build_dir, shell }
    }

    /// Whether restore is needed at all.
    ///
    /// Self-contained apps bundle their dependencies; restoring could
    /// overwrite the bundled assets, so they are skipped outright.
    pub fn should_restore(&self, app: &AppDescriptor) -> bool {
        !app.is_self_contained(self.build_dir)
    }

    /// Project format of the SDK installed in this build directory.
    ///
    /// msbuild-capable SDKs ship an `sdk/` toolchain directory under
    /// `.dotnet`; older project.json SDKs do not.
    pub fn project_format(&self) -> ProjectFormat {
        if cache::paths::sdk_dir(self.build_dir).join("sdk").is_dir() {
            ProjectFormat::Msbuild
        } else {
            ProjectFormat::ProjectJson
        }
    }

    /// Restore dependencies for every discovered project.
    ///
    /// Msbuild projects are restored one at a time in descriptor order,
    /// fail-fast, followed by a single lock-document rewrite over the full
    /// list. Project.json projects are restored in one combined
    /// invocation and need no rewrite.
    pub fn restore(&self, app: &AppDescriptor, sink: &mut dyn ProgressSink) -> Result<()> {
        sink.print(&format!(
            "Restoring packages for {} project(s)",
            app.project_paths.len()
        ));

        match self.project_format() {
            ProjectFormat::Msbuild => {
                for project in &app.project_paths {
                    self.run_restore(project)?;
                }
                self.rewrite_project_assets_json(&app.project_paths)
            }
            ProjectFormat::ProjectJson => {
                let combined = app.project_paths.join(" ");
                self.run_restore(&combined)
            }
        }
    }

    /// Replace staging-time package cache paths with their runtime
    /// equivalent in every project's lock document.
    ///
    /// Pure textual substitution; the document is otherwise opaque. A
    /// project without a lock document is skipped, not failed.
    pub fn rewrite_project_assets_json(&self, project_paths: &[String]) -> Result<()> {
        for project in project_paths {
            let project_dir = Path::new(project).parent().unwrap_or(Path::new(""));
            let assets = self.build_dir.join(project_dir).join(PROJECT_ASSETS_JSON);

            if !assets.is_file() {
                continue;
            }

            let content = std::fs::read_to_string(&assets)
                .map_err(|e| fs_err::read_failed(assets.display().to_string(), e.to_string()))?;

            if !content.contains(STAGING_NUGET_CACHE) {
                continue;
            }

            let rewritten = content.replace(STAGING_NUGET_CACHE, RUNTIME_NUGET_CACHE);
            std::fs::write(&assets, rewritten)
                .map_err(|e| fs_err::write_failed(assets.display().to_string(), e.to_string()))?;
        }

        Ok(())
    }

    fn run_restore(&self, projects: &str) -> Result<()> {
        let command = format!("cd {} && dotnet restore {projects}", self.build_dir.display());
        let status = self.shell.exec(&command)?;
        if status != 0 {
            return Err(restore_err::failed(projects, status));
        }
        Ok(())
    }
}
