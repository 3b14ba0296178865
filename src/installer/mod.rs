//! SDK installation into the build directory
//!
//! Decides whether an SDK is needed at all, reuses the cached payload when
//! the cache gate allows it, and otherwise downloads and activates a fresh
//! SDK, recording the installed version for later cache comparisons.

use std::path::Path;

use crate::app::AppDescriptor;
use crate::cache;
use crate::common::fs::copy_dir_recursive;
use crate::error::{Result, fs as fs_err, sdk};
use crate::manifest::VersionLookup;
use crate::progress::ProgressSink;
use crate::resolver::VersionResolver;
use crate::shell::Shell;

/// Archive format handed to the download helper
const ARCHIVE_FORMAT: &str = "tar";

/// Installs the .NET SDK for one build
pub struct SdkInstaller<'a> {
    build_dir: &'a Path,
    cache_dir: &'a Path,
    manifest: &'a dyn VersionLookup,
    shell: &'a dyn Shell,
}

impl<'a> SdkInstaller<'a> {
    pub fn new(
        build_dir: &'a Path,
        cache_dir: &'a Path,
        manifest: &'a dyn VersionLookup,
        shell: &'a dyn Shell,
    ) -> Self {
        Self {
            build_dir,
            cache_dir,
            manifest,
            shell,
        }
    }

    /// Resolve the SDK version for this build
    pub fn version(&self) -> Result<String> {
        VersionResolver::new(self.build_dir, self.manifest).resolve()
    }

    /// Whether the cache already holds this build's SDK version
    pub fn is_cached(&self) -> Result<bool> {
        let version = self.version()?;
        Ok(cache::is_cached(self.cache_dir, &version))
    }

    /// Whether an SDK must be installed at all.
    ///
    /// Self-contained apps ship their own runtime and skip installation
    /// entirely. Independent of the cache state: caching only decides
    /// whether a fresh download is needed.
    pub fn should_install(&self, app: &AppDescriptor) -> bool {
        !app.is_self_contained(self.build_dir)
    }

    /// Install the SDK into the build directory.
    ///
    /// A cache hit skips download and payload activation but still makes
    /// the SDK visible under the build directory. A nonzero status from
    /// the download helper aborts the build step; no retry, no partial
    /// version record.
    pub fn install(&self, sink: &mut dyn ProgressSink) -> Result<()> {
        let version = self.version()?;
        sink.print(&format!(".NET SDK version: {version}"));

        if cache::is_cached(self.cache_dir, &version) {
            return self.activate_cached();
        }

        let sdk_dir = cache::paths::sdk_dir(self.build_dir);
        let command = format!(
            "download_dependency dotnet.{version}.linux-amd64.tar.gz {ARCHIVE_FORMAT} {}",
            sdk_dir.display()
        );

        let status = self.shell.exec(&command)?;
        if status != 0 {
            return Err(sdk::download_failed(version, status));
        }

        cache::write_version_file(self.build_dir, &version)
    }

    /// Make a cached SDK payload visible in the build directory
    fn activate_cached(&self) -> Result<()> {
        let build_sdk = cache::paths::sdk_dir(self.build_dir);
        if build_sdk.is_dir() {
            return Ok(());
        }

        let cached_sdk = cache::paths::sdk_dir(self.cache_dir);
        copy_dir_recursive(&cached_sdk, &build_sdk)
            .map_err(|e| fs_err::write_failed(build_sdk.display().to_string(), e.to_string()))
    }
}
