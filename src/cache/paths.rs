//! SDK directory layout constants and path resolution
//!
//! The cache directory and the build directory share one layout: a
//! `.dotnet` marker directory holding the SDK payload and a single-line
//! `VERSION` file recording what was installed there.

use std::path::{Path, PathBuf};

use crate::error::{Result, cache_operation_failed};

/// Marker directory holding the SDK payload, under both cache and build dirs
pub const SDK_DIR: &str = ".dotnet";

/// Single-line version record inside the SDK directory
pub const VERSION_FILE: &str = "VERSION";

/// Default cache directory name under the user's cache directory
const CACHE_DIR: &str = "sdkstage";

/// Get the default buildpack cache directory path.
///
/// Uses the platform's standard cache location (e.g. XDG on Linux) with an
/// `sdkstage` subdirectory. Can be overridden with the `SDKSTAGE_CACHE_DIR`
/// environment variable.
pub fn cache_dir() -> Result<PathBuf> {
    if let Ok(cache_dir) = std::env::var("SDKSTAGE_CACHE_DIR") {
        return Ok(PathBuf::from(cache_dir));
    }

    let base = dirs::cache_dir()
        .ok_or_else(|| cache_operation_failed("Could not determine cache directory"))?;

    Ok(base.join(CACHE_DIR))
}

/// Path of the SDK marker directory under a cache or build root
pub fn sdk_dir(root: &Path) -> PathBuf {
    root.join(SDK_DIR)
}

/// Path of the VERSION file under a cache or build root
pub fn version_file(root: &Path) -> PathBuf {
    sdk_dir(root).join(VERSION_FILE)
}
