//! SDK payload cache
//!
//! Between builds the platform hands the buildpack cache directory back
//! unchanged. A previously installed SDK in there is only reusable when the
//! version it recorded matches the version resolved for this build.

pub mod paths;

use std::path::Path;

use crate::error::{Result, fs as fs_err};

/// Read the raw contents of a root's SDK VERSION file, if readable.
///
/// No trimming: the file is compared byte-for-byte against the resolved
/// version, so write and read must stay symmetric.
pub fn read_version_file(root: &Path) -> Option<String> {
    std::fs::read_to_string(paths::version_file(root)).ok()
}

/// Record the installed version under a root's SDK directory
pub fn write_version_file(root: &Path, version: &str) -> Result<()> {
    let sdk_dir = paths::sdk_dir(root);
    std::fs::create_dir_all(&sdk_dir)
        .map_err(|e| fs_err::write_failed(sdk_dir.display().to_string(), e.to_string()))?;

    let version_file = paths::version_file(root);
    std::fs::write(&version_file, version)
        .map_err(|e| fs_err::write_failed(version_file.display().to_string(), e.to_string()))
}

/// Whether the cache holds an SDK payload installed at exactly `version`.
///
/// False when the `.dotnet` marker directory is absent, the VERSION file is
/// missing or unreadable, or its contents differ in any way. Exact string
/// equality only; any mismatch forces reinstallation.
pub fn is_cached(cache_dir: &Path, version: &str) -> bool {
    if !paths::sdk_dir(cache_dir).is_dir() {
        return false;
    }

    match read_version_file(cache_dir) {
        Some(recorded) => recorded == version,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_not_cached_without_marker_directory() {
        let cache = TempDir::new().unwrap();
        assert!(!is_cached(cache.path(), "1.0.0-preview2-003121"));
    }

    #[test]
    fn test_not_cached_with_marker_but_no_version_file() {
        let cache = TempDir::new().unwrap();
        fs::create_dir_all(cache.path().join(".dotnet")).unwrap();
        assert!(!is_cached(cache.path(), "1.0.0-preview2-003121"));
    }

    #[test]
    fn test_cached_when_versions_match_exactly() {
        let cache = TempDir::new().unwrap();
        fs::create_dir_all(cache.path().join(".dotnet")).unwrap();
        fs::write(cache.path().join(".dotnet/VERSION"), "1.0.0-preview2-003121").unwrap();

        assert!(is_cached(cache.path(), "1.0.0-preview2-003121"));
    }

    #[test]
    fn test_not_cached_when_versions_differ() {
        let cache = TempDir::new().unwrap();
        fs::create_dir_all(cache.path().join(".dotnet")).unwrap();
        fs::write(cache.path().join(".dotnet/VERSION"), "1.0.0-preview2-003131").unwrap();

        assert!(!is_cached(cache.path(), "1.0.0-preview2-003121"));
    }

    #[test]
    fn test_comparison_is_byte_exact() {
        let cache = TempDir::new().unwrap();
        fs::create_dir_all(cache.path().join(".dotnet")).unwrap();
        // Trailing newline is a mismatch, not a near-hit
        fs::write(cache.path().join(".dotnet/VERSION"), "1.0.0\n").unwrap();

        assert!(!is_cached(cache.path(), "1.0.0"));
    }

    #[test]
    fn test_write_version_file_round_trips() {
        let build = TempDir::new().unwrap();
        write_version_file(build.path(), "1.0.0").unwrap();

        assert!(build.path().join(".dotnet/VERSION").is_file());
        assert_eq!(read_version_file(build.path()).as_deref(), Some("1.0.0"));
        assert!(is_cached(build.path(), "1.0.0"));
    }
}
