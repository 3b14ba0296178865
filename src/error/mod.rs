//! Error types and handling for sdkstage
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`manifest`]: Manifest and version-resolution errors
//! - [`sdk`]: SDK download and activation errors
//! - [`restore`]: Dependency-restore errors
//! - [`shell`]: External-process errors
//! - [`fs`]: File system errors
//! - [`cache`]: Cache errors

#![allow(dead_code)]

pub mod cache;
pub mod fs;
pub mod manifest;
pub mod restore;
pub mod sdk;
pub mod shell;

#[allow(unused_imports)]
pub use cache::operation_failed as cache_operation_failed;
#[allow(unused_imports)]
pub use fs::{io_error, read_failed as file_read_failed, write_failed as file_write_failed};
#[allow(unused_imports)]
pub use manifest::{
    not_found as manifest_not_found, parse_failed as manifest_parse_failed,
    version_not_in_manifest, version_not_resolved,
};
#[allow(unused_imports)]
pub use restore::failed as restore_failed;
#[allow(unused_imports)]
pub use sdk::download_failed;
#[allow(unused_imports)]
pub use shell::command_failed;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for sdkstage operations
#[derive(Error, Diagnostic, Debug)]
pub enum StageError {
    // Manifest / version resolution errors
    #[error("Buildpack manifest not found: {path}")]
    #[diagnostic(
        code(sdkstage::manifest::not_found),
        help("Pass the buildpack manifest.yml via --manifest")
    )]
    ManifestNotFound { path: String },

    #[error("Failed to parse buildpack manifest: {path}")]
    #[diagnostic(code(sdkstage::manifest::parse_failed))]
    ManifestParseFailed { path: String, reason: String },

    #[error("Unable to resolve a .NET SDK version: {message}")]
    #[diagnostic(
        code(sdkstage::manifest::version_not_resolved),
        help("The manifest must declare a default version for the 'dotnet' dependency")
    )]
    VersionNotResolved { message: String },

    #[error(".NET SDK version '{version}' is not available in the buildpack manifest")]
    #[diagnostic(
        code(sdkstage::manifest::version_not_in_manifest),
        help("Pin a version from the manifest's dependency list in global.json, or remove the pin")
    )]
    VersionNotInManifest { version: String },

    // SDK install errors
    #[error("Failed to download .NET SDK {version} (exit status {status})")]
    #[diagnostic(
        code(sdkstage::sdk::download_failed),
        help("Check that the buildpack's dependency archive is reachable from the build container")
    )]
    DownloadFailed { version: String, status: i32 },

    // Restore errors
    #[error("dotnet restore failed for '{project}' (exit status {status})")]
    #[diagnostic(code(sdkstage::restore::failed))]
    RestoreFailed { project: String, status: i32 },

    // External process errors
    #[error("Failed to run command '{command}': {reason}")]
    #[diagnostic(code(sdkstage::shell::command_failed))]
    CommandFailed { command: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(sdkstage::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(sdkstage::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(sdkstage::fs::io_error))]
    IoError { message: String },

    // Cache errors
    #[error("Cache operation failed: {message}")]
    #[diagnostic(code(sdkstage::cache::operation_failed))]
    CacheOperationFailed { message: String },
}

impl From<std::io::Error> for StageError {
    fn from(err: std::io::Error) -> Self {
        StageError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for StageError {
    fn from(err: serde_yaml::Error) -> Self {
        StageError::ManifestParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for StageError {
    fn from(err: serde_json::Error) -> Self {
        StageError::ManifestParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, StageError>;
