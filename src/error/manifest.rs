//! Manifest and version-resolution errors

use super::StageError;

/// Creates a manifest not found error
pub fn not_found(path: impl Into<String>) -> StageError {
    StageError::ManifestNotFound { path: path.into() }
}

/// Creates a manifest parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> StageError {
    StageError::ManifestParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a version not resolved error
pub fn version_not_resolved(message: impl Into<String>) -> StageError {
    StageError::VersionNotResolved {
        message: message.into(),
    }
}

/// Creates an error for a pinned version the manifest does not carry
pub fn version_not_in_manifest(version: impl Into<String>) -> StageError {
    StageError::VersionNotInManifest {
        version: version.into(),
    }
}
