//! SDK download and activation errors

use super::StageError;

/// Creates a download failed error
pub fn download_failed(version: impl Into<String>, status: i32) -> StageError {
    StageError::DownloadFailed {
        version: version.into(),
        status,
    }
}
