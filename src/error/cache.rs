//! Cache errors

use super::StageError;

/// Creates a cache operation failed error
pub fn operation_failed(message: impl Into<String>) -> StageError {
    StageError::CacheOperationFailed {
        message: message.into(),
    }
}
