//! Dependency-restore errors

use super::StageError;

/// Creates a restore failed error
pub fn failed(project: impl Into<String>, status: i32) -> StageError {
    StageError::RestoreFailed {
        project: project.into(),
        status,
    }
}
