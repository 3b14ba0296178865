//! External-process errors

use super::StageError;

/// Creates a command failed error
pub fn command_failed(command: impl Into<String>, reason: impl Into<String>) -> StageError {
    StageError::CommandFailed {
        command: command.into(),
        reason: reason.into(),
    }
}
