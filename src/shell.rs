//! External process execution
//!
//! Install and restore shell out to the buildpack's download helper and to
//! `dotnet restore`. The [`Shell`] trait keeps that seam injectable so the
//! pipeline is unit testable without running real processes.

use std::process::Command;

use crate::error::{Result, shell};

/// Command execution seam for the SDK pipeline
pub trait Shell {
    /// Run a command line and return its exit status.
    ///
    /// A spawn failure is an error; a nonzero exit status is not (callers
    /// decide whether it is fatal).
    fn exec(&self, command: &str) -> Result<i32>;
}

/// Shell that runs commands through `sh -c`, blocking until completion
#[derive(Debug, Default)]
pub struct ProcessShell;

impl Shell for ProcessShell {
    fn exec(&self, command: &str) -> Result<i32> {
        let status = Command::new("sh")
            .arg("-c")
            .arg(command)
            .status()
            .map_err(|e| shell::command_failed(command, e.to_string()))?;

        Ok(status.code().unwrap_or(-1))
    }
}

/// Scripted shell for unit tests: records every command and replays
/// configured exit statuses in order (defaulting to 0 when exhausted).
#[cfg(test)]
#[derive(Default)]
pub struct ScriptedShell {
    commands: std::cell::RefCell<Vec<String>>,
    statuses: std::cell::RefCell<Vec<i32>>,
}

#[cfg(test)]
impl ScriptedShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_statuses(statuses: Vec<i32>) -> Self {
        Self {
            commands: std::cell::RefCell::new(Vec::new()),
            statuses: std::cell::RefCell::new(statuses),
        }
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.borrow().clone()
    }
}

#[cfg(test)]
impl Shell for ScriptedShell {
    fn exec(&self, command: &str) -> Result<i32> {
        self.commands.borrow_mut().push(command.to_string());
        let mut statuses = self.statuses.borrow_mut();
        if statuses.is_empty() {
            Ok(0)
        } else {
            Ok(statuses.remove(0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_shell_success_status() {
        let status = ProcessShell.exec("true").unwrap();
        assert_eq!(status, 0);
    }

    #[test]
    fn test_process_shell_failure_status() {
        let status = ProcessShell.exec("exit 3").unwrap();
        assert_eq!(status, 3);
    }

    #[test]
    fn test_scripted_shell_records_and_replays() {
        let shell = ScriptedShell::with_statuses(vec![0, 2]);
        assert_eq!(shell.exec("first").unwrap(), 0);
        assert_eq!(shell.exec("second").unwrap(), 2);
        assert_eq!(shell.exec("third").unwrap(), 0);
        assert_eq!(shell.commands(), vec!["first", "second", "third"]);
    }
}
