//! Error types for planning and executing a scaffold run
//!
//! Every error is terminal to the run. Precondition failures happen before any
//! side effect; action failures abort the remaining plan without rollback.
//! Underlying causes are kept as `source()` so callers can print the chain.

use std::path::PathBuf;
use thiserror::Error;

/// Failures detected before any action runs
#[derive(Error, Debug)]
pub enum PreconditionError {
    #[error("Project name '{0}' is invalid: it can only contain letters, numbers, hyphens, and underscores")]
    InvalidProjectName(String),

    #[error("Directory '{0}' already exists!")]
    DirectoryExists(String),

    #[error("Missing required tools:\n{}", format_missing(.0))]
    MissingTools(Vec<String>),
}

fn format_missing(tools: &[String]) -> String {
    tools
        .iter()
        .map(|t| format!("  - {}", t))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Failures of an external command or filesystem action
#[derive(Error, Debug)]
pub enum ActionError {
    #[error("Failed to start `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed with exit code {code}{detail}")]
    CommandFailed {
        command: String,
        code: i32,
        /// Captured stderr, already prefixed with a newline when present
        detail: String,
    },

    #[error("Failed to {operation} {}", .path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to update {}", .path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ActionError {
    pub(crate) fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    pub(crate) fn command_failed(command: String, code: Option<i32>, stderr: &str) -> Self {
        let stderr = stderr.trim();
        let detail = if stderr.is_empty() {
            String::new()
        } else {
            format!("\n{}", stderr)
        };
        Self::CommandFailed {
            command,
            code: code.unwrap_or(-1),
            detail,
        }
    }
}

/// Top-level error for a scaffold run
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    #[error(transparent)]
    Action(#[from] ActionError),
}

impl Error {
    pub fn is_precondition(&self) -> bool {
        matches!(self, Error::Precondition(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_exists_message() {
        let err = PreconditionError::DirectoryExists("my-app".to_string());
        assert_eq!(err.to_string(), "Directory 'my-app' already exists!");
    }

    #[test]
    fn test_missing_tools_lists_each_tool() {
        let err = PreconditionError::MissingTools(vec![
            "pnpm (install from https://pnpm.io)".to_string(),
            "git (install from https://git-scm.com)".to_string(),
        ]);
        let msg = err.to_string();
        assert!(msg.contains("  - pnpm"));
        assert!(msg.contains("  - git"));
    }

    #[test]
    fn test_command_failure_includes_stderr() {
        let err = ActionError::command_failed("npm install axios".to_string(), Some(1), "ERR! 404\n");
        assert_eq!(
            err.to_string(),
            "`npm install axios` failed with exit code 1\nERR! 404"
        );

        let quiet = ActionError::command_failed("git init".to_string(), None, "  ");
        assert_eq!(quiet.to_string(), "`git init` failed with exit code -1");
    }

    #[test]
    fn test_error_kind() {
        let err: Error = PreconditionError::DirectoryExists("x".to_string()).into();
        assert!(err.is_precondition());
        let err: Error = ActionError::command_failed("git init".to_string(), Some(128), "").into();
        assert!(!err.is_precondition());
    }
}
