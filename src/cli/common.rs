//! Shared CLI error and exit-code types.

use std::fmt;

/// Process exit codes for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully
    Success = 0,
    /// Invalid input or configuration state
    ValidationError = 1,
    /// Filesystem or serialization failure
    IoError = 2,
}

/// Error type carrying a user-facing message and an exit code.
#[derive(Debug)]
pub struct CliError {
    message: String,
    exit_code: ExitCode,
}

/// Result alias used throughout the CLI commands
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Creates a validation error (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::ValidationError,
        }
    }

    /// Creates an IO error (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::IoError,
        }
    }

    /// The exit code this error maps to.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}
