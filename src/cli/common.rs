//! Shared types for CLI command handlers.

use crate::config::Config;
use std::path::Path;
use thiserror::Error;

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Invalid input, arguments, or file contents
    ValidationError = 1,
    /// File system or serialization failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI commands.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// Exit code the process should terminate with
    pub kind: ExitCode,
    /// Human-readable message printed to stderr
    pub message: String,
}

impl CliError {
    /// Creates a validation error (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// Creates an I/O error (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Numeric exit code for this error.
    pub const fn exit_code(&self) -> i32 {
        self.kind.code()
    }
}

/// Result type returned by CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Loads the user configuration, mapping failures to a validation error.
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

/// Maps a board loading failure to an exit code.
///
/// Missing or unreadable files are I/O errors; malformed contents are
/// validation errors.
pub fn board_load_error(path: &Path, err: anyhow::Error) -> CliError {
    let message = format!("Failed to load board: {err:#}");
    if !path.is_file() || err.chain().any(|cause| cause.is::<std::io::Error>()) {
        CliError::io(message)
    } else {
        CliError::validation(message)
    }
}

/// Label for a category in command output.
pub fn category_label(name: &str) -> &str {
    if name.is_empty() {
        "(root)"
    } else {
        name
    }
}
