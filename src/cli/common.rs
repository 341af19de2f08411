//! Error and exit code types shared by CLI commands.

use crate::parser::ParseError;
use std::fmt;

/// Process exit codes.
///
/// 2 is left to clap, which exits with it on command-line usage errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully
    Success = 0,
    /// Keymap source is structurally malformed
    ParseError = 1,
    /// Configuration file is invalid
    ConfigError = 3,
    /// File could not be read or written
    IoError = 4,
}

impl ExitCode {
    /// Numeric process exit status.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error reported by a CLI command, carrying its exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code for the process
    pub code: ExitCode,
    /// Human-readable message
    pub message: String,
}

impl CliError {
    /// File system failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Structural failure in the keymap source.
    pub fn parse(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::ParseError,
            message: message.into(),
        }
    }

    /// Invalid configuration.
    pub fn config(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::ConfigError,
            message: message.into(),
        }
    }

    /// Classifies a failure from the update pipeline.
    ///
    /// Anything caused by a [`ParseError`] is a parse failure; everything else
    /// in the pipeline is file I/O. The full context chain goes into the message.
    pub fn from_update_error(err: &anyhow::Error) -> Self {
        let message = format!("{err:#}");
        if err.chain().any(|cause| cause.is::<ParseError>()) {
            Self::parse(message)
        } else {
            Self::io(message)
        }
    }

    /// Numeric process exit status.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.code.code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;
