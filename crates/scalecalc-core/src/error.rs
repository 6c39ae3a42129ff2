//! Error types and exit codes for scalecalc
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing or malformed input file)
//!
//! The selection core itself never fails; these errors come from loading
//! inputs, reading configuration and persisting session state.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing or malformed input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while running a calculator session
#[derive(Error, Debug)]
pub enum ScaleError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("{what} not found: {path:?}")]
    InputNotFound { what: String, path: PathBuf },

    #[error("invalid {what} in {path:?}: {reason}")]
    InvalidInput {
        what: String,
        path: PathBuf,
        reason: String,
    },

    #[error("no {0} configured (pass --{0} or set it in the config file)")]
    MissingInput(String),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperation {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl ScaleError {
    /// Create an error for a failed IO operation on a path
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        ScaleError::FailedOperation {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an input file that could not be parsed
    pub fn invalid_input(
        what: &str,
        path: impl Into<PathBuf>,
        reason: impl std::fmt::Display,
    ) -> Self {
        ScaleError::InvalidInput {
            what: what.to_string(),
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ScaleError::UnknownFormat(_) | ScaleError::UsageError(_) => ExitCode::Usage,

            ScaleError::InputNotFound { .. }
            | ScaleError::InvalidInput { .. }
            | ScaleError::MissingInput(_) => ExitCode::Data,

            ScaleError::Io(_)
            | ScaleError::Json(_)
            | ScaleError::Toml(_)
            | ScaleError::FailedOperation { .. }
            | ScaleError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            ScaleError::UnknownFormat(_) => "unknown_format",
            ScaleError::UsageError(_) => "usage_error",
            ScaleError::InputNotFound { .. } => "input_not_found",
            ScaleError::InvalidInput { .. } => "invalid_input",
            ScaleError::MissingInput(_) => "missing_input",
            ScaleError::Io(_) => "io_error",
            ScaleError::Json(_) => "json_error",
            ScaleError::Toml(_) => "toml_error",
            ScaleError::FailedOperation { .. } => "failed_operation",
            ScaleError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for scalecalc operations
pub type Result<T> = std::result::Result<T, ScaleError>;
