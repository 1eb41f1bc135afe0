//! Error types and exit codes for convo-notes
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (including an interrupted batch)
//! - 2: Usage error (bad flags/args, unusable glob pattern)
//! - 3: Data error (missing input, invalid configuration)
//!
//! Per-document problems during a batch (unreadable source, unwritable
//! output, duplicates) are not errors at this level; they are recorded as
//! outcomes in a [`crate::convert::BatchReport`].

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the convo-notes binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing input, invalid configuration (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during convo-notes operations
#[derive(Error, Debug)]
pub enum ConvoError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid file pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    // Data errors (exit code 3)
    #[error("input {kind} not found: {path:?}")]
    InputNotFound { kind: String, path: PathBuf },

    #[error("invalid configuration in {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),

    #[error("conversion interrupted; re-run the same command to pick up the remaining files")]
    Interrupted,
}

impl ConvoError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        ConvoError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an input path that does not exist
    pub fn input_not_found(kind: &str, path: impl Into<PathBuf>) -> Self {
        ConvoError::InputNotFound {
            kind: kind.to_string(),
            path: path.into(),
        }
    }

    /// Create an error for a configuration file that failed validation
    pub fn invalid_config(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        ConvoError::InvalidConfig {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ConvoError::UsageError(_) | ConvoError::InvalidPattern { .. } => ExitCode::Usage,

            ConvoError::InputNotFound { .. } | ConvoError::InvalidConfig { .. } => ExitCode::Data,

            ConvoError::Io(_)
            | ConvoError::Yaml(_)
            | ConvoError::Json(_)
            | ConvoError::Toml(_)
            | ConvoError::FailedOperationWithTarget { .. }
            | ConvoError::Other(_)
            | ConvoError::Interrupted => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            ConvoError::UsageError(_) => "usage_error",
            ConvoError::InvalidPattern { .. } => "invalid_pattern",
            ConvoError::InputNotFound { .. } => "input_not_found",
            ConvoError::InvalidConfig { .. } => "invalid_config",
            ConvoError::Io(_) => "io_error",
            ConvoError::Yaml(_) => "yaml_error",
            ConvoError::Json(_) => "json_error",
            ConvoError::Toml(_) => "toml_error",
            ConvoError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            ConvoError::Other(_) => "other",
            ConvoError::Interrupted => "interrupted",
        }
    }

    /// Convert error to JSON representation for structured error output.
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

/// Result type alias for convo-notes operations
pub type Result<T> = std::result::Result<T, ConvoError>;
