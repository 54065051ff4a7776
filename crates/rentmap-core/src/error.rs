//! Error types and exit codes for rentmap
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing or unreadable data file, malformed records)
//!
//! Selection misses and records without coordinates are not errors; they are
//! reported as outcome values by the synchronizer and the grouper.

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the rentmap CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing data file, malformed records (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during rentmap operations
#[derive(Error, Debug)]
pub enum RentmapError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("failed to load data from {path:?}: {reason}")]
    DataLoad { path: PathBuf, reason: String },

    #[error("invalid record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("map initialization failed: {0}")]
    InitializationFailure(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

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
}

impl RentmapError {
    /// Create an error for a data file that could not be loaded
    pub fn data_load(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        RentmapError::DataLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        RentmapError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or argument
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RentmapError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        RentmapError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RentmapError::UnknownFormat(_)
            | RentmapError::UsageError(_)
            | RentmapError::InvalidValue { .. } => ExitCode::Usage,

            RentmapError::DataLoad { .. }
            | RentmapError::InvalidRecord { .. }
            | RentmapError::NotFound { .. } => ExitCode::Data,

            RentmapError::InitializationFailure(_)
            | RentmapError::Io(_)
            | RentmapError::Json(_)
            | RentmapError::Toml(_)
            | RentmapError::FailedOperationWithTarget { .. }
            | RentmapError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            RentmapError::UnknownFormat(_) => "unknown_format",
            RentmapError::UsageError(_) => "usage_error",
            RentmapError::InvalidValue { .. } => "invalid_value",
            RentmapError::DataLoad { .. } => "data_load_failure",
            RentmapError::InvalidRecord { .. } => "invalid_record",
            RentmapError::NotFound { .. } => "not_found",
            RentmapError::InitializationFailure(_) => "initialization_failure",
            RentmapError::Io(_) => "io_error",
            RentmapError::Json(_) => "json_error",
            RentmapError::Toml(_) => "toml_error",
            RentmapError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            RentmapError::Other(_) => "other",
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

/// Result type alias for rentmap operations
pub type Result<T> = std::result::Result<T, RentmapError>;
