//! Error types and exit codes for atoll
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown island, missing resource, malformed chart)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes reported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown island, missing resource, bad chart (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Result type alias used throughout atoll
pub type Result<T> = std::result::Result<T, AtollError>;

/// All errors surfaced by atoll
#[derive(Debug, Error)]
pub enum AtollError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("island not found: {name}")]
    UnknownIsland { name: String },

    #[error("island {island} holds no {resource}")]
    MissingResource { island: String, resource: String },

    #[error("invalid route {from} -> {to}: travel time {travel_time} is not a non-negative number")]
    InvalidRoute {
        from: String,
        to: String,
        travel_time: f64,
    },

    #[error("duplicate island in chart: {name}")]
    DuplicateIsland { name: String },

    #[error("no route from {from} to {to}")]
    NoRoute { from: String, to: String },

    #[error("invalid chart {path:?}: {reason}")]
    InvalidChart { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Other(String),
}

impl AtollError {
    /// Map this error to a process exit code
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            AtollError::UnknownFormat(_) | AtollError::UsageError(_) => ExitCode::Usage,

            // Data errors
            AtollError::UnknownIsland { .. }
            | AtollError::MissingResource { .. }
            | AtollError::InvalidRoute { .. }
            | AtollError::DuplicateIsland { .. }
            | AtollError::NoRoute { .. }
            | AtollError::InvalidChart { .. } => ExitCode::Data,

            // Generic failures
            AtollError::Io(_)
            | AtollError::Json(_)
            | AtollError::Yaml(_)
            | AtollError::Other(_) => ExitCode::Failure,
        }
    }

    /// Stable identifier for the error variant, used in the JSON envelope
    pub fn error_type(&self) -> &'static str {
        match self {
            AtollError::UnknownFormat(_) => "unknown_format",
            AtollError::UsageError(_) => "usage",
            AtollError::UnknownIsland { .. } => "unknown_island",
            AtollError::MissingResource { .. } => "missing_resource",
            AtollError::InvalidRoute { .. } => "invalid_route",
            AtollError::DuplicateIsland { .. } => "duplicate_island",
            AtollError::NoRoute { .. } => "no_route",
            AtollError::InvalidChart { .. } => "invalid_chart",
            AtollError::Io(_) => "io",
            AtollError::Json(_) => "json",
            AtollError::Yaml(_) => "yaml",
            AtollError::Other(_) => "other",
        }
    }

    /// Structured error envelope for `--format json` consumers
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
