//! Error types and exit codes for wgraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unknown vertex label)
//! - 3: Data error (invalid graph input, unreadable config)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

use crate::graph::types::{Vertex, Weight};

/// Exit codes for the wgraph binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid graph or config (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graph operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("unknown strategy: {0} (expected: prim or kruskal)")]
    UnknownStrategy(String),

    #[error("unknown vertex label: '{0}'")]
    UnknownLabel(char),

    #[error("invalid vertex label: {0:?} (expected a single character)")]
    InvalidLabel(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("vertex {vertex} out of range (graph has {vertex_count} vertices)")]
    VertexOutOfRange { vertex: Vertex, vertex_count: usize },

    #[error("negative weight {weight} on edge {from} -> {to}")]
    NegativeWeight { from: Vertex, to: Vertex, weight: Weight },

    #[error("invalid config in {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    #[error("weight overflow in {0}")]
    WeightOverflow(String),

    // Generic failures (exit code 1)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for a vertex index that is not in `0..vertex_count`
    pub fn vertex_out_of_range(vertex: Vertex, vertex_count: usize) -> Self {
        GraphError::VertexOutOfRange {
            vertex,
            vertex_count,
        }
    }

    /// Create an error for a config file that could not be read or parsed
    pub fn invalid_config(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        GraphError::InvalidConfig {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_)
            | GraphError::UnknownStrategy(_)
            | GraphError::UnknownLabel(_)
            | GraphError::InvalidLabel(_)
            | GraphError::UsageError(_) => ExitCode::Usage,

            GraphError::VertexOutOfRange { .. }
            | GraphError::NegativeWeight { .. }
            | GraphError::InvalidConfig { .. }
            | GraphError::WeightOverflow(_) => ExitCode::Data,

            GraphError::Json(_) | GraphError::Toml(_) | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UnknownStrategy(_) => "unknown_strategy",
            GraphError::UnknownLabel(_) => "unknown_label",
            GraphError::InvalidLabel(_) => "invalid_label",
            GraphError::UsageError(_) => "usage_error",
            GraphError::VertexOutOfRange { .. } => "vertex_out_of_range",
            GraphError::NegativeWeight { .. } => "negative_weight",
            GraphError::InvalidConfig { .. } => "invalid_config",
            GraphError::WeightOverflow(_) => "weight_overflow",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Other(_) => "other",
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

/// Result type alias for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;
