//! Error types and exit codes for grafo
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, malformed edge specs)
//! - 3: Graph error (unknown vertex, duplicate edge, self-loop)

mod macros;

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
    /// Graph data error - unknown vertex, duplicate edge (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during grafo operations
#[derive(Error, Debug)]
pub enum GrafoError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("invalid weight: {value} (weights must be finite and non-negative)")]
    InvalidWeight { value: String },

    // Graph errors (exit code 3)
    #[error("vertex not found: {vertex}")]
    UnknownVertex { vertex: String },

    #[error("duplicate edge: {from}-{to}")]
    DuplicateEdge { from: String, to: String },

    #[error("self-loop not allowed: {vertex}-{vertex}")]
    SelfLoop { vertex: String },

    #[error("edge {from}-{to} has no weight")]
    MissingWeight { from: String, to: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl GrafoError {
    /// Create an error for a vertex that was never added to the graph
    pub fn unknown_vertex(vertex: impl std::fmt::Display) -> Self {
        GrafoError::UnknownVertex {
            vertex: vertex.to_string(),
        }
    }

    /// Create an error for an edge that already exists
    pub fn duplicate_edge(from: impl std::fmt::Display, to: impl std::fmt::Display) -> Self {
        GrafoError::DuplicateEdge {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Create an error for an edge with no weight where one is required
    pub fn missing_weight(from: impl std::fmt::Display, to: impl std::fmt::Display) -> Self {
        GrafoError::MissingWeight {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GrafoError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GrafoError::UnknownFormat(_)
            | GrafoError::UsageError(_)
            | GrafoError::InvalidValue { .. }
            | GrafoError::InvalidWeight { .. } => ExitCode::Usage,

            GrafoError::UnknownVertex { .. }
            | GrafoError::DuplicateEdge { .. }
            | GrafoError::SelfLoop { .. }
            | GrafoError::MissingWeight { .. } => ExitCode::Data,

            GrafoError::Io(_)
            | GrafoError::Json(_)
            | GrafoError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GrafoError::UnknownFormat(_) => "unknown_format",
            GrafoError::UsageError(_) => "usage_error",
            GrafoError::InvalidValue { .. } => "invalid_value",
            GrafoError::InvalidWeight { .. } => "invalid_weight",
            GrafoError::UnknownVertex { .. } => "unknown_vertex",
            GrafoError::DuplicateEdge { .. } => "duplicate_edge",
            GrafoError::SelfLoop { .. } => "self_loop",
            GrafoError::MissingWeight { .. } => "missing_weight",
            GrafoError::Io(_) => "io_error",
            GrafoError::Json(_) => "json_error",
            GrafoError::Other(_) => "other",
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

/// Result type alias for grafo operations
pub type Result<T> = std::result::Result<T, GrafoError>;
