//! Error types and exit codes for roadnet
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown city, empty or disconnected graph)

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
    /// Data error - the graph cannot answer the request (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading a road network or running an algorithm
#[derive(Error, Debug)]
pub enum RoadnetError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0}")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("city not found: {name}")]
    UnknownVertex { name: String },

    #[error("graph is empty")]
    EmptyGraph,

    #[error("graph is disconnected: spanning tree accepted {accepted} of {required} edges")]
    DisconnectedGraph { accepted: usize, required: usize },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl RoadnetError {
    /// Create an error for a city that is not part of the graph
    pub fn unknown_vertex(name: impl Into<String>) -> Self {
        RoadnetError::UnknownVertex { name: name.into() }
    }

    /// Create an error for an invalid argument value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RoadnetError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed IO operation on a specific path
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        RoadnetError::Other(format!("failed to {} {}: {}", operation, path, error))
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RoadnetError::UnknownFormat(_)
            | RoadnetError::UsageError(_)
            | RoadnetError::InvalidValue { .. } => ExitCode::Usage,

            RoadnetError::UnknownVertex { .. }
            | RoadnetError::EmptyGraph
            | RoadnetError::DisconnectedGraph { .. } => ExitCode::Data,

            RoadnetError::Io(_)
            | RoadnetError::Yaml(_)
            | RoadnetError::Json(_)
            | RoadnetError::Toml(_)
            | RoadnetError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            RoadnetError::UnknownFormat(_) => "unknown_format",
            RoadnetError::UsageError(_) => "usage_error",
            RoadnetError::InvalidValue { .. } => "invalid_value",
            RoadnetError::UnknownVertex { .. } => "unknown_vertex",
            RoadnetError::EmptyGraph => "empty_graph",
            RoadnetError::DisconnectedGraph { .. } => "disconnected_graph",
            RoadnetError::Io(_) => "io_error",
            RoadnetError::Yaml(_) => "yaml_error",
            RoadnetError::Json(_) => "json_error",
            RoadnetError::Toml(_) => "toml_error",
            RoadnetError::Other(_) => "other",
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

/// Result type alias for roadnet operations
pub type Result<T> = std::result::Result<T, RoadnetError>;
