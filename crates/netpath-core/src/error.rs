//! Error types and exit codes for netpath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid network name)
//! - 3: Data error (invalid network, unknown node, missing network)
//! - 4: No path between the requested nodes

mod macros;

use std::fmt;

use thiserror::Error;

/// Which end of a path query an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Source => write!(f, "source"),
            Endpoint::Destination => write!(f, "destination"),
        }
    }
}

/// Exit codes per netpath CLI contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid network or missing data (3)
    Data = 3,
    /// Valid query, but the nodes are not connected (4)
    NoPath = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during netpath operations
#[derive(Error, Debug)]
pub enum NetpathError {
    // Network validation errors (exit code 3)
    #[error("edge {index} is missing required field '{field}' (expected from, to, weight)")]
    MalformedEdge { index: usize, field: &'static str },

    #[error("edge {index} references nonexistent node '{node}'")]
    DanglingEdgeReference { index: usize, node: String },

    #[error("edge {index} has invalid weight {value} (expected a finite, non-negative number)")]
    InvalidWeight { index: usize, value: String },

    #[error("sum of edge weights is not a finite number")]
    WeightOverflow,

    #[error("network has no nodes")]
    EmptyNetwork,

    #[error("duplicate node '{node}'")]
    DuplicateNode { node: String },

    #[error("{role} node '{node}' not found in network")]
    UnknownNode { role: Endpoint, node: String },

    #[error("network '{name}' not found")]
    NetworkNotFound { name: String },

    // Usage errors (exit code 2)
    #[error("invalid network name: '{name}'")]
    InvalidNetworkName { name: String },

    #[error("{0}")]
    UsageError(String),

    // Search outcome (exit code 4)
    #[error("no path found from '{from}' to '{to}'")]
    NoPathFound { from: String, to: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl NetpathError {
    /// Create an error for a node that is absent from the network
    pub fn unknown_node(role: Endpoint, node: impl Into<String>) -> Self {
        NetpathError::UnknownNode {
            role,
            node: node.into(),
        }
    }

    /// Create an error for a stored network that does not exist
    pub fn network_not_found(name: impl Into<String>) -> Self {
        NetpathError::NetworkNotFound { name: name.into() }
    }

    /// True for failures caused by the caller's input rather than the
    /// environment. `NoPathFound` is not one of them.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            NetpathError::MalformedEdge { .. }
                | NetpathError::DanglingEdgeReference { .. }
                | NetpathError::InvalidWeight { .. }
                | NetpathError::WeightOverflow
                | NetpathError::EmptyNetwork
                | NetpathError::DuplicateNode { .. }
                | NetpathError::UnknownNode { .. }
                | NetpathError::InvalidNetworkName { .. }
                | NetpathError::UsageError(_)
        )
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            NetpathError::InvalidNetworkName { .. } | NetpathError::UsageError(_) => {
                ExitCode::Usage
            }

            NetpathError::MalformedEdge { .. }
            | NetpathError::DanglingEdgeReference { .. }
            | NetpathError::InvalidWeight { .. }
            | NetpathError::WeightOverflow
            | NetpathError::EmptyNetwork
            | NetpathError::DuplicateNode { .. }
            | NetpathError::UnknownNode { .. }
            | NetpathError::NetworkNotFound { .. } => ExitCode::Data,

            NetpathError::NoPathFound { .. } => ExitCode::NoPath,

            NetpathError::Io(_)
            | NetpathError::Json(_)
            | NetpathError::Toml(_)
            | NetpathError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            NetpathError::MalformedEdge { .. } => "malformed_edge",
            NetpathError::DanglingEdgeReference { .. } => "dangling_edge_reference",
            NetpathError::InvalidWeight { .. } => "invalid_weight",
            NetpathError::WeightOverflow => "weight_overflow",
            NetpathError::EmptyNetwork => "empty_network",
            NetpathError::DuplicateNode { .. } => "duplicate_node",
            NetpathError::UnknownNode { .. } => "unknown_node",
            NetpathError::NetworkNotFound { .. } => "network_not_found",
            NetpathError::InvalidNetworkName { .. } => "invalid_network_name",
            NetpathError::UsageError(_) => "usage_error",
            NetpathError::NoPathFound { .. } => "no_path_found",
            NetpathError::Io(_) => "io_error",
            NetpathError::Json(_) => "json_error",
            NetpathError::Toml(_) => "toml_error",
            NetpathError::Other(_) => "other",
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

/// Result type alias for netpath operations
pub type Result<T> = std::result::Result<T, NetpathError>;
