//! Error types for branchwise-core
//!
//! Every variant is fatal to the current analysis run and carries enough
//! context (function, path, variable, domain) to report the failure once at
//! the top of the call chain.

use crate::config::ConfigError;
use crate::features::constraint::Domain;
use thiserror::Error;

/// Main error type for analysis operations
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The explorer cannot model a statement or condition shape
    #[error("Unsupported construct in '{function}' (line {line}): {detail}")]
    UnsupportedConstruct {
        function: String,
        line: usize,
        detail: String,
    },

    /// A declared type has no decode rule
    #[error("Unsupported type '{type_name}' in '{function}'")]
    UnsupportedType { function: String, type_name: String },

    /// Witness search exhausted its attempt budget
    #[error("Unsatisfiable domain {domain} for '{variable}' on path '{path_id}' of '{function}'")]
    UnsatisfiableDomain {
        function: String,
        path_id: String,
        variable: String,
        domain: Domain,
    },

    /// Oracle output missing or unparseable (`path_id` is `None` when the whole run failed)
    #[error("Oracle failure for '{function}': {reason}")]
    OracleFailure {
        function: String,
        path_id: Option<String>,
        reason: String,
        raw_output: Option<String>,
    },

    /// Two distinct paths produced the same path id (only when rejection is enabled)
    #[error("Path id collision in '{function}': '{path_id}'")]
    PathCollision { function: String, path_id: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AnalysisError {
    /// Create an unsupported construct error
    pub fn unsupported(function: impl Into<String>, line: usize, detail: impl Into<String>) -> Self {
        AnalysisError::UnsupportedConstruct {
            function: function.into(),
            line,
            detail: detail.into(),
        }
    }

    /// Name of the function the failure belongs to, if any
    pub fn function(&self) -> Option<&str> {
        match self {
            Self::UnsupportedConstruct { function, .. }
            | Self::UnsupportedType { function, .. }
            | Self::UnsatisfiableDomain { function, .. }
            | Self::OracleFailure { function, .. }
            | Self::PathCollision { function, .. } => Some(function),
            _ => None,
        }
    }
}

/// Result type alias for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;
