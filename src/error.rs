//! Error types for the todo list.

use thiserror::Error;

/// Failures surfaced by the todo store and its storage adapter
///
/// None of these are fatal: `NotFound` and `Validation` are returned to the
/// presentation layer, while `Deserialization` and `Storage` are absorbed by
/// the storage adapter after logging.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    #[error("Todo '{id}' not found")]
    NotFound { id: String },

    #[error("Failed to parse stored todos: {reason}")]
    Deserialization { reason: String },

    #[error("Storage error: {reason}")]
    Storage { reason: String },

    #[error("Validation failed: {reason}")]
    Validation { reason: String },

    #[error("Invalid {field}: '{value}'")]
    InvalidValue { field: &'static str, value: String },
}

impl TodoError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }
}

impl From<serde_json::Error> for TodoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Deserialization {
            reason: err.to_string(),
        }
    }
}

impl From<anyhow::Error> for TodoError {
    fn from(err: anyhow::Error) -> Self {
        Self::Storage {
            reason: format!("{:#}", err),
        }
    }
}

/// Result type alias for todo operations
pub type TodoResult<T> = Result<T, TodoError>;
