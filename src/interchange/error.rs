//! Error types for interchange operations.

use thiserror::Error;

use crate::symbols::TypeId;

/// Errors that can occur while exporting a resolution.
#[derive(Debug, Error)]
pub enum InterchangeError {
    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// The resolution refers to a type the host does not know.
    #[error("Unresolved type: {0:?}")]
    UnresolvedType(TypeId),
}

impl InterchangeError {
    /// Create a JSON error.
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }
}

impl From<serde_json::Error> for InterchangeError {
    fn from(err: serde_json::Error) -> Self {
        Self::json(err.to_string())
    }
}
