//! Error types for the document model

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Duplicate component id: {0}")]
    DuplicateComponentId(String),
}

/// Model Result type alias
pub type ModelResult<T> = Result<T, ModelError>;
