//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Update error: {0}")]
    Update(#[from] UpdateError),

    #[error("Model error: {0}")]
    Model(#[from] screenkit_model::ModelError),

    #[error("Builder is not connected")]
    NotConnected,

    #[error("Builder event channel closed")]
    ChannelClosed,
}

/// A store update that doesn't make sense against the current inputs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UpdateError {
    #[error("No edit session is active for {0}")]
    NoActiveSession(&'static str),

    #[error("No drag in progress")]
    NoDragInProgress,

    #[error("Drag target parent is empty")]
    EmptyDragTarget,
}
