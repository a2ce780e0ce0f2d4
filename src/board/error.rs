//! Board session-specific error types.

use crate::api::ApiError;

/// Errors that can occur during board operations.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// Task title was empty on create; rejected before any request
    #[error("Task title must not be empty")]
    EmptyTitle,

    /// Task id not present in the loaded collection
    #[error("Task not loaded: {id}")]
    UnknownTask { id: String },

    /// Underlying API request failed
    #[error("Task API error: {0}")]
    Api(#[from] ApiError),
}
