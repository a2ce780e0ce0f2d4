//! Task API-specific error types.

/// Errors that can occur during remote task API operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Failed to deserialize API response
    #[error("Failed to deserialize API response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// Task not found
    #[error("Task not found: {id}")]
    #[allow(dead_code)]
    TaskNotFound { id: String },

    /// Generic API error
    #[error("Task API error: {0}")]
    #[allow(dead_code)]
    Other(String),
}
