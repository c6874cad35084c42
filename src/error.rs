// src/error.rs
// Standardized error types for study-buddy

use std::time::Duration;

use thiserror::Error;

/// Main error type for the study-buddy library
#[derive(Error, Debug)]
pub enum HelperError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("LLM call exceeded deadline of {0:?}")]
    Timeout(Duration),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Result using HelperError
pub type Result<T> = std::result::Result<T, HelperError>;

impl HelperError {
    /// Whether the failure came from the request itself rather than the service
    pub fn is_client_error(&self) -> bool {
        matches!(self, HelperError::InvalidInput(_))
    }
}
