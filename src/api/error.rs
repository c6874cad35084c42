// src/api/error.rs
// Error contract for HTTP responses: fixed bodies, details only in the logs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::fmt;
use tracing::{error, warn};

use super::types::ChatReply;
use crate::error::HelperError;

/// API error response; the body never carries internal details
#[derive(Debug)]
pub struct ApiError {
    pub status_code: StatusCode,
    pub detail: String,
}

impl ApiError {
    /// Malformed request body or empty message
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            status_code: StatusCode::BAD_REQUEST,
            detail: detail.into(),
        }
    }

    /// Anything the service failed at
    pub fn internal(detail: impl Into<String>) -> Self {
        Self {
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
            detail: detail.into(),
        }
    }

    fn body(&self) -> ChatReply {
        if self.status_code.is_client_error() {
            ChatReply::invalid_input()
        } else {
            ChatReply::apology()
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.detail, self.status_code)
    }
}

impl std::error::Error for ApiError {}

impl From<HelperError> for ApiError {
    fn from(err: HelperError) -> Self {
        if err.is_client_error() {
            ApiError::bad_request(err.to_string())
        } else {
            ApiError::internal(err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status_code.is_server_error() {
            error!("Chat API error: {}", self.detail);
        } else {
            warn!("Rejected chat request: {}", self.detail);
        }
        (self.status_code, Json(self.body())).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{APOLOGY_MESSAGE, INVALID_INPUT_MESSAGE};

    #[test]
    fn test_helper_error_mapping() {
        let bad: ApiError = HelperError::InvalidInput("empty".to_string()).into();
        assert_eq!(bad.status_code, StatusCode::BAD_REQUEST);
        assert_eq!(bad.body().message, INVALID_INPUT_MESSAGE);

        let internal: ApiError = HelperError::Llm("secret upstream detail".to_string()).into();
        assert_eq!(internal.status_code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal.body().message, APOLOGY_MESSAGE);
        assert!(!internal.body().message.contains("secret"));
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::bad_request("missing message").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::internal("boom").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
