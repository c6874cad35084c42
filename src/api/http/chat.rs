// src/api/http/chat.rs

use axum::{
    body::Bytes,
    extract::State,
    response::{Html, IntoResponse},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::state::AppState;

const INDEX_PAGE: &str = include_str!("../../../assets/index.html");

/// Pull `message` out of a raw request body.
///
/// The body is taken as bytes so that every malformed shape (not JSON,
/// missing field, wrong type) maps onto the same 400 contract instead of
/// axum's own rejection responses.
fn extract_message(body: &[u8]) -> ApiResult<String> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::bad_request(format!("body is not valid JSON: {e}")))?;

    match value.get("message") {
        Some(Value::String(message)) if !message.is_empty() => Ok(message.clone()),
        Some(Value::String(_)) => Err(ApiError::bad_request("message is empty")),
        Some(_) => Err(ApiError::bad_request("message is not a string")),
        None => Err(ApiError::bad_request("message is missing")),
    }
}

pub async fn chat_handler(State(app_state): State<Arc<AppState>>, body: Bytes) -> impl IntoResponse {
    let result: ApiResult<_> = async {
        let message = extract_message(&body)?;
        let reply = app_state.dispatcher.handle(&message).await?;
        Ok(Json(reply))
    }
    .await;

    match result {
        Ok(response) => response.into_response(),
        Err(error) => error.into_response(),
    }
}

/// Health check handler
pub async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Single-page chat UI
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_extract_message() {
        assert_eq!(extract_message(br#"{"message":"hello"}"#).unwrap(), "hello");

        let bad_bodies: [&[u8]; 6] = [
            b"not json",
            br#"{}"#,
            br#"{"message":""}"#,
            br#"{"message":42}"#,
            br#"{"message":null}"#,
            br#"["message"]"#,
        ];
        for body in bad_bodies {
            let err = extract_message(body).unwrap_err();
            assert_eq!(err.status_code, StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_index_page_has_form() {
        assert!(INDEX_PAGE.contains("<form"));
        assert!(INDEX_PAGE.contains("/api/chat"));
    }
}
