//! Structured output extraction
//!
//! Models frequently wrap JSON in a markdown fence. The accepted grammar is:
//!
//! ```text
//! output  := prose* fenced prose* | bare
//! fenced  := "```json" payload "```"      (first such pair wins)
//! bare    := ["```"] payload ["```"]      (optional leading/trailing fence)
//! ```
//!
//! The payload is trimmed and then deserialized into the requested type.

use serde::de::DeserializeOwned;
use thiserror::Error;

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("malformed JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("payload does not match schema: {0}")]
    Schema(String),
}

/// Locate the JSON payload inside raw model output
pub fn extract_payload(raw: &str) -> &str {
    if let Some(start) = find_ignore_case(raw, JSON_FENCE) {
        let content_start = start + JSON_FENCE.len();
        let rest = &raw[content_start..];
        let end = rest.find(FENCE).unwrap_or(rest.len());
        return rest[..end].trim();
    }

    let mut payload = raw.trim();
    if let Some(stripped) = payload.strip_prefix(FENCE) {
        payload = stripped;
    }
    if let Some(stripped) = payload.strip_suffix(FENCE) {
        payload = stripped;
    }
    payload.trim()
}

/// Extract and deserialize a structured payload from raw model output
pub fn parse_structured_output<T: DeserializeOwned>(raw: &str) -> Result<T, ParseError> {
    let payload = extract_payload(raw);
    if payload.is_empty() {
        return Err(ParseError::Schema("empty payload".to_string()));
    }
    Ok(serde_json::from_str(payload)?)
}

fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .char_indices()
        .map(|(idx, _)| idx)
        .find(|&idx| {
            haystack
                .get(idx..idx + needle.len())
                .is_some_and(|window| window.eq_ignore_ascii_case(needle))
        })
}
