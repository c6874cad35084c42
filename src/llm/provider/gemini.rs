//! Gemini provider
//!
//! Calls the `generateContent` endpoint with a single user turn and returns
//! the concatenated text parts of the first candidate.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::CompletionProvider;
use crate::error::{HelperError, Result};
use crate::llm::ModelProfile;

const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiProvider {
    pub fn new(client: Client, api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    /// The key travels in a header so it never appears in URLs or their error text
    fn request(&self, profile: &ModelProfile, prompt: &str) -> RequestBuilder {
        self.client
            .post(self.endpoint(&profile.model))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&build_request(profile, prompt))
    }
}

// ============================================================================
// API Types
// ============================================================================

#[derive(Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GeminiGenerationConfig,
}

#[derive(Serialize)]
struct GeminiContent<'a> {
    role: &'static str,
    parts: Vec<GeminiTextPart<'a>>,
}

#[derive(Serialize)]
struct GeminiTextPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GeminiGenerationConfig {
    temperature: f32,
}

#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
    error: Option<GeminiError>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContentResponse>,
}

#[derive(Deserialize)]
struct GeminiContentResponse {
    #[serde(default)]
    parts: Vec<GeminiPartResponse>,
}

#[derive(Deserialize)]
struct GeminiPartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct GeminiError {
    message: String,
}

fn build_request<'a>(profile: &ModelProfile, prompt: &'a str) -> GeminiRequest<'a> {
    GeminiRequest {
        contents: vec![GeminiContent {
            role: "user",
            parts: vec![GeminiTextPart { text: prompt }],
        }],
        generation_config: GeminiGenerationConfig {
            temperature: profile.temperature,
        },
    }
}

fn extract_text(response: GeminiResponse) -> Result<String> {
    if let Some(error) = response.error {
        return Err(HelperError::Llm(format!("Gemini error: {}", error.message)));
    }

    let text: String = response
        .candidates
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        return Err(HelperError::Llm("Gemini returned no text".to_string()));
    }
    Ok(text)
}

#[async_trait]
impl CompletionProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn complete(&self, profile: &ModelProfile, prompt: &str) -> Result<String> {
        let response = self
            .request(profile, prompt)
            .send()
            .await
            .map_err(|e| HelperError::Http(e.without_url()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(HelperError::Llm(format!("Gemini API error: {} - {}", status, body)));
        }

        let api_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| HelperError::Http(e.without_url()))?;
        let text = extract_text(api_response)?;
        debug!("Gemini {} returned {} chars", profile.model, text.len());
        Ok(text)
    }
}
