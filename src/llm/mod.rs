// src/llm/mod.rs
// LLM boundary: provider trait, model profiles and the call deadline

pub mod provider;

use std::time::Duration;

use tracing::debug;

use crate::error::{HelperError, Result};

pub use provider::gemini::GeminiProvider;
pub use provider::CompletionProvider;

/// Model name plus sampling temperature for one class of call
#[derive(Debug, Clone, PartialEq)]
pub struct ModelProfile {
    pub model: String,
    pub temperature: f32,
}

impl ModelProfile {
    pub fn new(model: impl Into<String>, temperature: f32) -> Self {
        Self {
            model: model.into(),
            temperature,
        }
    }
}

/// Run one completion, failing with `HelperError::Timeout` once `deadline` passes
pub async fn complete_within(
    provider: &dyn CompletionProvider,
    profile: &ModelProfile,
    prompt: &str,
    deadline: Duration,
) -> Result<String> {
    debug!(
        "{} completion: model={} temperature={} prompt_chars={}",
        provider.name(),
        profile.model,
        profile.temperature,
        prompt.len()
    );

    match tokio::time::timeout(deadline, provider.complete(profile, prompt)).await {
        Ok(result) => result,
        Err(_) => Err(HelperError::Timeout(deadline)),
    }
}
