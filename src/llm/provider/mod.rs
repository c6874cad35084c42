// src/llm/provider/mod.rs
// Text-completion provider trait

use async_trait::async_trait;

use super::ModelProfile;
use crate::error::Result;

pub mod gemini;

/// Black-box text completion: one prompt in, one text payload out
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Provider name for logging/debugging
    fn name(&self) -> &'static str;

    /// Complete `prompt` with the model and temperature in `profile`
    async fn complete(&self, profile: &ModelProfile, prompt: &str) -> Result<String>;
}
