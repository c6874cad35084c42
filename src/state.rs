// src/state.rs
// Shared state handed to every axum handler

use std::sync::Arc;

use crate::config::HelperConfig;
use crate::dispatcher::Dispatcher;
use crate::llm::{CompletionProvider, GeminiProvider};

pub struct AppState {
    pub dispatcher: Dispatcher,
}

impl AppState {
    pub fn new(dispatcher: Dispatcher) -> Arc<Self> {
        Arc::new(Self { dispatcher })
    }
}

/// Assemble the production state: shared HTTP client -> Gemini provider -> dispatcher
pub fn create_app_state(config: &HelperConfig, client: reqwest::Client) -> Arc<AppState> {
    let api_key = config.google_api_key.clone().unwrap_or_default();
    let provider: Arc<dyn CompletionProvider> =
        Arc::new(GeminiProvider::new(client, api_key, config.gemini_base_url.clone()));
    AppState::new(Dispatcher::from_config(provider, config))
}
