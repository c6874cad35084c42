// src/http.rs
// Pooled reqwest client shared by the Gemini provider and the terminal client

use std::time::Duration;

use tracing::warn;

/// Headroom above the LLM deadline so the deadline always fires first
const DEADLINE_MARGIN: Duration = Duration::from_secs(15);

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Whole-request timeout for a given LLM deadline
pub fn request_timeout(llm_deadline: Duration) -> Duration {
    llm_deadline.saturating_add(DEADLINE_MARGIN)
}

/// Build the process-wide client. Created once at startup and cloned into
/// every component that talks HTTP.
pub fn create_shared_client(llm_deadline: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(request_timeout(llm_deadline))
        .connect_timeout(CONNECT_TIMEOUT.min(llm_deadline))
        .build()
        .unwrap_or_else(|e| {
            warn!("HTTP client builder failed ({}), using defaults", e);
            reqwest::Client::new()
        })
}
