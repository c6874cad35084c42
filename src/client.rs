// src/client.rs
// HTTP client for the chat endpoint, used by the terminal front end

use crate::api::types::{ChatReply, ChatRequest};
use crate::error::Result;

pub struct HelperClient {
    client: reqwest::Client,
    base_url: String,
}

impl HelperClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn chat_url(&self) -> String {
        format!("{}/api/chat", self.base_url)
    }

    /// Send one message; non-2xx statuses are errors
    pub async fn send(&self, message: &str) -> Result<ChatReply> {
        let request = ChatRequest {
            message: message.to_string(),
        };
        let reply = self
            .client
            .post(self.chat_url())
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<ChatReply>()
            .await?;
        Ok(reply)
    }
}
