// src/tools/test_support.rs
// Scripted provider for unit tests

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::ToolContext;
use crate::error::{HelperError, Result};
use crate::llm::{CompletionProvider, ModelProfile};

enum Behaviour {
    Reply(String),
    Fail(String),
    Hang,
}

pub struct ScriptedProvider {
    behaviour: Behaviour,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    fn with(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn reply(text: &str) -> Self {
        Self::with(Behaviour::Reply(text.to_string()))
    }

    pub fn failing(message: &str) -> Self {
        Self::with(Behaviour::Fail(message.to_string()))
    }

    pub fn hanging() -> Self {
        Self::with(Behaviour::Hang)
    }

    pub fn last_prompt(&self) -> String {
        self.prompts.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn complete(&self, _profile: &ModelProfile, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.behaviour {
            Behaviour::Reply(text) => Ok(text.clone()),
            Behaviour::Fail(message) => Err(HelperError::Llm(message.clone())),
            Behaviour::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(HelperError::Llm("unreachable".to_string()))
            }
        }
    }
}

pub fn test_context(provider: &ScriptedProvider) -> ToolContext<'_> {
    ToolContext::new(
        provider,
        ModelProfile::new("test-model", 0.0),
        Duration::from_millis(50),
    )
}
