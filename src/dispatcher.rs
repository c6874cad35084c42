// src/dispatcher.rs
// Per-message dispatch: validate, classify, invoke one responder, shape the reply

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::api::types::ChatReply;
use crate::config::HelperConfig;
use crate::error::{HelperError, Result};
use crate::llm::{CompletionProvider, ModelProfile};
use crate::router::{classify, Intent};
use crate::tools::{answer_general, generate_quiz, solve_math, QuizValidation, ToolContext};

/// Routes chat messages to the math tool, the quiz tool or a direct answer.
///
/// Built once at startup with an explicit provider and settings, then shared
/// across requests.
pub struct Dispatcher {
    provider: Arc<dyn CompletionProvider>,
    general_profile: ModelProfile,
    tool_profile: ModelProfile,
    deadline: Duration,
    quiz_validation: QuizValidation,
}

impl Dispatcher {
    pub fn new(
        provider: Arc<dyn CompletionProvider>,
        general_profile: ModelProfile,
        tool_profile: ModelProfile,
        deadline: Duration,
        quiz_validation: QuizValidation,
    ) -> Self {
        Self {
            provider,
            general_profile,
            tool_profile,
            deadline,
            quiz_validation,
        }
    }

    pub fn from_config(provider: Arc<dyn CompletionProvider>, config: &HelperConfig) -> Self {
        Self::new(
            provider,
            config.general_profile(),
            config.tool_profile(),
            config.llm_timeout(),
            config.quiz_validation(),
        )
    }

    fn context(&self, profile: &ModelProfile) -> ToolContext<'_> {
        ToolContext::new(self.provider.as_ref(), profile.clone(), self.deadline)
    }

    /// Handle one raw user message.
    ///
    /// Only input validation and general-answer provider failures surface as
    /// errors; the tools always return a usable payload.
    pub async fn handle(&self, raw_message: &str) -> Result<ChatReply> {
        if raw_message.trim().is_empty() {
            return Err(HelperError::InvalidInput("message is empty".to_string()));
        }

        let intent = classify(raw_message);
        info!("Dispatching {} message ({} chars)", intent, raw_message.len());

        let reply = match intent {
            Intent::Math => {
                let result = solve_math(&self.context(&self.tool_profile), raw_message).await;
                ChatReply::math(result)
            }
            Intent::Quiz => {
                let result =
                    generate_quiz(&self.context(&self.tool_profile), raw_message, self.quiz_validation).await;
                ChatReply::quiz(result)
            }
            Intent::General => {
                let text = answer_general(&self.context(&self.general_profile), raw_message).await?;
                ChatReply::text(text)
            }
        };

        Ok(reply)
    }
}
