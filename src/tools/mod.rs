// src/tools/mod.rs
// LLM-backed responders: math solver, quiz generator, general answers

pub mod general;
pub mod math;
pub mod quiz;
pub mod structured;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

use std::time::Duration;

use crate::error::Result;
use crate::llm::{complete_within, CompletionProvider, ModelProfile};

pub use general::answer_general;
pub use math::solve_math;
pub use quiz::{generate_quiz, QuizValidation};
pub use structured::{parse_structured_output, ParseError};
pub use types::{MathResult, MathStep, QuizQuestion, QuizResult, ToolResponse};

/// Everything a responder needs for its single provider call
pub struct ToolContext<'a> {
    pub provider: &'a dyn CompletionProvider,
    pub profile: ModelProfile,
    pub deadline: Duration,
}

impl<'a> ToolContext<'a> {
    pub fn new(provider: &'a dyn CompletionProvider, profile: ModelProfile, deadline: Duration) -> Self {
        Self {
            provider,
            profile,
            deadline,
        }
    }

    pub async fn complete(&self, prompt: &str) -> Result<String> {
        complete_within(self.provider, &self.profile, prompt, self.deadline).await
    }
}
