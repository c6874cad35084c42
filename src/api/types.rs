// src/api/types.rs
// Wire types for the chat endpoint

use serde::{Deserialize, Serialize};

use crate::tools::{MathResult, QuizResult, ToolResponse};

pub const MATH_LEAD_IN: &str = "Here are the steps to solve your math problem:";
pub const QUIZ_LEAD_IN: &str = "Here's a quiz question for you:";
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input";
pub const APOLOGY_MESSAGE: &str = "Sorry, something went wrong on my end. Please try again!";

/// Shape of a chat message as seen by the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    Math,
    Quiz,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Body of every `/api/chat` response, successful or not
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_output: Option<ToolResponse>,
}

impl ChatReply {
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: MessageKind::Text,
            tool_output: None,
        }
    }

    pub fn math(result: MathResult) -> Self {
        Self {
            message: MATH_LEAD_IN.to_string(),
            kind: MessageKind::Math,
            tool_output: Some(ToolResponse::Math(result)),
        }
    }

    pub fn quiz(result: QuizResult) -> Self {
        Self {
            message: QUIZ_LEAD_IN.to_string(),
            kind: MessageKind::Quiz,
            tool_output: Some(ToolResponse::Quiz(result)),
        }
    }

    pub fn invalid_input() -> Self {
        Self::text(INVALID_INPUT_MESSAGE)
    }

    pub fn apology() -> Self {
        Self::text(APOLOGY_MESSAGE)
    }
}
