//! Client-side chat session
//!
//! Holds the message list for one conversation, guards against overlapping
//! requests and owns the per-message quiz answer state. Nothing here is
//! persisted.

pub mod quiz_state;
pub mod render;

use thiserror::Error;

use crate::api::types::{ChatReply, MessageKind};
use crate::tools::{MathStep, QuizQuestion, ToolResponse};

pub use quiz_state::{QuizAnswerState, Transition};
pub use render::render_message;

pub const CONNECTION_ERROR_TEXT: &str =
    "Error: Could not connect to the chatbot or process your request.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Ai,
}

/// Message payload, one variant per message type
#[derive(Debug, Clone, PartialEq)]
pub enum MessageBody {
    Text,
    Math { steps: Vec<MathStep> },
    Quiz { quiz: QuizQuestion, state: QuizAnswerState },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    pub body: MessageBody,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            body: MessageBody::Text,
        }
    }

    pub fn ai_text(text: impl Into<String>) -> Self {
        Self {
            role: Role::Ai,
            text: text.into(),
            body: MessageBody::Text,
        }
    }
}

impl From<ChatReply> for ChatMessage {
    /// A reply whose `type` disagrees with its `tool_output` degrades to text
    fn from(reply: ChatReply) -> Self {
        let body = match (reply.kind, reply.tool_output) {
            (MessageKind::Math, Some(ToolResponse::Math(result))) => MessageBody::Math { steps: result.steps },
            (MessageKind::Quiz, Some(ToolResponse::Quiz(result))) => MessageBody::Quiz {
                quiz: result.quiz,
                state: QuizAnswerState::Unanswered,
            },
            _ => MessageBody::Text,
        };
        Self {
            role: Role::Ai,
            text: reply.message,
            body,
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("message is empty")]
    EmptyInput,

    #[error("a request is already in flight")]
    Busy,

    #[error("message {0} is not a quiz")]
    NotAQuiz(usize),

    #[error("'{0}' is not one of the choices")]
    UnknownChoice(String),
}

/// Ordered conversation plus the single in-flight request guard
#[derive(Debug, Default)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    in_flight: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Record the user's message and mark a request as outstanding.
    /// Returns the trimmed text to send.
    pub fn begin_submit(&mut self, input: &str) -> Result<String, SessionError> {
        let text = input.trim();
        if text.is_empty() {
            return Err(SessionError::EmptyInput);
        }
        if self.in_flight {
            return Err(SessionError::Busy);
        }
        self.messages.push(ChatMessage::user(text));
        self.in_flight = true;
        Ok(text.to_string())
    }

    /// Append the server's reply; returns its index
    pub fn complete(&mut self, reply: ChatReply) -> usize {
        self.messages.push(ChatMessage::from(reply));
        self.in_flight = false;
        self.messages.len() - 1
    }

    /// Record a transport or server failure; returns the error message index
    pub fn fail(&mut self) -> usize {
        self.messages.push(ChatMessage::ai_text(CONNECTION_ERROR_TEXT));
        self.in_flight = false;
        self.messages.len() - 1
    }

    /// Answer the quiz at `index`. Answering an already answered quiz is a no-op.
    pub fn answer_quiz(&mut self, index: usize, choice: &str) -> Result<Transition, SessionError> {
        match self.messages.get_mut(index).map(|m| &mut m.body) {
            Some(MessageBody::Quiz { quiz, state }) => {
                if !quiz.has_choice(choice) {
                    return Err(SessionError::UnknownChoice(choice.to_string()));
                }
                Ok(state.answer(choice, quiz))
            }
            _ => Err(SessionError::NotAQuiz(index)),
        }
    }

    /// Index of the most recent quiz that can still be answered
    pub fn latest_open_quiz(&self) -> Option<usize> {
        self.messages.iter().rposition(|m| {
            matches!(&m.body, MessageBody::Quiz { quiz, state } if quiz.is_answerable() && !state.is_answered())
        })
    }
}
