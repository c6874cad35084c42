// src/session/quiz_state.rs
// One-shot answer state for a quiz message

use crate::tools::QuizQuestion;

/// Unanswered until the first choice is picked, then frozen
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QuizAnswerState {
    #[default]
    Unanswered,
    Answered { selected: String, is_correct: bool },
}

/// Outcome of an answer attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Answered { is_correct: bool },
    Ignored,
}

impl QuizAnswerState {
    pub fn is_answered(&self) -> bool {
        matches!(self, QuizAnswerState::Answered { .. })
    }

    /// Record `choice` if nothing has been answered yet; later calls are no-ops
    pub fn answer(&mut self, choice: &str, quiz: &QuizQuestion) -> Transition {
        if self.is_answered() {
            return Transition::Ignored;
        }
        let is_correct = choice == quiz.correct_answer;
        *self = QuizAnswerState::Answered {
            selected: choice.to_string(),
            is_correct,
        };
        Transition::Answered { is_correct }
    }
}
