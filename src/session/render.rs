//! Terminal rendering for chat messages with optional ANSI colors

use super::{ChatMessage, MessageBody, QuizAnswerState, Role};
use crate::tools::{MathStep, QuizQuestion};

/// ANSI escape codes
pub mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
}

use ansi::*;

fn paint(text: &str, code: &str, color: bool) -> String {
    if color {
        format!("{}{}{}", code, text, RESET)
    } else {
        text.to_string()
    }
}

/// Choices past this many are labelled by number only
pub const LETTERED_CHOICES: usize = 26;

/// "A".."Z" for the first 26 choices, then the 1-based number
pub fn choice_label(index: usize) -> String {
    match u8::try_from(index) {
        Ok(i) if index < LETTERED_CHOICES => char::from(b'A' + i).to_string(),
        _ => (index + 1).to_string(),
    }
}

fn render_steps(steps: &[MathStep], color: bool, out: &mut String) {
    out.push_str(&paint("Solution Steps", &format!("{}{}", BOLD, BLUE), color));
    out.push('\n');
    for (i, step) in steps.iter().enumerate() {
        out.push_str(&format!("{:>3}. {}\n", i + 1, step.step));
        for sub in step.substeps() {
            out.push_str(&format!("       -> {}\n", paint(sub, DIM, color)));
        }
    }
}

fn render_quiz(quiz: &QuizQuestion, state: &QuizAnswerState, color: bool, out: &mut String) {
    out.push_str(&paint(&quiz.question, BOLD, color));
    out.push('\n');

    let selected = match state {
        QuizAnswerState::Answered { selected, .. } => Some(selected.as_str()),
        QuizAnswerState::Unanswered => None,
    };

    for (i, choice) in quiz.choices.iter().enumerate() {
        let line = format!("  {}) {}", choice_label(i), choice);
        let line = match selected {
            None => line,
            Some(_) if *choice == quiz.correct_answer => paint(&format!("{}  [correct]", line), GREEN, color),
            Some(pick) if pick == choice.as_str() => paint(&format!("{}  [your answer]", line), RED, color),
            Some(_) => paint(&line, DIM, color),
        };
        out.push_str(&line);
        out.push('\n');
    }

    if let QuizAnswerState::Answered { is_correct, .. } = state {
        let verdict = if *is_correct {
            paint("Correct!", GREEN, color)
        } else {
            paint(
                &format!("Incorrect. The correct answer was: {}", quiz.correct_answer),
                RED,
                color,
            )
        };
        out.push_str(&verdict);
        out.push('\n');
    } else if quiz.is_answerable() {
        out.push_str(&paint("Answer with /answer <letter or number>", DIM, color));
        out.push('\n');
    }
}

/// Render one message for the terminal
pub fn render_message(message: &ChatMessage, color: bool) -> String {
    let mut out = match message.role {
        Role::User => paint("you", &format!("{}{}", BOLD, MAGENTA), color),
        Role::Ai => paint("helper", &format!("{}{}", BOLD, CYAN), color),
    };
    out.push_str(": ");
    out.push_str(&message.text);
    out.push('\n');

    match &message.body {
        MessageBody::Text => {}
        MessageBody::Math { steps } => render_steps(steps, color, &mut out),
        MessageBody::Quiz { quiz, state } => render_quiz(quiz, state, color, &mut out),
    }
    out
}
