//! Intent detection for incoming chat messages
//!
//! Decides per message whether to run the math solver, the quiz generator,
//! or answer directly. Pure keyword and pattern matching on the current
//! message only; math always wins over quiz.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Classified purpose of a user message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Math,
    Quiz,
    General,
}

const MATH_KEYWORDS: &[&str] = &[
    "solve", "equation", "factor", "derivative", "integral", "calculate",
    "simplify", "expand", "find x", "find y", "algebra", "calculus",
    "x =", "y =",
];

const QUIZ_KEYWORDS: &[&str] = &[
    "quiz", "test", "question", "ask me", "challenge me", "practice",
    "multiple choice", "true or false", "exam",
];

/// Arithmetic operator characters; any occurrence counts as math
const OPERATORS: &[char] = &['+', '-', '*', '/', '^', '='];

/// Digit next to a single-letter variable, e.g. "2x", "3.5y", "x2"
static VARIABLE_TERM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\d+(?:\.\d+)?[a-z]\b|\b[a-z]\d+\b").expect("valid variable regex")
});

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Math => "math",
            Intent::Quiz => "quiz",
            Intent::General => "general",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a raw user message
pub fn classify(message: &str) -> Intent {
    let lower = message.to_lowercase();

    if looks_like_math(&lower) {
        Intent::Math
    } else if QUIZ_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        Intent::Quiz
    } else {
        Intent::General
    }
}

fn looks_like_math(lower: &str) -> bool {
    MATH_KEYWORDS.iter().any(|kw| lower.contains(kw))
        || lower.contains(OPERATORS)
        || VARIABLE_TERM.is_match(lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_math_keywords() {
        assert_eq!(classify("Solve 2x + 3 = 11"), Intent::Math);
        assert_eq!(classify("What is the derivative of sin?"), Intent::Math);
        assert_eq!(classify("Can you help me FIND X here"), Intent::Math);
        assert_eq!(classify("help with calculus homework"), Intent::Math);
    }

    #[test]
    fn test_inline_expressions() {
        assert_eq!(classify("what is 5+3"), Intent::Math);
        assert_eq!(classify("x^2 over what range"), Intent::Math);
        assert_eq!(classify("is 2x bigger than y"), Intent::Math);
        assert_eq!(classify("what is 7 * 6"), Intent::Math);
        assert_eq!(classify("a + b squared"), Intent::Math);
    }

    #[test]
    fn test_math_beats_quiz() {
        assert_eq!(classify("quiz me: solve 4y = 8"), Intent::Math);
        assert_eq!(classify("give me a quiz question on 3+4"), Intent::Math);
        assert_eq!(classify("test my equation skills"), Intent::Math);
    }

    #[test]
    fn test_quiz_keywords() {
        assert_eq!(classify("Give me a quiz on the water cycle"), Intent::Quiz);
        assert_eq!(classify("Ask me something about photosynthesis"), Intent::Quiz);
        assert_eq!(classify("I want to practice world capitals"), Intent::Quiz);
        assert_eq!(classify("a multiple choice exam on cells"), Intent::Quiz);
        assert_eq!(classify("True or False about volcanoes"), Intent::Quiz);
    }

    #[test]
    fn test_any_operator_is_math() {
        assert_eq!(classify("quiz me on self-esteem"), Intent::Math);
        assert_eq!(classify("give me a quiz on x/y graphs"), Intent::Math);
        assert_eq!(classify("quiz: is a*b commutative"), Intent::Math);
        assert_eq!(classify("test me on well-known poets of the 1990s"), Intent::Math);
    }

    #[test]
    fn test_variable_either_side_of_digit() {
        assert_eq!(classify("what does x2 mean"), Intent::Math);
        assert_eq!(classify("quiz me on 4y"), Intent::Math);
        assert_eq!(classify("quiz me on my mp3 player"), Intent::Quiz);
    }

    #[test]
    fn test_general_fallback() {
        assert_eq!(classify("What is photosynthesis?"), Intent::General);
        assert_eq!(classify("Explain the causes of the French Revolution"), Intent::General);
        assert_eq!(classify("tell me about famous poets"), Intent::General);
        assert_eq!(classify(""), Intent::General);
    }

    #[test]
    fn test_intent_names() {
        assert_eq!(Intent::Math.to_string(), "math");
        assert_eq!(Intent::Quiz.as_str(), "quiz");
        assert_eq!(serde_json::to_string(&Intent::General).unwrap(), "\"general\"");
    }
}
