// src/tools/quiz.rs
// Multiple-choice quiz generator tool

use tracing::{debug, warn};

use super::structured::{parse_structured_output, ParseError};
use super::types::{QuizQuestion, QuizResult, ToolResponse};
use super::ToolContext;

pub const QUIZ_FALLBACK_QUESTION: &str =
    "I'm sorry, I couldn't generate a quiz question on that topic. Please try another subject.";

pub const QUIZ_CHOICE_COUNT: usize = 4;

/// How much of the quiz contract to enforce on model output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizValidation {
    /// Tag matches and `choices` is a list
    Lenient,
    /// Additionally: non-empty question, exactly four choices, answer among them
    #[default]
    Strict,
}

pub fn build_quiz_prompt(topic: &str) -> String {
    format!(
        r#"Generate a single multiple-choice quiz question about the topic: '{topic}'.
Provide 4 distinct answer choices. Clearly indicate the correct answer.
Format the output strictly as a JSON object with a 'toolName' field set to "askQuizQuestion" and a 'quiz' key containing 'question', 'choices' (an array of strings), and 'correctAnswer' (a string matching one of the choices).

Example JSON format:
{{
  "toolName": "askQuizQuestion",
  "quiz": {{
    "question": "What is the capital of France?",
    "choices": ["Berlin", "Madrid", "Paris", "Rome"],
    "correctAnswer": "Paris"
  }}
}}"#
    )
}

/// Question with no choices: tells the renderer there is nothing to answer
pub fn quiz_fallback() -> QuizResult {
    QuizResult {
        quiz: QuizQuestion {
            question: QUIZ_FALLBACK_QUESTION.to_string(),
            choices: Vec::new(),
            correct_answer: String::new(),
        },
    }
}

fn check_strict(quiz: &QuizQuestion) -> Result<(), ParseError> {
    if quiz.question.trim().is_empty() {
        return Err(ParseError::Schema("question is empty".to_string()));
    }
    if quiz.choices.len() != QUIZ_CHOICE_COUNT {
        return Err(ParseError::Schema(format!(
            "expected {} choices, got {}",
            QUIZ_CHOICE_COUNT,
            quiz.choices.len()
        )));
    }
    if !quiz.has_choice(&quiz.correct_answer) {
        return Err(ParseError::Schema(format!(
            "correct answer '{}' is not one of the choices",
            quiz.correct_answer
        )));
    }
    Ok(())
}

/// Parse and validate raw model output as a quiz question
pub fn parse_quiz_output(raw: &str, validation: QuizValidation) -> Result<QuizResult, ParseError> {
    let result = match parse_structured_output::<ToolResponse>(raw)? {
        ToolResponse::Quiz(result) => result,
        other => {
            return Err(ParseError::Schema(format!(
                "expected askQuizQuestion, got {}",
                other.tool_name()
            )));
        }
    };

    if validation == QuizValidation::Strict {
        check_strict(&result.quiz)?;
    }
    Ok(result)
}

/// Generate one quiz question about `topic`. Never fails: provider and parse
/// errors collapse into the fallback question.
pub async fn generate_quiz(ctx: &ToolContext<'_>, topic: &str, validation: QuizValidation) -> QuizResult {
    let raw = match ctx.complete(&build_quiz_prompt(topic)).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Quiz tool provider call failed: {}", e);
            return quiz_fallback();
        }
    };

    match parse_quiz_output(&raw, validation) {
        Ok(result) => {
            debug!("Quiz tool produced question with {} choices", result.quiz.choices.len());
            result
        }
        Err(e) => {
            warn!("Quiz tool output rejected ({:?}): {}", validation, e);
            quiz_fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::{ScriptedProvider, test_context};

    const PARIS: &str = r#"{"toolName":"askQuizQuestion","quiz":{"question":"What is the capital of France?","choices":["Berlin","Madrid","Paris","Rome"],"correctAnswer":"Paris"}}"#;
    const THREE_CHOICES: &str = r#"{"toolName":"askQuizQuestion","quiz":{"question":"Pick one","choices":["A","B","C"],"correctAnswer":"A"}}"#;
    const ANSWER_MISSING: &str = r#"{"toolName":"askQuizQuestion","quiz":{"question":"Pick one","choices":["A","B","C","D"],"correctAnswer":"E"}}"#;

    #[test]
    fn test_prompt_embeds_topic() {
        let prompt = build_quiz_prompt("water cycle");
        assert!(prompt.contains("topic: 'water cycle'"));
        assert!(prompt.contains("\"correctAnswer\": \"Paris\""));
    }

    #[test]
    fn test_strict_rejects_bad_choices() {
        assert!(parse_quiz_output(THREE_CHOICES, QuizValidation::Strict).is_err());
        assert!(parse_quiz_output(ANSWER_MISSING, QuizValidation::Strict).is_err());
        assert!(parse_quiz_output(PARIS, QuizValidation::Strict).is_ok());
    }

    #[test]
    fn test_lenient_accepts_bad_choices() {
        let result = parse_quiz_output(THREE_CHOICES, QuizValidation::Lenient).unwrap();
        assert_eq!(result.quiz.choices.len(), 3);
        assert!(parse_quiz_output(ANSWER_MISSING, QuizValidation::Lenient).is_ok());
    }

    #[test]
    fn test_both_modes_reject_wrong_tool_or_missing_choices() {
        let math = r#"{"toolName":"showMathSteps","steps":[{"step":"x"}]}"#;
        let no_choices = r#"{"toolName":"askQuizQuestion","quiz":{"question":"q","correctAnswer":"a"}}"#;
        for mode in [QuizValidation::Lenient, QuizValidation::Strict] {
            assert!(parse_quiz_output(math, mode).is_err());
            assert!(parse_quiz_output(no_choices, mode).is_err());
        }
    }

    #[tokio::test]
    async fn test_success_path() {
        let provider = ScriptedProvider::reply(&format!("```json\n{}\n```", PARIS));
        let result = generate_quiz(&test_context(&provider), "geography", QuizValidation::Strict).await;
        assert_eq!(result.quiz.question, "What is the capital of France?");
        assert_eq!(result.quiz.correct_answer, "Paris");
        assert!(provider.last_prompt().contains("geography"));
    }

    #[tokio::test]
    async fn test_fallback_on_any_failure() {
        let outputs = [
            ScriptedProvider::reply("Here is a great question about rivers!"),
            ScriptedProvider::reply(THREE_CHOICES),
            ScriptedProvider::failing("quota exceeded"),
            ScriptedProvider::hanging(),
        ];
        for provider in outputs {
            let result = generate_quiz(&test_context(&provider), "rivers", QuizValidation::Strict).await;
            assert_eq!(result.quiz.question, QUIZ_FALLBACK_QUESTION);
            assert!(result.quiz.choices.is_empty());
            assert!(result.quiz.correct_answer.is_empty());
            assert!(!result.quiz.is_answerable());
        }
    }
}
