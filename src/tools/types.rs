// src/tools/types.rs
// Structured tool payloads shared by the server and the client

use serde::{Deserialize, Serialize};

/// One numbered step of a worked solution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MathStep {
    pub step: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substeps: Option<Vec<String>>,
}

impl MathStep {
    pub fn new(step: impl Into<String>, substeps: Vec<String>) -> Self {
        Self {
            step: step.into(),
            substeps: Some(substeps),
        }
    }

    pub fn substeps(&self) -> &[String] {
        self.substeps.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MathResult {
    pub steps: Vec<MathStep>,
}

/// A single multiple-choice question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    #[serde(default)]
    pub question: String,
    pub choices: Vec<String>,
    #[serde(rename = "correctAnswer", default)]
    pub correct_answer: String,
}

impl QuizQuestion {
    /// False for the fallback question, which has nothing to answer
    pub fn is_answerable(&self) -> bool {
        !self.choices.is_empty()
    }

    pub fn has_choice(&self, choice: &str) -> bool {
        self.choices.iter().any(|c| c == choice)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    pub quiz: QuizQuestion,
}

/// Output of a tool invocation, tagged on `toolName` exactly as the model is
/// asked to produce it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "toolName")]
pub enum ToolResponse {
    #[serde(rename = "showMathSteps")]
    Math(MathResult),
    #[serde(rename = "askQuizQuestion")]
    Quiz(QuizResult),
}

impl ToolResponse {
    pub fn tool_name(&self) -> &'static str {
        match self {
            ToolResponse::Math(_) => "showMathSteps",
            ToolResponse::Quiz(_) => "askQuizQuestion",
        }
    }
}
