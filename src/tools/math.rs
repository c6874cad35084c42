// src/tools/math.rs
// Step-by-step math solver tool

use tracing::{debug, warn};

use super::structured::{parse_structured_output, ParseError};
use super::types::{MathResult, MathStep, ToolResponse};
use super::ToolContext;

pub const MATH_FALLBACK_STEP: &str =
    "I'm sorry, I couldn't generate the math steps correctly. Please try rephrasing the question.";

pub fn build_math_prompt(question: &str) -> String {
    format!(
        r#"You are an expert math tutor. Explain how to solve the following math question step-by-step.
Break down the solution into a numbered vertical list for main steps, and use bullet points for substeps.
Include all necessary calculations. Format the output strictly as a JSON object with a 'toolName' field set to "showMathSteps" and a 'steps' key containing an array of step objects, each with 'step' and optional 'substeps' (array of strings).

Math Question: {question}"#
    )
}

/// The one-step result returned whenever the model output is unusable
pub fn math_fallback() -> MathResult {
    MathResult {
        steps: vec![MathStep::new(MATH_FALLBACK_STEP, Vec::new())],
    }
}

/// Parse and validate raw model output as math steps
pub fn parse_math_output(raw: &str) -> Result<MathResult, ParseError> {
    match parse_structured_output::<ToolResponse>(raw)? {
        ToolResponse::Math(result) if result.steps.is_empty() => {
            Err(ParseError::Schema("steps list is empty".to_string()))
        }
        ToolResponse::Math(result) => Ok(result),
        other => Err(ParseError::Schema(format!(
            "expected showMathSteps, got {}",
            other.tool_name()
        ))),
    }
}

/// Solve a math question. Never fails: provider and parse errors collapse
/// into the fallback result.
pub async fn solve_math(ctx: &ToolContext<'_>, question: &str) -> MathResult {
    let raw = match ctx.complete(&build_math_prompt(question)).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Math tool provider call failed: {}", e);
            return math_fallback();
        }
    };

    match parse_math_output(&raw) {
        Ok(result) => {
            debug!("Math tool produced {} steps", result.steps.len());
            result
        }
        Err(e) => {
            warn!("Math tool output rejected: {}", e);
            math_fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::{ScriptedProvider, test_context};

    #[test]
    fn test_prompt_embeds_question() {
        let prompt = build_math_prompt("2x + 3 = 11");
        assert!(prompt.contains("Math Question: 2x + 3 = 11"));
        assert!(prompt.contains("showMathSteps"));
    }

    #[test]
    fn test_parse_rejects_wrong_tool() {
        let raw = r#"{"toolName":"askQuizQuestion","quiz":{"question":"q","choices":[],"correctAnswer":""}}"#;
        assert!(matches!(parse_math_output(raw), Err(ParseError::Schema(_))));
    }

    #[test]
    fn test_parse_rejects_empty_steps() {
        let raw = r#"{"toolName":"showMathSteps","steps":[]}"#;
        assert!(parse_math_output(raw).is_err());
    }

    #[tokio::test]
    async fn test_fenced_output_parsed() {
        let provider = ScriptedProvider::reply(
            "```json\n{\"toolName\":\"showMathSteps\",\"steps\":[{\"step\":\"Subtract 3\",\"substeps\":[\"2x=8\"]},{\"step\":\"Divide by 2\"}]}\n```",
        );
        let result = solve_math(&test_context(&provider), "solve 2x + 3 = 11").await;
        assert_eq!(result.steps.len(), 2);
        assert_eq!(result.steps[0].step, "Subtract 3");
        assert_eq!(result.steps[0].substeps(), ["2x=8".to_string()]);
        assert!(result.steps[1].substeps.is_none());
        assert!(provider.last_prompt().contains("solve 2x + 3 = 11"));
    }

    #[tokio::test]
    async fn test_always_at_least_one_step() {
        let outputs = [
            ScriptedProvider::reply("not json at all"),
            ScriptedProvider::reply("{\"toolName\":\"showMathSteps\",\"steps\":\"nope\"}"),
            ScriptedProvider::reply("{\"toolName\":\"showMathSteps\",\"steps\":[]}"),
            ScriptedProvider::failing("network down"),
            ScriptedProvider::hanging(),
        ];
        for provider in outputs {
            let result = solve_math(&test_context(&provider), "solve x").await;
            assert_eq!(result, math_fallback());
            assert!(!result.steps.is_empty());
            assert!(result.steps[0].substeps().is_empty());
        }
    }
}
