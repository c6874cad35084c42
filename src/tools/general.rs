// src/tools/general.rs
// Direct educational answers for messages that need no tool

use super::ToolContext;
use crate::error::Result;

pub fn build_general_prompt(question: &str) -> String {
    format!(
        r#"You are a helpful student assistant. Your goal is to provide accurate academic answers and enhance learning.
Format your answer for easy studying:
- Start with a short heading that names the topic.
- Put **key terms** in bold.
- Organise longer explanations into numbered sections.
- Use bullet points for lists of facts or properties.
- Include at least one concrete example.
- Keep paragraphs short and concise.

Student question: {question}"#
    )
}

/// Answer a general question; the model text is returned untouched
pub async fn answer_general(ctx: &ToolContext<'_>, question: &str) -> Result<String> {
    ctx.complete(&build_general_prompt(question)).await
}
