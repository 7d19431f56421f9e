//! Cover-Letter Generator — independent of the analyze/rewrite chain.
//!
//! The LaTeX skeleton lives inline in the prompt; the remote model performs
//! both content selection and final formatting.

use crate::completion::{CompletionClient, CompletionRequest, Message};
use crate::errors::AppError;
use crate::models::run::RunContext;
use crate::pipeline::prompts::COVER_LETTER_PROMPT_TEMPLATE;

const MAX_TOKENS: u32 = 2000;
const TEMPERATURE: f32 = 0.3;

pub fn build_cover_letter_prompt(ctx: &RunContext) -> Result<String, AppError> {
    let resume_json = serde_json::to_string(&ctx.resume_data)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize resume data: {e}")))?;

    Ok(COVER_LETTER_PROMPT_TEMPLATE
        .replace("{resume_json}", &resume_json)
        .replace("{job_description}", &ctx.job_description))
}

/// Runs the cover-letter stage with the user-selected model.
pub async fn generate_cover_letter(
    ctx: &RunContext,
    client: &dyn CompletionClient,
) -> Result<String, AppError> {
    let prompt = build_cover_letter_prompt(ctx)?;

    let text = client
        .complete(CompletionRequest {
            model: ctx.model.clone(),
            messages: vec![Message::user(prompt)],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        })
        .await?;

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prompt_embeds_inputs_and_skeleton() {
        let ctx = RunContext {
            resume_data: json!({"name": "Dana Smith", "skills": ["Rust"]}),
            job_description: "Platform Engineer at Initech".to_string(),
            template: String::new(),
            model: "mixtral-8x7b-32768".to_string(),
            with_cover_letter: true,
        };

        let prompt = build_cover_letter_prompt(&ctx).unwrap();
        assert!(prompt.contains("Dana Smith"));
        assert!(prompt.contains("Platform Engineer at Initech"));
        assert!(prompt.contains(r"\documentclass[11pt]{letter}"));
        assert!(!prompt.contains("{resume_json}"));
        assert!(!prompt.contains("{job_description}"));
    }
}
