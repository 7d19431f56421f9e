//! Job-Fit Analyzer — first pipeline stage.
//!
//! Turns (resume data, job description) into a strategy narrative: skill
//! overlap, content modifications, keyword additions, section rearrangement,
//! and a 3-line summary. The response is opaque text, forwarded unchanged to
//! the rewrite stage and to the caller.

use crate::completion::{CompletionClient, CompletionRequest, Message, ANALYSIS_MODEL};
use crate::errors::AppError;
use crate::models::run::RunContext;
use crate::pipeline::prompts::ANALYZE_PROMPT_TEMPLATE;

// Bounded output, low temperature — favor determinism over creativity.
const MAX_TOKENS: u32 = 4000;
const TEMPERATURE: f32 = 0.2;

/// Builds the analysis prompt by embedding the serialized resume data and the
/// job description verbatim. No field of the uploaded data is dropped.
pub fn build_analysis_prompt(ctx: &RunContext) -> Result<String, AppError> {
    let resume_json = serde_json::to_string(&ctx.resume_data)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize resume data: {e}")))?;

    Ok(ANALYZE_PROMPT_TEMPLATE
        .replace("{resume_json}", &resume_json)
        .replace("{job_description}", &ctx.job_description))
}

/// Runs the job-fit analysis stage. Always uses the fixed analysis model,
/// regardless of the caller's selection.
pub async fn analyze_job_fit(
    ctx: &RunContext,
    client: &dyn CompletionClient,
) -> Result<String, AppError> {
    let prompt = build_analysis_prompt(ctx)?;

    let text = client
        .complete(CompletionRequest {
            model: ANALYSIS_MODEL.to_string(),
            messages: vec![Message::user(prompt)],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        })
        .await?;

    Ok(text)
}
