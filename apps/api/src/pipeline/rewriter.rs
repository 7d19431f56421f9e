//! Resume Rewriter — second pipeline stage.
//!
//! Turns (job-fit strategy, original template, resume data) into complete
//! rewritten LaTeX. The prompt instructs the model to return ready-to-compile
//! markup with no surrounding commentary; that is requested, not locally
//! enforced or stripped.

use crate::completion::{CompletionClient, CompletionRequest, Message};
use crate::errors::AppError;
use crate::models::run::RunContext;
use crate::pipeline::prompts::REWRITE_PROMPT_TEMPLATE;

// Full-document output; temperature below the analysis stage's — favor
// format fidelity.
const MAX_TOKENS: u32 = 8000;
const TEMPERATURE: f32 = 0.1;

/// Builds the rewrite prompt: strategy narrative, original template,
/// serialized resume data, and the job description, all embedded verbatim.
pub fn build_rewrite_prompt(ctx: &RunContext, job_fit_analysis: &str) -> Result<String, AppError> {
    let resume_json = serde_json::to_string(&ctx.resume_data)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize resume data: {e}")))?;

    Ok(REWRITE_PROMPT_TEMPLATE
        .replace("{job_fit_analysis}", job_fit_analysis)
        .replace("{original_template}", &ctx.template)
        .replace("{resume_json}", &resume_json)
        .replace("{job_description}", &ctx.job_description))
}

/// Runs the rewrite stage with the user-selected model.
pub async fn rewrite_resume(
    ctx: &RunContext,
    job_fit_analysis: &str,
    client: &dyn CompletionClient,
) -> Result<String, AppError> {
    let prompt = build_rewrite_prompt(ctx, job_fit_analysis)?;

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
