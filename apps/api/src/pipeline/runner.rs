//! Pipeline runner — orchestrates the document generation pipeline.
//!
//! Flow: analyze_job_fit → rewrite_resume → evaluate_rewrite →
//!       [generate_cover_letter] → build_comparison_table.
//!
//! Strictly sequential; the first stage error aborts the rest and propagates.
//! No retry, no caching, no partial results.

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::completion::{CompletionClient, ANALYSIS_MODEL};
use crate::errors::AppError;
use crate::models::run::RunContext;
use crate::pipeline::analyzer::analyze_job_fit;
use crate::pipeline::cover_letter::generate_cover_letter;
use crate::pipeline::evaluator::{build_comparison_table, evaluate_rewrite, ComparisonTable};
use crate::pipeline::rewriter::rewrite_resume;

/// Everything a completed run produces. All fields are transient — nothing
/// is persisted.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutcome {
    pub analysis: String,
    pub optimized_resume: String,
    pub evaluation: String,
    pub comparison: ComparisonTable,
    pub cover_letter: Option<String>,
}

/// Runs the full pipeline against the injected completion client.
pub async fn run_pipeline(
    ctx: &RunContext,
    client: &dyn CompletionClient,
) -> Result<PipelineOutcome, AppError> {
    let run_id = Uuid::new_v4();

    info!("Run {run_id}: analyzing job fit (model: {ANALYSIS_MODEL})");
    let analysis = analyze_job_fit(ctx, client).await?;

    info!("Run {run_id}: rewriting resume (model: {})", ctx.model);
    let optimized_resume = rewrite_resume(ctx, &analysis, client).await?;

    info!("Run {run_id}: evaluating rewrite (model: {})", ctx.model);
    let evaluation = evaluate_rewrite(ctx, &optimized_resume, client).await?;
    let comparison = build_comparison_table(&evaluation);

    let cover_letter = if ctx.with_cover_letter {
        info!("Run {run_id}: generating cover letter (model: {})", ctx.model);
        Some(generate_cover_letter(ctx, client).await?)
    } else {
        None
    };

    info!("Run {run_id}: pipeline complete");

    Ok(PipelineOutcome {
        analysis,
        optimized_resume,
        evaluation,
        comparison,
        cover_letter,
    })
}
