//! Evaluator — final pipeline stage.
//!
//! One completion call producing a comparative narrative, plus a local
//! extraction step that populates the fixed 5-row comparison table. The
//! extraction is isolated in `extract_metrics` so its truncation behavior is
//! independently testable.

use serde::Serialize;

use crate::completion::{CompletionClient, CompletionRequest, Message};
use crate::errors::AppError;
use crate::models::run::RunContext;
use crate::pipeline::prompts::EVALUATE_PROMPT_TEMPLATE;

const MAX_TOKENS: u32 = 3000;
const TEMPERATURE: f32 = 0.1;

/// Row labels of the comparison table, in display order.
pub const METRIC_LABELS: [&str; 5] = [
    "Keyword Match Percentage",
    "Section Relevance",
    "Achievement Descriptions",
    "Professional Positioning",
    "Job Description Alignment",
];

/// Fixed baseline column for the original resume.
pub const ORIGINAL_BASELINE: [&str; 5] = ["Low", "Generic", "Standard", "Generic", "Partial"];

/// The fixed 5-row comparison rendered under the evaluation narrative.
///
/// The "optimized" column may be SHORTER than the other two when the
/// narrative has fewer than five "label: value" lines; the mismatch is
/// surfaced as-is rather than padded.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonTable {
    pub metrics: Vec<String>,
    pub original: Vec<String>,
    pub optimized: Vec<String>,
}

pub fn build_evaluation_prompt(ctx: &RunContext, optimized_resume: &str) -> String {
    EVALUATE_PROMPT_TEMPLATE
        .replace("{original_template}", &ctx.template)
        .replace("{optimized_resume}", optimized_resume)
        .replace("{job_description}", &ctx.job_description)
}

/// Runs the evaluation stage with the user-selected model. Returns the raw
/// narrative; callers pair it with `build_comparison_table`.
pub async fn evaluate_rewrite(
    ctx: &RunContext,
    optimized_resume: &str,
    client: &dyn CompletionClient,
) -> Result<String, AppError> {
    let prompt = build_evaluation_prompt(ctx, optimized_resume);

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

/// Extracts up to five "label: value" metrics from the evaluation narrative.
///
/// Lines without a ':' are skipped; on qualifying lines everything after the
/// first ':' is kept, trimmed. Fewer than five qualifying lines yields a
/// shorter vector — callers see the truncation as-is.
pub fn extract_metrics(raw: &str) -> Vec<String> {
    raw.lines()
        .filter_map(|line| line.splitn(2, ':').nth(1))
        .map(|value| value.trim().to_string())
        .take(5)
        .collect()
}

pub fn build_comparison_table(evaluation: &str) -> ComparisonTable {
    ComparisonTable {
        metrics: METRIC_LABELS.iter().map(|s| s.to_string()).collect(),
        original: ORIGINAL_BASELINE.iter().map(|s| s.to_string()).collect(),
        optimized: extract_metrics(evaluation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_metrics_takes_first_five_colon_lines() {
        let raw = "Keyword Match: 85%\n\
                   Section Relevance: High\n\
                   no separator on this line\n\
                   Achievements: Quantified\n\
                   Positioning: Strong\n\
                   Alignment: Full\n\
                   Extra Metric: ignored";

        let metrics = extract_metrics(raw);
        assert_eq!(metrics, vec!["85%", "High", "Quantified", "Strong", "Full"]);
    }

    #[test]
    fn test_extract_metrics_keeps_everything_after_first_colon() {
        let raw = "Keyword Match: 85% (was: 40%)";
        assert_eq!(extract_metrics(raw), vec!["85% (was: 40%)"]);
    }

    #[test]
    fn test_extract_metrics_trims_whitespace() {
        let raw = "Section Relevance:   High   ";
        assert_eq!(extract_metrics(raw), vec!["High"]);
    }

    #[test]
    fn test_extract_metrics_empty_narrative_yields_empty() {
        assert!(extract_metrics("").is_empty());
        assert!(extract_metrics("no metrics here\njust prose").is_empty());
    }

    /// Regression: a narrative with fewer than five "label: value" lines
    /// yields a SHORT optimized column while the other columns stay 5 long.
    /// The length mismatch is the documented behavior, not a bug to paper
    /// over here.
    #[test]
    fn test_table_columns_mismatch_when_narrative_is_short() {
        let table = build_comparison_table("Keyword Match: 85%\nSection Relevance: High\n");

        assert_eq!(table.optimized, vec!["85%", "High"]);
        assert_eq!(table.optimized.len(), 2);
        assert_eq!(table.metrics.len(), 5);
        assert_eq!(table.original.len(), 5);
    }

    #[test]
    fn test_original_column_is_the_fixed_baseline() {
        let table = build_comparison_table("");
        assert_eq!(
            table.original,
            vec!["Low", "Generic", "Standard", "Generic", "Partial"]
        );
        assert!(table.optimized.is_empty());
    }

    #[test]
    fn test_evaluation_prompt_embeds_all_three_inputs() {
        let ctx = RunContext {
            resume_data: json!({}),
            job_description: "Backend role at Globex".to_string(),
            template: r"\documentclass{article} ORIGINAL".to_string(),
            model: "llama3-8b-8192".to_string(),
            with_cover_letter: false,
        };

        let prompt = build_evaluation_prompt(&ctx, r"\documentclass{article} OPTIMIZED");
        assert!(prompt.contains("ORIGINAL"));
        assert!(prompt.contains("OPTIMIZED"));
        assert!(prompt.contains("Backend role at Globex"));
    }
}
