use serde_json::Value;

/// Request-scoped context for one optimization run.
///
/// Built by the optimize handler after input validation and passed by
/// reference into every pipeline stage. Nothing about a run lives in
/// process-wide state; the context is dropped when the response is sent.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Uploaded resume data, arbitrary nested structure. Passed through
    /// verbatim into prompts — never schema-checked.
    pub resume_data: Value,
    pub job_description: String,
    /// LaTeX markup used as the style base for the rewrite.
    pub template: String,
    /// User-selected model for the rewrite, cover-letter, and evaluation
    /// calls. The analysis call ignores this and uses the fixed model.
    pub model: String,
    pub with_cover_letter: bool,
}
