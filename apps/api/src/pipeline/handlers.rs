//! Axum route handlers for the optimization pipeline API.

use axum::extract::{Multipart, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::completion::{GroqClient, SUPPORTED_MODELS};
use crate::config::Config;
use crate::errors::AppError;
use crate::models::run::RunContext;
use crate::pipeline::evaluator::ComparisonTable;
use crate::pipeline::runner::run_pipeline;
use crate::state::AppState;

const RESUME_ARTIFACT_FILENAME: &str = "optimized_resume.tex";
const COVER_LETTER_ARTIFACT_FILENAME: &str = "cover_letter.tex";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Raw multipart fields of an optimize request, before validation.
#[derive(Debug, Default)]
pub struct OptimizeForm {
    pub resume: Option<Bytes>,
    pub job_description: Option<String>,
    pub template: Option<String>,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub cover_letter: bool,
}

#[derive(Debug, Serialize)]
pub struct OptimizeResponse {
    pub analysis: String,
    pub optimized_resume: String,
    pub evaluation: String,
    pub comparison: ComparisonTable,
    pub cover_letter: Option<String>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub models: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ArtifactRequest {
    pub content: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Form collection and validation
// ────────────────────────────────────────────────────────────────────────────

impl OptimizeForm {
    /// Drains the multipart stream into named fields. Unknown fields are
    /// ignored.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = OptimizeForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::Validation(format!("Malformed multipart request: {e}")))?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };
            match name.as_str() {
                "resume" => form.resume = Some(read_bytes(field).await?),
                "job_description" => form.job_description = Some(read_text(field).await?),
                "template" => form.template = Some(read_text(field).await?),
                "api_key" => form.api_key = Some(read_text(field).await?),
                "model" => form.model = Some(read_text(field).await?),
                "cover_letter" => {
                    form.cover_letter = read_text(field).await?.trim().eq_ignore_ascii_case("true")
                }
                _ => {}
            }
        }

        Ok(form)
    }

    /// Validates the form and builds the run context plus the caller's API
    /// key. All validation happens here, before any completion client exists,
    /// so a rejected request never costs a remote call.
    pub fn into_context(self, config: &Config) -> Result<(RunContext, String), AppError> {
        let template = match self.template.filter(|t| !t.trim().is_empty()) {
            Some(t) => Some(t),
            // Alternate front-end variant: template comes from a fixed local
            // file instead of the request.
            None => match &config.template_path {
                Some(path) => Some(std::fs::read_to_string(path).map_err(|e| {
                    AppError::Validation(format!(
                        "Failed to read template file {}: {e}",
                        path.display()
                    ))
                })?),
                None => None,
            },
        };

        let mut missing = Vec::new();
        if self.resume.is_none() {
            missing.push("resume");
        }
        if is_blank(&self.job_description) {
            missing.push("job_description");
        }
        if template.is_none() {
            missing.push("template");
        }
        if is_blank(&self.api_key) {
            missing.push("api_key");
        }
        if is_blank(&self.model) {
            missing.push("model");
        }
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Please complete all inputs: missing {}",
                missing.join(", ")
            )));
        }

        let model = self.model.unwrap();
        if !SUPPORTED_MODELS.contains(&model.as_str()) {
            return Err(AppError::Validation(format!(
                "Unknown model '{model}'. Supported models: {}",
                SUPPORTED_MODELS.join(", ")
            )));
        }

        let resume_data: Value = serde_json::from_slice(&self.resume.unwrap())
            .map_err(|e| AppError::Validation(format!("Resume file is not valid JSON: {e}")))?;

        let ctx = RunContext {
            resume_data,
            job_description: self.job_description.unwrap(),
            template: template.unwrap(),
            model,
            with_cover_letter: self.cover_letter,
        };

        Ok((ctx, self.api_key.unwrap()))
    }
}

fn is_blank(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, |s| s.trim().is_empty())
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart field: {e}")))
}

async fn read_bytes(field: axum::extract::multipart::Field<'_>) -> Result<Bytes, AppError> {
    field
        .bytes()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart field: {e}")))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/optimize
///
/// Runs the full document generation pipeline: analyze → rewrite → evaluate,
/// plus the cover letter when requested. Inputs are validated before the
/// completion client is constructed.
pub async fn handle_optimize(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<OptimizeResponse>, AppError> {
    let form = OptimizeForm::from_multipart(multipart).await?;
    let (ctx, api_key) = form.into_context(&state.config)?;

    let client = GroqClient::new(
        state.http.clone(),
        &state.config.completion_base_url,
        api_key,
    );

    let outcome = run_pipeline(&ctx, &client).await?;

    Ok(Json(OptimizeResponse {
        analysis: outcome.analysis,
        optimized_resume: outcome.optimized_resume,
        evaluation: outcome.evaluation,
        comparison: outcome.comparison,
        cover_letter: outcome.cover_letter,
        generated_at: Utc::now(),
    }))
}

/// GET /api/v1/models
///
/// The fixed model list the front end renders as a selection.
pub async fn handle_list_models() -> Json<ModelsResponse> {
    Json(ModelsResponse {
        models: SUPPORTED_MODELS.iter().map(|m| m.to_string()).collect(),
    })
}

/// POST /api/v1/artifacts/resume
///
/// Stateless download: echoes the supplied markup back as a plain-text
/// attachment with the fixed resume filename.
pub async fn handle_download_resume(Json(request): Json<ArtifactRequest>) -> Response {
    artifact_response(RESUME_ARTIFACT_FILENAME, request.content)
}

/// POST /api/v1/artifacts/cover-letter
pub async fn handle_download_cover_letter(Json(request): Json<ArtifactRequest>) -> Response {
    artifact_response(COVER_LETTER_ARTIFACT_FILENAME, request.content)
}

fn artifact_response(filename: &str, content: String) -> Response {
    (
        [
            (
                header::CONTENT_TYPE,
                "text/plain; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        content,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn test_config() -> Config {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            completion_base_url: "https://api.groq.com".to_string(),
            template_path: None,
        }
    }

    fn complete_form() -> OptimizeForm {
        OptimizeForm {
            resume: Some(Bytes::from_static(br#"{"skills": ["Python", "SQL"]}"#)),
            job_description: Some("Senior Backend Engineer, Python, 5+ years".to_string()),
            template: Some(r"\documentclass{article}".to_string()),
            api_key: Some("gsk_test".to_string()),
            model: Some("llama3-70b-8192".to_string()),
            cover_letter: false,
        }
    }

    #[test]
    fn test_complete_form_builds_context() {
        let (ctx, api_key) = complete_form().into_context(&test_config()).unwrap();

        assert_eq!(ctx.model, "llama3-70b-8192");
        assert_eq!(ctx.job_description, "Senior Backend Engineer, Python, 5+ years");
        assert_eq!(ctx.resume_data["skills"][0], "Python");
        assert!(!ctx.with_cover_letter);
        assert_eq!(api_key, "gsk_test");
    }

    #[test]
    fn test_each_missing_input_fails_validation() {
        let cases: Vec<(&str, Box<dyn Fn(&mut OptimizeForm)>)> = vec![
            ("resume", Box::new(|f| f.resume = None)),
            ("job_description", Box::new(|f| f.job_description = None)),
            ("template", Box::new(|f| f.template = None)),
            ("api_key", Box::new(|f| f.api_key = None)),
            ("model", Box::new(|f| f.model = None)),
        ];

        for (name, clear) in cases {
            let mut form = complete_form();
            clear(&mut form);
            let err = form.into_context(&test_config()).unwrap_err();
            match err {
                AppError::Validation(msg) => {
                    assert!(msg.contains("Please complete all inputs"), "{name}: {msg}");
                    assert!(msg.contains(name), "{name}: {msg}");
                }
                other => panic!("{name}: expected Validation, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_whitespace_only_field_counts_as_missing() {
        let mut form = complete_form();
        form.job_description = Some("   \n".to_string());
        let err = form.into_context(&test_config()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_unknown_model_is_rejected() {
        let mut form = complete_form();
        form.model = Some("gpt-2".to_string());
        let err = form.into_context(&test_config()).unwrap_err();
        match err {
            AppError::Validation(msg) => assert!(msg.contains("Unknown model 'gpt-2'")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_resume_json_is_rejected() {
        let mut form = complete_form();
        form.resume = Some(Bytes::from_static(b"not json"));
        let err = form.into_context(&test_config()).unwrap_err();
        match err {
            AppError::Validation(msg) => assert!(msg.contains("not valid JSON")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_template_falls_back_to_configured_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r"\documentclass{{moderncv}} from disk").unwrap();

        let mut config = test_config();
        config.template_path = Some(file.path().to_path_buf());

        let mut form = complete_form();
        form.template = None;

        let (ctx, _) = form.into_context(&config).unwrap();
        assert_eq!(ctx.template, r"\documentclass{moderncv} from disk");
    }

    #[test]
    fn test_request_template_wins_over_fallback_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "disk template").unwrap();

        let mut config = test_config();
        config.template_path = Some(file.path().to_path_buf());

        let (ctx, _) = complete_form().into_context(&config).unwrap();
        assert_eq!(ctx.template, r"\documentclass{article}");
    }

    #[test]
    fn test_artifact_response_sets_attachment_headers() {
        let response = artifact_response(RESUME_ARTIFACT_FILENAME, "content".to_string());
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap();
        assert_eq!(
            disposition,
            "attachment; filename=\"optimized_resume.tex\""
        );
        assert!(response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
    }
}
