use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_COMPLETION_BASE_URL: &str = "https://api.groq.com";

/// Application configuration loaded from environment variables.
///
/// The completion API key is deliberately NOT configured here — it arrives
/// with each request, supplied by the user through the front end.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub completion_base_url: String,
    /// Optional fallback template file used when a request carries no
    /// template of its own.
    pub template_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            completion_base_url: std::env::var("COMPLETION_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_COMPLETION_BASE_URL.to_string()),
            template_path: std::env::var("RESUME_TEMPLATE_PATH").ok().map(PathBuf::from),
        })
    }
}
