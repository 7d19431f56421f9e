use crate::config::Config;

/// Shared application state injected into route handlers via Axum extractors.
///
/// Holds only process-wide immutable pieces: the HTTP connection pool and the
/// configuration. Everything about a single optimization run lives in a
/// request-scoped `RunContext` and is dropped when the response is sent.
#[derive(Clone)]
pub struct AppState {
    /// Shared reqwest pool; per-request `GroqClient`s wrap it with the
    /// caller's API key.
    pub http: reqwest::Client,
    pub config: Config,
}
