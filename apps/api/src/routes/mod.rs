pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::pipeline::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/models", get(handlers::handle_list_models))
        .route("/api/v1/optimize", post(handlers::handle_optimize))
        .route(
            "/api/v1/artifacts/resume",
            post(handlers::handle_download_resume),
        )
        .route(
            "/api/v1/artifacts/cover-letter",
            post(handlers::handle_download_cover_letter),
        )
        .with_state(state)
}
