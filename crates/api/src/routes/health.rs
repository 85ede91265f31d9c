//! Liveness route, reporting the limits this instance validates with.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"healthy"` while the process serves requests.
    pub status: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// Checkpoint count from which reconciliation runs in parallel.
    pub parallel_threshold: usize,
    /// Largest accepted request body, in bytes.
    pub body_limit_bytes: usize,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        parallel_threshold: state.validator.options().parallel_threshold,
        body_limit_bytes: state.body_limit_bytes,
    })
}

/// Routes for `/health`.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
