//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - The movement validation route and health check
//! - JSON extraction with schema and value validation
//! - Error rendering
//! - Access logging

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod routes;

use axum::{Router, extract::DefaultBodyLimit};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use banksync_core::movements::MovementValidator;
use banksync_shared::AppError;

use crate::error::ApiError;

/// Application state shared across handlers.
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    /// Ledger validator.
    pub validator: MovementValidator,
    /// Maximum accepted request body size in bytes.
    pub body_limit_bytes: usize,
}

impl AppState {
    /// Creates state with the given validator and body limit.
    #[must_use]
    pub const fn new(validator: MovementValidator, body_limit_bytes: usize) -> Self {
        Self {
            validator,
            body_limit_bytes,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(MovementValidator::default(), 2 * 1024 * 1024)
    }
}

async fn not_found() -> ApiError {
    ApiError(AppError::NotFound("no such route".to_string()))
}

/// Creates the main application router.
///
/// Routes are served both at the root and under `/api/v1`.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .nest("/api/v1", routes::api_routes())
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(state.body_limit_bytes))
        .layer(axum::middleware::from_fn(middleware::log_requests))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
