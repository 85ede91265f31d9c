//! API route definitions.

use crate::AppState;

use axum::Router;

pub mod health;
pub mod movements;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(movements::routes())
}
