//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/urls`, `/urls/{code}`, `/u/{code}` - Short URL API (see [`crate::api::routes`])
//! - `GET /health`                        - Store health check
//!
//! Every request is wrapped in a tracing span.

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::url_routes())
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer())
}
