//! HTTP route handlers.
//!
//! Three endpoints, none restricted by method. Paths that match nothing fall
//! through to the root handler, the same as a bare `/` pattern would.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod db_check;
pub mod health;
pub mod root;

use axum::{middleware, routing::any, Router};

use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(root::root))
        .route("/health", any(health::health))
        .route("/db-check", any(db_check::db_check))
        .fallback(root::root)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
