//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns 200 OK when the process is running.
//! It never touches the database, so a failing `/db-check` does not make the
//! process look dead to an orchestrator.

/// Health check handler.
///
/// Returns a plain-text "OK" for any method.
pub async fn health() -> &'static str {
    "OK"
}
