//! Database connectivity endpoint.
//!
//! Runs the configured probe on demand. Success and failure both produce a
//! full envelope; failures become a 500 through `AppError`.

use axum::{extract::State, Json};

use crate::config::DB_SUCCESS_MESSAGE;
use crate::envelope::{resolve_hostname, ResponseEnvelope};
use crate::error::AppError;
use crate::state::AppState;

pub async fn db_check(State(state): State<AppState>) -> Result<Json<ResponseEnvelope>, AppError> {
    let hostname = resolve_hostname();

    let count = state
        .db
        .count_socks()
        .await
        .map_err(|source| AppError::Database {
            version: state.config.version.clone(),
            source,
        })?;

    tracing::debug!(count, "Database check succeeded");

    let envelope = ResponseEnvelope::new(
        state.config.version.as_str(),
        DB_SUCCESS_MESSAGE,
        format!("connected - {} socks in database", count),
    )
    .with_hostname(hostname);

    Ok(Json(envelope))
}
