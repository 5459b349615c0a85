//! Version echo endpoint.

use axum::{extract::State, Json};
use http::HeaderMap;

use crate::config::DB_STATUS_NOT_CHECKED;
use crate::envelope::{first_header_values, resolve_hostname, ResponseEnvelope};
use crate::state::AppState;

/// Reports the configured version, the host name and the request's headers.
pub async fn root(State(state): State<AppState>, headers: HeaderMap) -> Json<ResponseEnvelope> {
    let version = &state.config.version;

    let envelope = ResponseEnvelope::new(
        version.as_str(),
        format!("Hello from version {}!", version),
        DB_STATUS_NOT_CHECKED,
    )
    .with_hostname(resolve_hostname())
    .with_headers(first_header_values(&headers));

    Json(envelope)
}
