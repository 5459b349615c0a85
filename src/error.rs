use axum::{
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;

use crate::config::DB_FAILURE_MESSAGE;
use crate::envelope::ResponseEnvelope;

/// Failure of one step of the database probe.
///
/// The display text is what ends up in the envelope's `db_status`.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("Failed to ping database: {0}")]
    Ping(#[source] sqlx::Error),

    #[error("Failed to query database: {0}")]
    Query(#[source] sqlx::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database connection failed: {source}")]
    Database {
        /// Version reported in the failure envelope
        version: String,
        #[source]
        source: DbError,
    },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Database { version, source } => {
                tracing::warn!(error = %source, "Database check failed");
                let envelope =
                    ResponseEnvelope::new(version, DB_FAILURE_MESSAGE, source.to_string());
                (StatusCode::INTERNAL_SERVER_ERROR, Json(envelope)).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    fn protocol_error() -> sqlx::Error {
        sqlx::Error::Protocol("server went away".to_string())
    }

    #[test]
    fn test_db_error_messages() {
        assert!(DbError::Connect(protocol_error())
            .to_string()
            .starts_with("Failed to connect to database: "));
        assert!(DbError::Ping(protocol_error())
            .to_string()
            .starts_with("Failed to ping database: "));
        assert!(DbError::Query(protocol_error())
            .to_string()
            .starts_with("Failed to query database: "));
    }

    #[tokio::test]
    async fn test_database_error_is_500_envelope() {
        let err = AppError::Database {
            version: "v3".to_string(),
            source: DbError::Ping(protocol_error()),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let envelope: ResponseEnvelope = serde_json::from_slice(&body).unwrap();
        assert_eq!(envelope.version, "v3");
        assert_eq!(envelope.message, "Database connection failed");
        assert!(envelope.db_status.starts_with("Failed to ping database: "));
        assert!(envelope.db_status.contains("server went away"));
        assert!(envelope.hostname.is_empty());
        assert!(envelope.headers.is_empty());
    }
}
