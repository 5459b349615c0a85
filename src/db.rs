//! Database reachability probe.
//!
//! Every probe opens its own MySQL connection, pings it, counts the rows in the
//! sock table and closes the connection again, whatever the outcome. There is
//! no pool, no retry and no deadline beyond what the driver applies itself.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::Connection;

use crate::config::{DatabaseConfig, SOCK_COUNT_QUERY};
use crate::error::DbError;

/// Something that can report how many socks the database holds.
#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    async fn count_socks(&self) -> Result<i64, DbError>;
}

/// Probe backed by a fresh MySQL connection per call.
#[derive(Debug, Clone)]
pub struct MySqlProbe {
    config: DatabaseConfig,
}

impl MySqlProbe {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl DatabaseProbe for MySqlProbe {
    async fn count_socks(&self) -> Result<i64, DbError> {
        let options =
            MySqlConnectOptions::from_str(&self.config.connection_url()).map_err(DbError::Connect)?;

        tracing::debug!(
            host = %self.config.host,
            port = %self.config.port,
            database = %self.config.name,
            "Opening database connection"
        );
        let mut conn = MySqlConnection::connect_with(&options)
            .await
            .map_err(DbError::Connect)?;

        let result = ping_and_count(&mut conn).await;

        // Closed on every path, including a failed ping or query
        if let Err(e) = conn.close().await {
            tracing::debug!(error = %e, "Error while closing database connection");
        }

        result
    }
}

async fn ping_and_count(conn: &mut MySqlConnection) -> Result<i64, DbError> {
    conn.ping().await.map_err(DbError::Ping)?;

    sqlx::query_scalar::<_, i64>(SOCK_COUNT_QUERY)
        .fetch_one(&mut *conn)
        .await
        .map_err(DbError::Query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn config_with(host: &str, port: &str) -> DatabaseConfig {
        let mut db = AppConfig::default().db;
        db.host = host.to_string();
        db.port = port.to_string();
        db
    }

    #[tokio::test]
    async fn test_unparsable_port_is_connect_error() {
        let probe = MySqlProbe::new(config_with("127.0.0.1", "not-a-port"));
        let err = probe.count_socks().await.unwrap_err();
        assert!(matches!(err, DbError::Connect(_)));
    }

    #[tokio::test]
    async fn test_refused_connection_is_connect_error() {
        // Nothing listens on port 1
        let probe = MySqlProbe::new(config_with("127.0.0.1", "1"));
        let err = probe.count_socks().await.unwrap_err();
        assert!(matches!(err, DbError::Connect(_)));
        assert!(err.to_string().len() > "Failed to connect to database: ".len());
    }
}
