//! Configuration loading and constants.
//!
//! All settings come from environment variables, each with a fixed fallback.
//! An unset or empty variable resolves to its default; nothing is validated at
//! load time. `AppConfig` is built once at startup and shared read-only.

use std::fmt;

use const_format::formatcp;

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_VERSION: &str = "VERSION";
pub const ENV_DB_HOST: &str = "DB_HOST";
pub const ENV_DB_PORT: &str = "DB_PORT";
pub const ENV_DB_USER: &str = "DB_USER";
pub const ENV_DB_PASSWORD: &str = "DB_PASSWORD";
pub const ENV_DB_NAME: &str = "DB_NAME";
pub const ENV_PORT: &str = "PORT";

// =============================================================================
// Defaults
// =============================================================================

pub const DEFAULT_VERSION: &str = "v1";
pub const DEFAULT_DB_HOST: &str = "catalogue-db";
pub const DEFAULT_DB_PORT: &str = "3306";
pub const DEFAULT_DB_USER: &str = "root";
pub const DEFAULT_DB_PASSWORD: &str = "fake_password";
pub const DEFAULT_DB_NAME: &str = "socksdb";
pub const DEFAULT_PORT: &str = "8080";

/// Listen on every interface
pub const LISTEN_HOST: &str = "0.0.0.0";

// =============================================================================
// Database Probe
// =============================================================================

/// Table counted by the db-check probe
pub const SOCK_TABLE: &str = "sock";

pub const SOCK_COUNT_QUERY: &str = formatcp!("SELECT COUNT(*) FROM {}", SOCK_TABLE);

// =============================================================================
// Response Strings
// =============================================================================

/// `db_status` reported by endpoints that do not touch the database
pub const DB_STATUS_NOT_CHECKED: &str = "not checked";

pub const DB_SUCCESS_MESSAGE: &str = "Successfully connected to MySQL database";

pub const DB_FAILURE_MESSAGE: &str = "Database connection failed";

// =============================================================================
// Logging
// =============================================================================

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "version_app=debug,sqlx=warn";

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Version string reported by every envelope
    pub version: String,
    pub db: DatabaseConfig,
    pub http: HttpServerConfig,
}

/// Connection settings for the MySQL database. Values are kept as raw strings.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: String,
    pub user: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    /// Build the `mysql://` connection URL, percent-encoding the credentials.
    pub fn connection_url(&self) -> String {
        format!(
            "mysql://{}:{}@{}:{}/{}",
            urlencoding::encode(&self.user),
            urlencoding::encode(&self.password),
            self.host,
            self.port,
            self.name
        )
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .finish()
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: String,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let setting = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            version: setting(ENV_VERSION, DEFAULT_VERSION),
            db: DatabaseConfig {
                host: setting(ENV_DB_HOST, DEFAULT_DB_HOST),
                port: setting(ENV_DB_PORT, DEFAULT_DB_PORT),
                user: setting(ENV_DB_USER, DEFAULT_DB_USER),
                password: setting(ENV_DB_PASSWORD, DEFAULT_DB_PASSWORD),
                name: setting(ENV_DB_NAME, DEFAULT_DB_NAME),
            },
            http: HttpServerConfig {
                host: LISTEN_HOST.to_string(),
                port: setting(ENV_PORT, DEFAULT_PORT),
            },
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
