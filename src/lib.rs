//! version-app: a demo service that reports its version.
//!
//! Serves three endpoints: `/` echoes the configured version, host name and
//! request headers; `/health` is a liveness probe; `/db-check` opens a MySQL
//! connection and counts the rows of the sock table.

pub mod config;
pub mod db;
pub mod envelope;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use envelope::ResponseEnvelope;
pub use error::{AppError, DbError};
pub use routes::create_router;
pub use state::AppState;
