//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::{DatabaseProbe, MySqlProbe};

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Holds the immutable configuration and the probe used by `/db-check`.
/// Nothing in here is ever mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: Arc<dyn DatabaseProbe>,
}

impl AppState {
    /// Creates state with a MySQL probe built from the configuration.
    pub fn new(config: AppConfig) -> Self {
        let probe = MySqlProbe::new(config.db.clone());
        Self::with_probe(config, Arc::new(probe))
    }

    pub fn with_probe(config: AppConfig, db: Arc<dyn DatabaseProbe>) -> Self {
        Self {
            config: Arc::new(config),
            db,
        }
    }
}
