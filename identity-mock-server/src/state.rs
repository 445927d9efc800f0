//! Shared application state.

use std::sync::Arc;

use crate::config::Config;
use crate::store::UserStore;

/// Shared application state passed to all handlers.
pub struct AppState {
    pub config: Config,
    pub store: Arc<UserStore>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<UserStore>) -> Self {
        Self { config, store }
    }

    /// Build the store described by `config` and wrap both into state.
    pub fn from_config(config: Config) -> Self {
        let ids = config.store.id_strategy.generator();
        let store = if config.store.seed_sample_users {
            UserStore::with_sample_users(ids)
        } else {
            UserStore::new(ids)
        };
        Self::new(config, Arc::new(store))
    }

    pub fn log_payloads(&self) -> bool {
        self.config.logging.log_payloads
    }
}
