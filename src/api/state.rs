//! Application state for the PayShare engine API.

use std::sync::Arc;

use crate::config::{ConfigLoader, StatutoryConfig};

/// Shared application state.
///
/// Holds the loaded statutory schedule, shared read-only across handlers.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the statutory schedule in effect.
    pub fn statutory(&self) -> &StatutoryConfig {
        self.config.config()
    }

    /// Returns the currency symbol used for display strings.
    pub fn currency_symbol(&self) -> &str {
        &self.statutory().metadata().currency_symbol
    }
}
