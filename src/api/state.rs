//! Application state for the Leave Accrual Engine API.

use std::sync::Arc;

use crate::config::{ConfigLoader, LeavePolicy};

/// Shared application state.
///
/// Holds the loaded leave policy, shared read-only by every handler.
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

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}

impl From<LeavePolicy> for AppState {
    fn from(policy: LeavePolicy) -> Self {
        Self::new(ConfigLoader::from(policy))
    }
}
