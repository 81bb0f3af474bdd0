//! Application state management

use database::DocumentStore;
use std::sync::Arc;

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Created once at startup and shared by every request
    pub store: Arc<dyn DocumentStore>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn DocumentStore>) -> Self {
        Self { config, store }
    }
}
