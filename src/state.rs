//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::service::InfoService;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub info: Arc<InfoService>,
}

impl AppState {
    /// Creates the state, building the info service from the `[service]` section.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            info: Arc::new(InfoService::new(&config.service)),
        }
    }
}
