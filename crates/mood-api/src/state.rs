//! # Application State
//!
//! Shared state passed to handlers via the `State` extractor. The
//! verification endpoint keeps nothing between requests; the only shared
//! data is configuration.

use std::sync::Arc;

use crate::config::ApiConfig;

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub config: Arc<ApiConfig>,
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
