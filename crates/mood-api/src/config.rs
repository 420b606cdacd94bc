//! # Server Configuration
//!
//! Loaded from the environment at startup:
//!
//! - `MOOD_API_PORT` (default: 3000)
//! - `NEXT_PUBLIC_WORLDCOIN_APP_ID` (default: empty)

use mood_core::WidgetConfig;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    /// Public widget parameters served at `/api/widget-config`.
    pub widget: WidgetConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            widget: WidgetConfig::new(""),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("MOOD_API_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self {
            port,
            widget: WidgetConfig::from_env(),
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("MOOD_API_PORT is not a valid port: {0:?}")]
    InvalidPort(String),
}
