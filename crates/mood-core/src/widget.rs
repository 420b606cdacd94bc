//! # Verification Widget Parameters
//!
//! Public configuration handed to the World ID widget. The application id
//! is not a secret; browsers receive it with the page.

use serde::{Deserialize, Serialize};

use crate::proof::VerificationLevel;

/// Environment variable holding the World ID application id.
pub const APP_ID_ENV: &str = "NEXT_PUBLIC_WORLDCOIN_APP_ID";

/// Action name registered for the verification step.
pub const VERIFY_ACTION: &str = "verify";

/// Parameters for presenting the verification widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct WidgetConfig {
    pub app_id: String,
    pub action: String,
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "device"))]
    pub verification_level: VerificationLevel,
}

impl WidgetConfig {
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            action: VERIFY_ACTION.to_string(),
            verification_level: VerificationLevel::Device,
        }
    }

    /// Read the app id from [`APP_ID_ENV`]. An unset variable yields an
    /// empty app id rather than an error.
    pub fn from_env() -> Self {
        Self::new(std::env::var(APP_ID_ENV).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_device_level_verify_action() {
        let config = WidgetConfig::new("app_staging_123");
        assert_eq!(config.action, "verify");
        assert_eq!(config.verification_level, VerificationLevel::Device);
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            serde_json::json!({
                "app_id": "app_staging_123",
                "action": "verify",
                "verification_level": "device"
            })
        );
    }
}
