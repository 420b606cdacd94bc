//! # `/api/verify` Client
//!
//! Posts a [`ProofPayload`] and decodes the [`VerificationResult`] envelope.
//!
//! | Response                     | Outcome                                  |
//! |------------------------------|------------------------------------------|
//! | 2xx with JSON body           | `Ok(envelope)`                           |
//! | non-2xx with JSON body       | `Err(VerifyError::Rejected)`             |
//! | any status, non-JSON body    | `Err(VerifyError::Deserialization)`      |
//! | connection / timeout failure | `Err(VerifyError::Http)`                 |
//!
//! A 2xx response is treated as success regardless of the envelope's
//! `success` flag. The body is read as loose JSON: `id` and `error` may be
//! any scalar, which is rendered as text, and falsy values (`""`, `0`,
//! `false`, `null`) count as absent. No retries are attempted; retrying is
//! always the user's call.

use std::time::Duration;

use mood_core::{ProofPayload, VerificationResult};
use serde_json::Value;
use url::Url;

use crate::config::{ClientConfig, ConfigError};
use crate::error::VerifyError;

/// Path of the verification endpoint, relative to the API origin.
pub const VERIFY_PATH: &str = "/api/verify";

/// Typed client for the verification endpoint.
#[derive(Debug, Clone)]
pub struct VerifyClient {
    http: reqwest::Client,
    verify_url: Url,
}

impl VerifyClient {
    /// Create a new client from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, VerifyError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| VerifyError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;
        let verify_url = config
            .base_url
            .join(VERIFY_PATH)
            .map_err(|e| ConfigError::InvalidUrl(VERIFY_PATH.to_string(), e.to_string()))?;
        Ok(Self { http, verify_url })
    }

    /// Full URL of the verification endpoint.
    pub fn verify_url(&self) -> &Url {
        &self.verify_url
    }

    /// Submit a proof and decode the response envelope.
    pub async fn submit_proof(
        &self,
        payload: &ProofPayload,
    ) -> Result<VerificationResult, VerifyError> {
        let endpoint = self.verify_url.as_str();
        let resp = self
            .http
            .post(self.verify_url.clone())
            .json(payload)
            .send()
            .await
            .map_err(|source| VerifyError::Http {
                endpoint: endpoint.to_string(),
                source,
            })?;

        let status = resp.status();
        let body: Value = resp.json().await.map_err(|source| VerifyError::Deserialization {
            endpoint: endpoint.to_string(),
            source,
        })?;
        let envelope = loose_envelope(&body);

        if status.is_success() {
            tracing::debug!(%status, id = ?envelope.id, "verification accepted");
            Ok(envelope)
        } else {
            Err(VerifyError::Rejected {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                message: envelope.error,
            })
        }
    }
}

/// Read the envelope fields without insisting on their JSON types.
fn loose_envelope(body: &Value) -> VerificationResult {
    VerificationResult {
        success: body.get("success").is_some_and(truthy),
        id: body.get("id").and_then(scalar_text),
        error: body.get("error").and_then(scalar_text),
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    if !truthy(value) {
        return None;
    }
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loose_envelope_stringifies_scalar_fields() {
        let envelope = loose_envelope(&serde_json::json!({"success": true, "id": 42}));
        assert!(envelope.success);
        assert_eq!(envelope.id.as_deref(), Some("42"));

        let envelope = loose_envelope(&serde_json::json!({"success": 0, "error": false}));
        assert!(!envelope.success);
        assert!(envelope.error.is_none());
    }

    #[test]
    fn loose_envelope_ignores_falsy_and_structured_ids() {
        for body in [
            serde_json::json!({"id": ""}),
            serde_json::json!({"id": 0}),
            serde_json::json!({"id": null}),
            serde_json::json!({"id": {"nested": true}}),
            serde_json::json!([1, 2]),
        ] {
            assert!(loose_envelope(&body).id.is_none(), "{body}");
        }
    }

    #[test]
    fn verify_url_is_rooted_at_origin() {
        let config = ClientConfig::new("http://127.0.0.1:3000/app/").unwrap();
        let client = VerifyClient::new(&config).unwrap();
        assert_eq!(client.verify_url().as_str(), "http://127.0.0.1:3000/api/verify");
    }
}
