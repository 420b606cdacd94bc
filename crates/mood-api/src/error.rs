//! # API Error Types
//!
//! Failures of `/api/verify` are rendered as the verification envelope,
//! never as a raw fault:
//!
//! ```json
//! { "success": false, "error": "Verification failed" }
//! ```
//!
//! The underlying cause is logged and not returned to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use mood_core::VerificationResult;
use thiserror::Error;

/// Error text returned to clients for any verification failure.
pub const VERIFICATION_FAILED: &str = "Verification failed";

#[derive(Error, Debug)]
pub enum AppError {
    /// The request could not be handled (500).
    #[error("verification error: {0}")]
    Verification(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "verification error");
        let status = match self {
            Self::Verification(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(VerificationResult::failure(VERIFICATION_FAILED))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verification_error_is_500() {
        let resp = AppError::Verification("malformed JSON".into()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
