//! # Verification Endpoint
//!
//! Routes:
//! - POST /api/verify: exchange a proof payload for a verification id
//!
//! The body must be JSON but its shape is not checked, and the proof is
//! not verified. Every JSON body yields a new
//! [`VerificationId`](mood_core::VerificationId). Two identical
//! submissions receive two different ids; nothing is deduplicated.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::routing::post;
use axum::{Json, Router};
use mood_core::{ProofPayload, VerificationId, VerificationResult};
use serde_json::Value;

use crate::error::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/verify", post(verify))
}

/// POST /api/verify: issue a verification id for a submitted proof.
#[utoipa::path(
    post,
    path = "/api/verify",
    request_body = ProofPayload,
    responses(
        (status = 200, description = "Verification id issued", body = VerificationResult),
        (status = 500, description = "Body could not be read as JSON", body = VerificationResult),
    ),
    tag = "verification"
)]
pub(crate) async fn verify(
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<VerificationResult>, AppError> {
    let body = body.map_err(|e| AppError::Verification(format!("unreadable body: {e}")))?;
    let request: Value = serde_json::from_slice(&body)
        .map_err(|e| AppError::Verification(format!("malformed JSON: {e}")))?;

    let level = request
        .get("verification_level")
        .and_then(Value::as_str)
        .unwrap_or("unspecified");
    let id = VerificationId::issue();
    tracing::info!(%id, verification_level = level, "issued verification id (proof not checked)");

    Ok(Json(VerificationResult::success(&id)))
}
