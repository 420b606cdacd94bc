//! # OpenAPI Document Assembly
//!
//! Assembles the utoipa-documented routes into a single OpenAPI document,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use mood_core::{ProofPayload, VerificationResult, WidgetConfig};
use utoipa::OpenApi;

use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mood API: Verification Funnel",
        version = "0.1.0",
        description = "Server half of the World ID verification handshake.\n\n`POST /api/verify` issues an identifier for any JSON body. It does not verify the submitted proof."
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server"),
    ),
    paths(
        crate::routes::verify::verify,
        crate::routes::widget::widget_config,
        crate::routes::health::liveness,
        crate::routes::health::readiness,
    ),
    components(schemas(ProofPayload, VerificationResult, WidgetConfig)),
    tags(
        (name = "verification", description = "Proof submission and widget parameters"),
        (name = "health", description = "Liveness and readiness probes"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json: the generated OpenAPI document.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_documents_verify_endpoint() {
        let spec = ApiDoc::openapi();
        assert!(spec.paths.paths.contains_key("/api/verify"));
        assert!(spec.paths.paths.contains_key("/api/widget-config"));
        let schemas = &spec.components.as_ref().unwrap().schemas;
        assert!(schemas.contains_key("ProofPayload"));
        assert!(schemas.contains_key("VerificationResult"));
    }
}
