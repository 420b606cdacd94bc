//! Kubernetes-style health probes. Mounted outside the body limit layer.

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
}

/// GET /health/liveness
#[utoipa::path(
    get,
    path = "/health/liveness",
    responses((status = 200, description = "Process is alive", body = String)),
    tag = "health"
)]
pub(crate) async fn liveness() -> &'static str {
    "ok"
}

/// GET /health/readiness
///
/// The server has no dependencies to wait on, so it is ready as soon as it
/// accepts connections.
#[utoipa::path(
    get,
    path = "/health/readiness",
    responses((status = 200, description = "Ready to serve", body = String)),
    tag = "health"
)]
pub(crate) async fn readiness() -> &'static str {
    "ready"
}
