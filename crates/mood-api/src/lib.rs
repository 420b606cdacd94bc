//! # mood-api: Verification Funnel Server
//!
//! Hosts the server half of the verification handshake.
//!
//! ## API Surface
//!
//! | Method | Path                  | Module                    |
//! |--------|-----------------------|---------------------------|
//! | POST   | `/api/verify`         | [`routes::verify`]        |
//! | GET    | `/api/widget-config`  | [`routes::widget`]        |
//! | GET    | `/health/liveness`    | [`routes::health`]        |
//! | GET    | `/health/readiness`   | [`routes::health`]        |
//! | GET    | `/openapi.json`       | [`openapi`]               |
//!
//! ## Stub Verification
//!
//! `/api/verify` does not check the submitted proof against World ID or any
//! other identity provider. It mints a fresh identifier for every JSON body
//! it receives. Callers must not treat its answer as proof of personhood.
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → DefaultBodyLimit → Handler
//! ```

pub mod config;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use config::ApiConfig;
pub use error::AppError;
pub use state::AppState;

use std::net::SocketAddr;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Request body limit for API routes: 64 KiB. Proof payloads are a few
/// hundred bytes.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Assemble the full application router.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::verify::router())
        .merge(routes::widget::router())
        .merge(openapi::router())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES));

    Router::new()
        .merge(api)
        .merge(routes::health::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind to the configured port and serve until the process is stopped.
pub async fn serve(config: ApiConfig) -> std::io::Result<()> {
    if config.widget.app_id.is_empty() {
        tracing::warn!(
            "{} is not set; the verification widget will be presented without an app id",
            mood_core::widget::APP_ID_ENV
        );
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = app(AppState::new(config));

    tracing::info!("mood-api listening on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}
