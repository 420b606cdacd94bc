//! # mood-api: Binary Entry Point
//!
//! Starts the Axum HTTP server. Binds to `MOOD_API_PORT` (default 3000).

use mood_api::ApiConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    mood_api::telemetry::init_tracing("info", mood_api::telemetry::json_from_env());

    let config = ApiConfig::from_env().map_err(|e| {
        tracing::error!("Configuration failed: {e}");
        e
    })?;

    mood_api::serve(config).await?;
    Ok(())
}
