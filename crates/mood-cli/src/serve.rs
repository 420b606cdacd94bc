//! # Serve Subcommand
//!
//! Runs the verification API in the foreground. Configuration comes from
//! the environment; `--port` overrides `MOOD_API_PORT`.

use anyhow::{Context, Result};
use clap::Args;

use mood_api::ApiConfig;

/// Arguments for the serve subcommand.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Listen port.
    #[arg(long)]
    pub port: Option<u16>,
}

/// Execute the serve subcommand.
pub async fn run_serve(args: &ServeArgs) -> Result<u8> {
    let config = resolve_config(args)?;
    mood_api::serve(config)
        .await
        .context("verification API stopped")?;
    Ok(0)
}

fn resolve_config(args: &ServeArgs) -> Result<ApiConfig> {
    let mut config = ApiConfig::from_env()?;
    if let Some(port) = args.port {
        config.port = port;
    }
    Ok(config)
}
