//! # Verify Subcommand
//!
//! Submits a proof produced by the verification widget (saved as JSON) to
//! `/api/verify`, going through the same view state machine the page uses,
//! and prints the outcome.
//!
//! Exit code is 0 when verified and 1 when the server or transport failed.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde_json::json;
use tokio::sync::watch;

use mood_client::{ClientConfig, PresentedProof, VerificationView, VerifyClient, ViewState};
use mood_core::{Session, User, WidgetConfig, WidgetProof};

use crate::read_json_input;

/// Arguments for the verify subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Widget proof JSON file, or `-` for stdin.
    #[arg(long)]
    pub proof: PathBuf,

    /// Wallet address to submit alongside the proof.
    #[arg(long)]
    pub address: Option<String>,

    /// API origin. Overrides `MOOD_API_URL`.
    #[arg(long)]
    pub url: Option<String>,

    /// Request timeout in seconds. Overrides `MOOD_VERIFY_TIMEOUT_SECS`.
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

/// Execute the verify subcommand.
pub async fn run_verify(args: &VerifyArgs) -> Result<u8> {
    let proof: WidgetProof = read_json_input(&args.proof)?;
    let state = submit(args, proof).await?;
    println!("{}", serde_json::to_string_pretty(&outcome_json(&state))?);
    Ok(if matches!(state, ViewState::Verified { .. }) {
        0
    } else {
        1
    })
}

async fn submit(args: &VerifyArgs, proof: WidgetProof) -> Result<ViewState> {
    let mut config = match &args.url {
        Some(url) => ClientConfig::new(url)?,
        None => ClientConfig::from_env()?,
    };
    if let Some(secs) = args.timeout_secs {
        config = config.with_timeout_secs(secs);
    }
    let client = VerifyClient::new(&config)?;
    tracing::info!(url = %client.verify_url(), "submitting proof");

    let user = match &args.address {
        Some(address) => User::with_wallet(address.clone()),
        None => User::without_wallet(),
    };
    let (_session_tx, session_rx) = watch::channel(Session::signed_in(user));
    let view = VerificationView::new(client, session_rx, WidgetConfig::from_env());
    Ok(view.verify_with(&PresentedProof(proof)).await?)
}

fn outcome_json(state: &ViewState) -> serde_json::Value {
    match state {
        ViewState::Verified { verification_id } => json!({
            "verified": true,
            "verification_id": verification_id,
        }),
        ViewState::Failed { error } => json!({
            "verified": false,
            "error": error,
        }),
        ViewState::Idle | ViewState::Verifying => json!({ "verified": false }),
    }
}
