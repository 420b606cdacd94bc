//! # Gate Subcommand
//!
//! Evaluates a session snapshot (camelCase JSON, as published by the auth
//! provider) and prints the resulting decision.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use mood_core::{evaluate, GateDecision, Session};

use crate::read_json_input;

/// Arguments for the gate subcommand.
#[derive(Args, Debug)]
pub struct GateArgs {
    /// Session JSON file, or `-` for stdin.
    #[arg(long)]
    pub session: PathBuf,
}

/// Execute the gate subcommand.
pub fn run_gate(args: &GateArgs) -> Result<u8> {
    let session: Session = read_json_input(&args.session)?;
    let decision = decide(&session);
    println!("{}", serde_json::to_string_pretty(&decision)?);
    Ok(0)
}

fn decide(session: &Session) -> GateDecision {
    let decision = evaluate(session);
    tracing::debug!(?decision, loading = session.is_loading, "gate evaluated");
    decision
}
