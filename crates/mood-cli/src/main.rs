//! # mood CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use mood_cli::gate::{run_gate, GateArgs};
use mood_cli::serve::{run_serve, ServeArgs};
use mood_cli::verify::{run_verify, VerifyArgs};

/// Mood verification funnel toolchain.
///
/// Runs the verification API, submits widget proofs against it, and
/// evaluates session snapshots against the onboarding gate.
#[derive(Parser, Debug)]
#[command(name = "mood", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the verification API.
    Serve(ServeArgs),

    /// Submit a widget proof to /api/verify.
    Verify(VerifyArgs),

    /// Print the gate decision for a session snapshot.
    Gate(GateArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = match (&cli.command, cli.verbose) {
        (Commands::Serve(_), 0) => "info",
        (_, 0) => "warn",
        (_, 1) => "info",
        (_, 2) => "debug",
        _ => "trace",
    };
    mood_api::telemetry::init_tracing(default_filter, mood_api::telemetry::json_from_env());

    let result = match &cli.command {
        Commands::Serve(args) => run_serve(args).await,
        Commands::Verify(args) => run_verify(args).await,
        Commands::Gate(args) => run_gate(args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn cli_parse_serve_with_port() {
        let cli = Cli::try_parse_from(["mood", "serve", "--port", "4000"]).unwrap();
        if let Commands::Serve(args) = cli.command {
            assert_eq!(args.port, Some(4000));
        } else {
            panic!("expected serve");
        }
    }

    #[test]
    fn cli_parse_verify_from_stdin() {
        let cli = Cli::try_parse_from([
            "mood",
            "verify",
            "--proof",
            "-",
            "--address",
            "0xfeedface",
            "--url",
            "http://localhost:3000",
        ])
        .unwrap();
        if let Commands::Verify(args) = cli.command {
            assert_eq!(args.proof, PathBuf::from("-"));
            assert_eq!(args.address.as_deref(), Some("0xfeedface"));
            assert_eq!(args.url.as_deref(), Some("http://localhost:3000"));
            assert!(args.timeout_secs.is_none());
        } else {
            panic!("expected verify");
        }
    }

    #[test]
    fn cli_parse_gate_requires_session() {
        assert!(Cli::try_parse_from(["mood", "gate"]).is_err());
        let cli = Cli::try_parse_from(["mood", "-vv", "gate", "--session", "s.json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Gate(_)));
    }

    #[test]
    fn cli_rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["mood", "lock"]).is_err());
    }
}
