//! # mood-cli: Command-Line Interface for the Verification Funnel
//!
//! ## Subcommands
//!
//! - `mood serve`: Run the verification API.
//! - `mood verify`: Submit a widget proof to `/api/verify` and report the outcome.
//! - `mood gate`: Print the gate decision for a session snapshot.
//!
//! ```bash
//! mood serve --port 3000
//! mood verify --proof proof.json --address 0xfeedface
//! echo '{"isLoading":false,"user":null}' | mood gate --session -
//! ```
//!
//! Argument parsing lives in each subcommand module next to its handler;
//! the handlers delegate to `mood-core`, `mood-client`, and `mood-api`.

pub mod gate;
pub mod serve;
pub mod verify;

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Read a JSON document from `path`, or from stdin when `path` is `-`.
pub fn read_json_input<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let (raw, source) = if path == Path::new("-") {
        let raw = std::io::read_to_string(std::io::stdin()).context("failed to read stdin")?;
        (raw, "stdin".to_string())
    } else {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        (raw, path.display().to_string())
    };
    serde_json::from_str(&raw).with_context(|| format!("invalid JSON in {source}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mood_core::Session;

    #[test]
    fn reads_json_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, r#"{"isLoading": true}"#).unwrap();

        let session: Session = read_json_input(&path).unwrap();
        assert_eq!(session, Session::loading());
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = read_json_input::<Session>(&path).unwrap_err();
        assert!(format!("{err:#}").contains("absent.json"));
    }

    #[test]
    fn malformed_json_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "isLoading: true").unwrap();
        let err = read_json_input::<Session>(&path).unwrap_err();
        assert!(err.to_string().starts_with("invalid JSON in"));
    }
}
