//! Tracing subscriber setup shared by the server and CLI binaries.

use tracing_subscriber::EnvFilter;

/// Whether `MOOD_LOG_JSON` asks for JSON log lines.
pub fn json_from_env() -> bool {
    std::env::var("MOOD_LOG_JSON")
        .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
        .unwrap_or(false)
}

/// Install the global subscriber, writing to stderr. `RUST_LOG` overrides
/// `default_filter`.
pub fn init_tracing(default_filter: &str, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
