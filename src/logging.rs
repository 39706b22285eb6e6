//! Diagnostics for the wrapper itself, written to stderr via `tracing`.
//!
//! Salt's own log level is controlled separately by `-q`.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Overrides the filter directive, e.g. `STATE_LOG=debug`.
pub const LOG_ENV: &str = "STATE_LOG";

/// Pick the filter directive: the environment wins, then `-d`, then `warn`.
pub fn filter_directive(debug: bool, env: Option<&str>) -> String {
    match env.map(str::trim).filter(|s| !s.is_empty()) {
        Some(directive) => directive.to_string(),
        None if debug => "debug".to_string(),
        None => "warn".to_string(),
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(debug: bool) {
    let env = std::env::var(LOG_ENV).ok();
    let directive = filter_directive(debug, env.as_deref());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
