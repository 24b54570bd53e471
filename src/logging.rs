use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::stderr_buffer::BufferedStderr;

/// Environment variable that overrides the log filter (same syntax as RUST_LOG)
pub const LOG_ENV: &str = "FITCHECK_LOG";

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "fitcheck=debug"
    } else {
        "warn"
    }
}

/// Install the global tracing subscriber.
///
/// Output goes through the stderr buffer so nothing is written over the TUI
/// while it owns the terminal.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(|| BufferedStderr)
        .try_init();
}
