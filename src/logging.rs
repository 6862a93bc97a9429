//! Diagnostics setup
//!
//! Stdout carries the launcher feedback, so log events always go to stderr.

use tracing_subscriber::EnvFilter;

/// Default filter directive for the given verbosity flags
pub fn default_directive(verbose: bool, quiet: bool) -> &'static str {
    match (verbose, quiet) {
        (true, _) => "debug",
        (false, true) => "error",
        (false, false) => "warn",
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over the flags.
pub fn init(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    // A subscriber may already be installed (e.g. by a test harness)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
