//! Tracing setup shared by the front ends.
//!
//! Diagnostics go to stderr so stdout stays free for report output.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins over `default_level`.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Default filter directive for the given verbosity.
pub fn level_for(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}
