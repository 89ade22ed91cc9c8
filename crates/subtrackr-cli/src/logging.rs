//! Diagnostic logging to stderr.

use tracing_subscriber::EnvFilter;

use crate::constants::LOG_ENV;

/// Install the global subscriber.
///
/// `--verbose` turns on debug output; otherwise the filter comes from
/// SUBTRACKR_LOG, falling back to warnings only.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
