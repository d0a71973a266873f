//! Diagnostic logging
//!
//! Tracing output goes to stderr so stdout stays free for snapshots.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber
///
/// Reads `RUST_LOG`. Defaults to `info`, or `debug` when `verbose` is set.
///
/// ```bash
/// RUST_LOG=washday_sim=trace washday --simulated
/// ```
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
