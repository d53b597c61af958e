//! Development-time tracing for debugging a race run.
//!
//! Diagnostics go to stderr and are filtered by `RUST_LOG`; the race
//! transcript on stdout is product output and never passes through
//! here.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`, defaulting to `warn` when unset. Output: stderr,
/// compact format.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
