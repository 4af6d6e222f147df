//! Development-time tracing for the console binary.
//!
//! Diagnostics go to stderr so they never interleave with the game's
//! stdout transcript, which is a byte-for-byte contract.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`, defaulting to `warn` when unset.
///
/// # Example
/// ```bash
/// RUST_LOG=tictactoe=debug cargo run
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
