//! Tracing subscriber initialization.
//!
//! Embedding processes that already install their own subscriber can skip this entirely;
//! handler spans and events flow to whatever subscriber is active.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize tracing with an env-filtered fmt layer.
///
/// The filter honors `RUST_LOG`, defaulting to `info`. Calling this when a subscriber is
/// already installed is a no-op.
pub fn init_telemetry() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
