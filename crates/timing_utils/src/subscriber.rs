//! Subscriber installation
//!
//! Timing records go nowhere until a `tracing` subscriber is installed. These
//! helpers perform that one-time startup step with a `fmt` layer.

use crate::error::{TimingError, TimingResult};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a global `fmt` subscriber filtered by `RUST_LOG`.
///
/// Fails if a global subscriber has already been installed.
pub fn init_tracing() -> TimingResult<()> {
    install(EnvFilter::from_default_env())
}

/// Install a global `fmt` subscriber with explicit filter directives,
/// e.g. `"timing_utils=debug"`.
pub fn init_tracing_with_filter(directives: &str) -> TimingResult<()> {
    let filter =
        EnvFilter::try_new(directives).map_err(|e| TimingError::InvalidFilter(e.to_string()))?;
    install(filter)
}

fn install(filter: EnvFilter) -> TimingResult<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .try_init()
        .map_err(|e| TimingError::SubscriberInit(e.to_string()))?;

    tracing::debug!(target: "timing_utils", "tracing subscriber installed");
    Ok(())
}
