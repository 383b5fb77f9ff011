//! Log subscriber installation.
//!
//! The library only emits `tracing` events; hosts decide whether and how to
//! collect them. This is the default setup for hosts that have none.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Install a formatting subscriber filtered by `RUST_LOG`, falling back to
/// `default_filter`.
///
/// Fails instead of panicking when a global subscriber is already set.
pub fn init_logging(default_filter: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| anyhow!("Invalid log filter {:?}: {}", default_filter, e))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))
}
