//! Telemetry and tracing configuration.

mod tracing;

use anyhow::Context;

/// Initializes the tracing subscriber based on enabled features.
///
/// # Errors
///
/// Returns an error if the tracing subscriber fails to initialize.
pub(crate) fn init_tracing() -> anyhow::Result<()> {
    tracing::init_tracing().context("Failed to initialize tracing")
}
