//! Tracing initialization and configuration.

use std::io;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

/// Initializes the tracing subscriber for structured logging.
///
/// Logs are written to stderr so that stdout carries only the probe
/// response.
///
/// # Configuration
///
/// The log level can be configured via the `RUST_LOG` environment variable.
/// If not set, defaults to `info` level.
///
/// # Examples
///
/// ```bash
/// RUST_LOG=debug auxprobe minio
/// RUST_LOG=auxprobe_postgres=trace auxprobe postgres smoke
/// ```
///
/// # Errors
///
/// Returns an error if the tracing subscriber fails to initialize.
pub(super) fn init_tracing() -> anyhow::Result<()> {
    let env_filter = create_env_filter()?;
    let fmt_layer = create_fmt_layer();

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    Ok(())
}

/// Creates an environment filter for tracing.
fn create_env_filter() -> anyhow::Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| anyhow::anyhow!("Failed to create env filter: {e}"))
}

/// Creates a formatted tracing layer writing to stderr.
#[cfg(not(feature = "json-logs"))]
fn create_fmt_layer() -> impl Layer<Registry> + Send + Sync {
    fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_ansi(io::IsTerminal::is_terminal(&io::stderr()))
}

/// Creates a JSON tracing layer writing to stderr.
#[cfg(feature = "json-logs")]
fn create_fmt_layer() -> impl Layer<Registry> + Send + Sync {
    fmt::layer()
        .json()
        .with_writer(io::stderr)
        .with_target(true)
        .with_current_span(false)
}
