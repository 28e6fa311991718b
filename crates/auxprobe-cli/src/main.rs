#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod commands;
mod config;
mod output;
mod telemetry;

use std::process;

use crate::config::Cli;

// Tracing target constants
pub const TRACING_TARGET_STARTUP: &str = "auxprobe_cli::startup";
pub const TRACING_TARGET_SHUTDOWN: &str = "auxprobe_cli::shutdown";
pub const TRACING_TARGET_CONFIG: &str = "auxprobe_cli::config";
pub const TRACING_TARGET_PROBE: &str = "auxprobe_cli::probe";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        tracing::info!(
            target: TRACING_TARGET_SHUTDOWN,
            "probe completed successfully"
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SHUTDOWN,
            error = %format!("{error:#}"),
            "probe terminated with error"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::init();

    telemetry::init_tracing()?;
    log_startup_info(&cli);
    cli.log();

    commands::dispatch(cli).await
}

/// Logs startup information.
fn log_startup_info(cli: &Cli) {
    tracing::info!(
        target: TRACING_TARGET_STARTUP,
        version = env!("CARGO_PKG_VERSION"),
        service = cli.command.service(),
        "starting auxprobe"
    );
}
