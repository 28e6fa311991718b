//! Subcommand execution.
//!
//! Every command builds its probe from the parsed configuration, runs it
//! through [`auxprobe_core::execute`] and prints the response envelope.

mod minio;
mod mongo;
mod postgres;

use anyhow::Context;
use auxprobe_core::{Probe, ProbeReport};

use crate::TRACING_TARGET_PROBE;
use crate::config::{Cli, Command};
use crate::output::Output;

/// Runs the selected subcommand.
pub async fn dispatch(cli: Cli) -> anyhow::Result<()> {
    let output = Output::stdout(cli.pretty);

    match cli.command {
        Command::Minio(args) => minio::run(args, &output).await,
        Command::Postgres(args) => postgres::run(args, &output).await,
        Command::Mongo(args) => mongo::run(args, &output).await,
    }
}

/// Runs a probe, logs its report and prints the response on success.
async fn run_probe<P>(probe: &P, output: &Output) -> anyhow::Result<()>
where
    P: Probe,
{
    let (report, result) = auxprobe_core::execute(probe).await;
    log_report(&report);

    let response = result.with_context(|| format!("{} probe failed", report.probe))?;
    output.json(&response)
}

/// Logs the outcome of a probe run.
fn log_report(report: &ProbeReport) {
    tracing::info!(
        target: TRACING_TARGET_PROBE,
        probe = %report.probe,
        outcome = %report.outcome,
        started_at = %report.started_at,
        elapsed_ms = report.elapsed.as_millis() as u64,
        "Probe report"
    );
}
