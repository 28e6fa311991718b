//! The probe abstraction shared by all service probes.

use std::time::Instant;

use async_trait::async_trait;
use jiff::Timestamp;
use serde::Serialize;

use crate::{ProbeReport, ProbeResponse, TRACING_TARGET_PROBE};

/// A smoke test against a single external service.
///
/// Implementations open one connection, run a short fixed sequence of
/// operations and return a serializable result. They must not retry.
#[async_trait]
pub trait Probe: Send + Sync {
    /// Result produced by a successful run.
    type Output: Serialize + Send;

    /// Error produced by a failed run.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Runs the probe to completion.
    async fn run(&self) -> Result<Self::Output, Self::Error>;
}

/// Runs a probe, logs its outcome and wraps the result in a [`ProbeResponse`].
///
/// The returned [`ProbeReport`] is produced for both outcomes; the error, if
/// any, is passed through untouched.
pub async fn execute<P>(probe: &P) -> (ProbeReport, Result<ProbeResponse<P::Output>, P::Error>)
where
    P: Probe + ?Sized,
{
    let name = probe.name();
    let started_at = Timestamp::now();
    let start = Instant::now();

    tracing::info!(target: TRACING_TARGET_PROBE, probe = name, "Starting probe");

    let result = probe.run().await;
    let elapsed = start.elapsed();

    match result {
        Ok(output) => {
            tracing::info!(
                target: TRACING_TARGET_PROBE,
                probe = name,
                elapsed = ?elapsed,
                "Probe passed"
            );
            let report = ProbeReport::passed(name, started_at, elapsed);
            (report, Ok(ProbeResponse::new(output)))
        }
        Err(error) => {
            tracing::error!(
                target: TRACING_TARGET_PROBE,
                probe = name,
                error = %error,
                elapsed = ?elapsed,
                "Probe failed"
            );
            let report = ProbeReport::failed(name, started_at, elapsed, error.to_string());
            (report, Err(error))
        }
    }
}
