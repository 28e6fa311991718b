//! Outcome reporting for probe runs.
//!
//! A [`ProbeReport`] records what happened during one invocation of a probe:
//! whether it passed, how long it took and, on failure, the error message.

use std::time::Duration;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

/// Final state of a probe run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(AsRefStr, Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ProbeOutcome {
    /// Every operation against the service succeeded.
    #[default]
    Passed,
    /// At least one operation failed.
    Failed,
}

/// Summary of a single probe invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeReport {
    /// Name of the probe that ran.
    pub probe: String,
    /// Final state.
    pub outcome: ProbeOutcome,
    /// Wall-clock duration of the run.
    pub elapsed: Duration,
    /// Error message when the run failed.
    pub message: Option<String>,
    /// When the run started.
    pub started_at: Timestamp,
}

impl ProbeReport {
    /// Creates a report for a run that passed.
    pub fn passed(probe: impl Into<String>, started_at: Timestamp, elapsed: Duration) -> Self {
        Self {
            probe: probe.into(),
            outcome: ProbeOutcome::Passed,
            elapsed,
            message: None,
            started_at,
        }
    }

    /// Creates a report for a run that failed.
    pub fn failed(
        probe: impl Into<String>,
        started_at: Timestamp,
        elapsed: Duration,
        message: impl Into<String>,
    ) -> Self {
        Self {
            probe: probe.into(),
            outcome: ProbeOutcome::Failed,
            elapsed,
            message: Some(message.into()),
            started_at,
        }
    }

    /// Returns whether the run passed.
    #[inline]
    pub fn is_passed(&self) -> bool {
        self.outcome == ProbeOutcome::Passed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passed_report() {
        let report = ProbeReport::passed("minio", Timestamp::now(), Duration::from_millis(12));
        assert!(report.is_passed());
        assert!(report.message.is_none());
        assert_eq!(report.outcome.as_ref(), "passed");
    }

    #[test]
    fn test_failed_report() {
        let report = ProbeReport::failed(
            "postgres",
            Timestamp::now(),
            Duration::from_millis(3),
            "connection refused",
        );
        assert!(!report.is_passed());
        assert_eq!(report.message.as_deref(), Some("connection refused"));
        assert_eq!(report.outcome.to_string(), "failed");
    }
}
