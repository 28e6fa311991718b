#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for probe lifecycle events.
pub const TRACING_TARGET_PROBE: &str = "auxprobe_core::probe";

mod probe;
mod report;
mod response;

pub use probe::{Probe, execute};
pub use report::{ProbeOutcome, ProbeReport};
pub use response::ProbeResponse;
