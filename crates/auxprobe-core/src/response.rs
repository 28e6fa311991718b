//! The response envelope returned by every probe.

use serde::{Deserialize, Serialize};

/// Result payload of a successful probe run.
///
/// Serializes as `{"body": ...}`, which is the shape the invoking
/// orchestrator expects from every probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResponse<T> {
    /// Probe-specific result.
    pub body: T,
}

impl<T> ProbeResponse<T> {
    /// Wraps a probe result into a response envelope.
    pub fn new(body: T) -> Self {
        Self { body }
    }

    /// Consumes the envelope and returns the body.
    pub fn into_body(self) -> T {
        self.body
    }
}

impl<T> From<T> for ProbeResponse<T> {
    fn from(body: T) -> Self {
        Self::new(body)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_envelope_shape() {
        let response = ProbeResponse::new(vec!["a", "b"]);
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({ "body": ["a", "b"] }));
    }

    #[test]
    fn test_into_body() {
        let response: ProbeResponse<u32> = 7.into();
        assert_eq!(response.into_body(), 7);
    }
}
