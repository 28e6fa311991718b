//! Response printing.
//!
//! Stdout carries only the response; everything else is logged to stderr.

use std::io::{self, Write};

use anyhow::Context;
use serde::Serialize;

/// Prints responses to stdout.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pretty: bool,
}

impl Output {
    /// Creates an output that prints to stdout.
    pub fn stdout(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Serializes a value to JSON, indented when `pretty` is set.
    pub fn render<T: Serialize + ?Sized>(&self, value: &T) -> anyhow::Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        rendered.context("failed to serialize response")
    }

    /// Prints a value as a single JSON document.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> anyhow::Result<()> {
        let rendered = self.render(value)?;
        self.text(&rendered)
    }

    /// Prints text followed by a newline unless it already ends with one.
    pub fn text(&self, text: &str) -> anyhow::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        if !text.ends_with('\n') {
            stdout.write_all(b"\n")?;
        }
        stdout.flush().context("failed to write to stdout")
    }
}

#[cfg(test)]
mod tests {
    use auxprobe_core::ProbeResponse;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_render_compact() {
        let response = ProbeResponse::new(json!({"buckets": []}));
        let rendered = Output::stdout(false).render(&response).unwrap();
        assert_eq!(rendered, r#"{"body":{"buckets":[]}}"#);
    }

    #[test]
    fn test_render_pretty() {
        let response = ProbeResponse::new(vec![1, 2]);
        let rendered = Output::stdout(true).render(&response).unwrap();
        assert!(rendered.contains('\n'));
        assert!(rendered.starts_with("{\n  \"body\": ["));
    }
}
