#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

// Tracing target constants for consistent logging
pub const TRACING_TARGET_SCRIPT: &str = "auxprobe_mongo::script";
pub const TRACING_TARGET_SHELL: &str = "auxprobe_mongo::shell";

mod mode;
mod params;
mod probe;
mod script;
mod shell;

pub use crate::mode::UserMode;
pub use crate::params::{DEFAULT_HOST, DEFAULT_PORT, ManageUserParams};
pub use crate::probe::{ManageUserReport, MongoUserProbe};
pub use crate::script::{MongoScript, SEED_COLLECTION, SEED_MESSAGE};
pub use crate::shell::{DEFAULT_SHELL, MongoShell, ShellOutput};

/// Error type for MongoDB script operations.
#[derive(Debug, thiserror::Error)]
#[must_use = "errors should be handled appropriately"]
pub enum Error {
    /// The requested mode is neither `create` nor `delete`.
    #[error("Unknown user management mode '{0}', expected 'create' or 'delete'")]
    UnknownMode(String),

    /// A required parameter is missing or empty.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The shell ran but exited unsuccessfully.
    #[error("Mongo shell exited with {}: {stderr}", code.map_or_else(|| "signal".to_string(), |c| format!("status {c}")))]
    Shell {
        /// Exit code, absent when the process was killed by a signal.
        code: Option<i32>,
        /// Captured standard error.
        stderr: String,
    },

    /// Spooling the script or spawning the shell failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns whether the error was raised before anything was executed.
    pub fn is_rejected_input(&self) -> bool {
        matches!(self, Error::UnknownMode(_) | Error::InvalidParameter(_))
    }
}

/// Specialized [`Result`] type for MongoDB script operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_error_message() {
        let err = Error::Shell {
            code: Some(2),
            stderr: "auth failed".to_string(),
        };
        assert_eq!(err.to_string(), "Mongo shell exited with status 2: auth failed");
        assert!(!err.is_rejected_input());

        let killed = Error::Shell {
            code: None,
            stderr: String::new(),
        };
        assert!(killed.to_string().contains("signal"));
    }

    #[test]
    fn test_rejected_input() {
        assert!(Error::UnknownMode("purge".to_string()).is_rejected_input());
        assert!(Error::InvalidParameter("subject".to_string()).is_rejected_input());
    }
}
