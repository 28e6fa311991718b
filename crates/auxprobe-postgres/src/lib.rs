#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

// Tracing target constants for consistent logging.

/// Tracing target for database connection operations.
///
/// Use this target for logging connection establishment and teardown.
pub const TRACING_TARGET_CONNECTION: &str = "auxprobe_postgres::connection";

/// Tracing target for database query operations.
///
/// Use this target for logging query execution, results, and query-related errors.
pub const TRACING_TARGET_QUERY: &str = "auxprobe_postgres::queries";

mod client;
mod exec;
mod model;
mod smoke;

use std::time::Duration;

use diesel::ConnectionError;
use diesel::result::Error;
pub use diesel_async::AsyncPgConnection as PgConnection;

pub use crate::client::{PgConfig, close, connect};
pub use crate::exec::{ExecOutput, PgExec, SqlCommand};
pub use crate::model::MessageRow;
pub use crate::smoke::{PgProbe, SMOKE_MESSAGE, SMOKE_TABLE};

/// Error type for PostgreSQL probe operations.
#[derive(Debug, thiserror::Error)]
#[must_use = "database errors should be handled appropriately"]
pub enum PgError {
    /// Configuration error.
    ///
    /// This includes an empty connection string or an out-of-range timeout.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Connection establishment did not finish in time.
    #[error("Database connection timed out after {0:?}")]
    Timeout(Duration),

    /// Failed to establish a database connection.
    ///
    /// This includes authentication failures, network issues, and invalid
    /// connection parameters.
    #[error("Database connection error: {0}")]
    Connection(#[from] ConnectionError),

    /// Database query execution failed.
    ///
    /// This includes SQL syntax errors, constraint violations, type mismatches,
    /// and other query-related failures.
    #[error("Database query error: {0}")]
    Query(#[from] Error),
}

impl PgError {
    /// Returns whether this error indicates a transient failure that might succeed on retry.
    ///
    /// The probes never retry; callers use this to phrase their report.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            PgError::Timeout(_) | PgError::Connection(ConnectionError::BadConnection(_))
        )
    }

    /// Returns whether this error indicates a permanent failure that won't succeed on retry.
    pub fn is_permanent(&self) -> bool {
        !self.is_transient()
    }
}

/// Specialized [`Result`] type for database operations.
pub type PgResult<T, E = PgError> = Result<T, E>;
