//! CLI configuration management.
//!
//! This module defines the complete CLI configuration hierarchy:
//!
//! ```text
//! Cli
//! ├── pretty: bool                   # Indented JSON output
//! └── command: Command
//!     ├── Minio(MinioArgs)           # Endpoint, credentials, smoke | ls
//!     ├── Postgres(PostgresArgs)     # Connection URL, smoke | exec
//!     └── Mongo(MongoArgs)           # render | apply user-management script
//! ```
//!
//! All configuration can be provided via CLI arguments or environment variables.
//! Use `--help` to see all available options.
//!
//! # Example
//!
//! ```bash
//! # Configure MinIO via arguments
//! auxprobe minio --minio-host localhost --minio-access-key minio --minio-secret-key minio123
//!
//! # Or via environment variables
//! POSTGRES_URL="postgresql://..." auxprobe postgres smoke
//! ```

mod minio;
mod mongo;
mod postgres;

use std::process;

use clap::{Parser, Subcommand};
pub use minio::{MinioAction, MinioArgs};
pub use mongo::{MongoAction, MongoArgs};
pub use postgres::PostgresArgs;

use crate::{TRACING_TARGET_CONFIG, TRACING_TARGET_STARTUP};

/// Complete CLI configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "auxprobe")]
#[command(about = "Smoke tests for the MinIO, Postgres and MongoDB services")]
#[command(version)]
pub struct Cli {
    /// Print the response as indented JSON.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Service to probe.
    #[command(subcommand)]
    pub command: Command,
}

/// Available probes.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Ensure a bucket exists and list all buckets, or list bucket content.
    Minio(MinioArgs),
    /// Run the table round-trip or an arbitrary SQL command.
    Postgres(PostgresArgs),
    /// Render or apply the user-management script.
    Mongo(MongoArgs),
}

impl Command {
    /// Returns the name of the selected service.
    pub fn service(&self) -> &'static str {
        match self {
            Self::Minio(_) => "minio",
            Self::Postgres(_) => "postgres",
            Self::Mongo(_) => "mongo",
        }
    }
}

impl Cli {
    /// Loads environment variables from .env file (if enabled) and parses CLI arguments.
    ///
    /// The .env file is loaded before clap parses arguments, so its values
    /// act as defaults for every `env` fallback.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    /// Loads environment variables from .env file if the dotenv feature is enabled.
    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    /// No-op when dotenv feature is disabled.
    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Logs build information at debug level.
    fn log_build_info() {
        tracing::debug!(
            target: TRACING_TARGET_STARTUP,
            version = env!("CARGO_PKG_VERSION"),
            pid = process::id(),
            arch = std::env::consts::ARCH,
            os = std::env::consts::OS,
            features = ?Self::enabled_features(),
            "Build information"
        );
    }

    /// Logs configuration (no sensitive information).
    pub fn log(&self) {
        Self::log_build_info();

        match &self.command {
            Command::Minio(args) => args.log(),
            Command::Postgres(args) => args.log(),
            Command::Mongo(args) => args.log(),
        }

        tracing::debug!(
            target: TRACING_TARGET_CONFIG,
            service = self.command.service(),
            pretty = self.pretty,
            "Output configuration"
        );
    }

    /// Returns a list of enabled compile-time features.
    fn enabled_features() -> Vec<&'static str> {
        [
            cfg!(feature = "dotenv").then_some("dotenv"),
            cfg!(feature = "json-logs").then_some("json-logs"),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_pretty_is_global() {
        let cli = Cli::try_parse_from([
            "auxprobe",
            "postgres",
            "--postgres-url",
            "postgresql://u:p@localhost/db",
            "--pretty",
        ])
        .unwrap();
        assert!(cli.pretty);
        assert_eq!(cli.command.service(), "postgres");
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["auxprobe"]).is_err());
    }
}
