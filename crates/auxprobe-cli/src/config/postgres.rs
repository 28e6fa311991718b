//! Postgres probe configuration.

use auxprobe_postgres::PgConfig;
use clap::{Args, Subcommand};

use crate::TRACING_TARGET_CONFIG;

/// Arguments of the `postgres` subcommand.
#[derive(Debug, Clone, Args)]
pub struct PostgresArgs {
    /// Connection settings.
    #[command(flatten)]
    pub config: PgConfig,

    /// What to run; defaults to the table round-trip.
    #[command(subcommand)]
    pub action: Option<PostgresAction>,
}

/// Postgres operations.
#[derive(Debug, Clone, Subcommand)]
pub enum PostgresAction {
    /// Create a scratch table, insert a row, read it back and drop the table.
    Smoke,
    /// Run a single SQL command.
    Exec {
        /// Command to run; queries return their rows as JSON objects.
        #[arg(long)]
        command: String,
    },
}

impl PostgresArgs {
    /// Returns the SQL command when `exec` was selected.
    pub fn exec_command(&self) -> Option<&str> {
        match &self.action {
            Some(PostgresAction::Exec { command }) => Some(command),
            Some(PostgresAction::Smoke) | None => None,
        }
    }

    /// Logs the configuration with the password masked.
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            database_url = %self.config.database_url_masked(),
            connect_timeout_secs = ?self.config.postgres_connect_timeout_secs,
            action = if self.exec_command().is_some() { "exec" } else { "smoke" },
            "Postgres configuration"
        );
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::config::{Cli, Command};

    fn parse(args: &[&str]) -> PostgresArgs {
        let base = ["auxprobe", "postgres", "--dburi", "postgresql://u:p@localhost/db"];
        let cli = Cli::try_parse_from(base.iter().chain(args)).unwrap();
        match cli.command {
            Command::Postgres(args) => args,
            other => panic!("unexpected subcommand: {other:?}"),
        }
    }

    #[test]
    fn test_default_action_is_smoke() {
        let args = parse(&[]);
        assert!(args.action.is_none());
        assert_eq!(args.exec_command(), None);
        assert_eq!(parse(&["smoke"]).exec_command(), None);
        assert_eq!(args.config.database_url(), "postgresql://u:p@localhost/db");
    }

    #[test]
    fn test_exec_action() {
        let args = parse(&["exec", "--command", "select 1"]);
        assert_eq!(args.exec_command(), Some("select 1"));
    }
}
