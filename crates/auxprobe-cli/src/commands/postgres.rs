use anyhow::Context;
use auxprobe_postgres::{PgExec, PgProbe, SqlCommand};

use crate::config::PostgresArgs;
use crate::output::Output;

/// Runs the table round-trip, or the given command under `exec`.
pub(super) async fn run(args: PostgresArgs, output: &Output) -> anyhow::Result<()> {
    let command = args
        .exec_command()
        .map(SqlCommand::new)
        .transpose()
        .context("invalid SQL command")?;

    match command {
        Some(command) => super::run_probe(&PgExec::new(args.config, command), output).await,
        None => super::run_probe(&PgProbe::new(args.config), output).await,
    }
}
