//! Create, insert, select and drop against a scratch table.

use async_trait::async_trait;
use auxprobe_core::Probe;
use diesel::sql_types::Varchar;
use diesel_async::{AsyncPgConnection, RunQueryDsl, SimpleAsyncConnection};

use crate::{MessageRow, PgConfig, PgError, PgResult, TRACING_TARGET_QUERY, client};

/// Scratch table created and dropped by every run.
pub const SMOKE_TABLE: &str = "nuvolaris_table";

/// Message inserted into the scratch table.
pub const SMOKE_MESSAGE: &str = "Nuvolaris Postgres is up and running!";

const CREATE_TABLE: &str = r#"
CREATE EXTENSION IF NOT EXISTS "pgcrypto";
CREATE TABLE IF NOT EXISTS nuvolaris_table (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    message varchar(100)
);
"#;

const INSERT_MESSAGE: &str = "INSERT INTO nuvolaris_table(message) VALUES($1)";
const SELECT_MESSAGES: &str = "SELECT * FROM nuvolaris_table";
const DROP_TABLE: &str = "DROP TABLE nuvolaris_table";

/// Postgres smoke test.
///
/// A successful run leaves no table behind. A failed run may leave the
/// scratch table in place; the next run reuses it.
#[derive(Debug, Clone)]
pub struct PgProbe {
    config: PgConfig,
}

impl PgProbe {
    /// Creates a probe for the given connection configuration.
    pub fn new(config: PgConfig) -> Self {
        Self { config }
    }

    /// Connects, runs the table round trip and closes the connection.
    ///
    /// # Errors
    ///
    /// Returns the connection error or the first failing statement's error.
    /// The connection is closed before returning in both cases.
    #[tracing::instrument(skip(self), target = TRACING_TARGET_QUERY)]
    pub async fn check(&self) -> PgResult<Vec<MessageRow>> {
        let mut conn = client::connect(&self.config).await?;

        let result = round_trip(&mut conn).await;
        if let Err(err) = &result {
            tracing::error!(
                target: TRACING_TARGET_QUERY,
                error = %err,
                "Smoke test query failed"
            );
        }

        client::close(conn);
        result
    }
}

async fn round_trip(conn: &mut AsyncPgConnection) -> PgResult<Vec<MessageRow>> {
    conn.batch_execute(CREATE_TABLE).await?;
    tracing::debug!(target: TRACING_TARGET_QUERY, table = SMOKE_TABLE, "Scratch table ready");

    diesel::sql_query(INSERT_MESSAGE)
        .bind::<Varchar, _>(SMOKE_MESSAGE)
        .execute(conn)
        .await?;

    let rows: Vec<MessageRow> = diesel::sql_query(SELECT_MESSAGES).load(conn).await?;
    tracing::info!(
        target: TRACING_TARGET_QUERY,
        table = SMOKE_TABLE,
        rows = rows.len(),
        "Selected scratch rows"
    );

    diesel::sql_query(DROP_TABLE).execute(conn).await?;
    tracing::debug!(target: TRACING_TARGET_QUERY, table = SMOKE_TABLE, "Scratch table dropped");

    Ok(rows)
}

#[async_trait]
impl Probe for PgProbe {
    type Error = PgError;
    type Output = Vec<MessageRow>;

    fn name(&self) -> &'static str {
        "postgres"
    }

    async fn run(&self) -> Result<Self::Output, Self::Error> {
        self.check().await
    }
}
