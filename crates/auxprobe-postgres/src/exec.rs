//! Ad hoc SQL execution.
//!
//! Commands that mention `select` are run as queries and their rows are
//! returned as JSON objects; anything else runs as a statement and reports
//! the number of affected rows.

use async_trait::async_trait;
use auxprobe_core::Probe;
use diesel::QueryableByName;
use diesel::sql_types::Json;
use diesel_async::AsyncPgConnection;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{PgConfig, PgError, PgResult, TRACING_TARGET_QUERY, client};

/// A single SQL command supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlCommand(String);

impl SqlCommand {
    /// Wraps a single statement, dropping surrounding whitespace and
    /// semicolons.
    ///
    /// # Errors
    ///
    /// Returns [`PgError::Config`] when the text holds no statement or more
    /// than one.
    pub fn new(command: impl AsRef<str>) -> PgResult<Self> {
        let mut statements = split_statements(command.as_ref())
            .into_iter()
            .filter(|statement| has_code(statement));

        let Some(statement) = statements.next() else {
            return Err(PgError::Config("SQL command cannot be empty".to_string()));
        };

        if statements.next().is_some() {
            return Err(PgError::Config(
                "SQL command must contain a single statement".to_string(),
            ));
        }

        Ok(Self(statement.trim().to_owned()))
    }

    /// Returns whether the command should be run as a row-returning query.
    pub fn is_query(&self) -> bool {
        self.0.to_lowercase().contains("select")
    }

    /// Returns the command text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Wraps the query so the server aggregates every row into one JSON array.
    ///
    /// The closing parenthesis goes on its own line so a trailing `--`
    /// comment cannot swallow it.
    fn as_json_query(&self) -> String {
        format!(
            "SELECT coalesce(json_agg(q), '[]'::json) AS result FROM ({}\n) AS q",
            self.0
        )
    }
}

/// Splits `sql` at semicolons outside quotes and comments.
fn split_statements(sql: &str) -> Vec<&str> {
    let bytes = sql.as_bytes();
    let mut statements = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\'' | b'"' => i = skip_quoted(bytes, i),
            b'-' if bytes.get(i + 1) == Some(&b'-') => i = skip_line_comment(bytes, i),
            b'/' if bytes.get(i + 1) == Some(&b'*') => i = skip_block_comment(bytes, i),
            b'$' => i = skip_dollar_quoted(bytes, i),
            b';' => {
                statements.push(&sql[start..i]);
                i += 1;
                start = i;
            }
            _ => i += 1,
        }
    }

    statements.push(&sql[start..]);
    statements
}

/// Returns whether a statement holds anything besides whitespace and comments.
fn has_code(statement: &str) -> bool {
    let bytes = statement.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'-' if bytes.get(i + 1) == Some(&b'-') => i = skip_line_comment(bytes, i),
            b'/' if bytes.get(i + 1) == Some(&b'*') => i = skip_block_comment(bytes, i),
            byte if byte.is_ascii_whitespace() => i += 1,
            _ => return true,
        }
    }

    false
}

/// Skips a quoted literal or identifier; doubled quotes are escapes.
fn skip_quoted(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut i = start + 1;

    while i < bytes.len() {
        if bytes[i] == quote {
            if bytes.get(i + 1) == Some(&quote) {
                i += 2;
                continue;
            }
            return i + 1;
        }
        i += 1;
    }

    bytes.len()
}

fn skip_line_comment(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(bytes.len(), |pos| start + pos + 1)
}

fn skip_block_comment(bytes: &[u8], start: usize) -> usize {
    bytes[start + 2..]
        .windows(2)
        .position(|w| w == b"*/")
        .map_or(bytes.len(), |pos| start + 2 + pos + 2)
}

/// Skips a `$tag$ ... $tag$` body; a lone `$` (as in `$1`) is skipped alone.
fn skip_dollar_quoted(bytes: &[u8], start: usize) -> usize {
    let mut end = start + 1;
    while end < bytes.len() && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_') {
        end += 1;
    }

    if bytes.get(end) != Some(&b'$') || bytes.get(start + 1).is_some_and(u8::is_ascii_digit) {
        return start + 1;
    }

    let tag = &bytes[start..=end];
    bytes[end + 1..]
        .windows(tag.len())
        .position(|w| w == tag)
        .map_or(bytes.len(), |pos| end + 1 + pos + tag.len())
}

/// Result of an executed command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExecOutput {
    /// Rows returned by a query, one JSON object per row.
    Rows(Vec<Value>),
    /// Rows affected by a statement.
    Statement {
        /// Number of affected rows.
        affected_rows: usize,
    },
}

#[derive(QueryableByName)]
struct JsonRows {
    #[diesel(sql_type = Json)]
    result: Value,
}

/// Runs one SQL command over a fresh connection.
#[derive(Debug, Clone)]
pub struct PgExec {
    config: PgConfig,
    command: SqlCommand,
}

impl PgExec {
    /// Creates an executor for a command.
    pub fn new(config: PgConfig, command: SqlCommand) -> Self {
        Self { config, command }
    }

    /// Connects, executes the command and closes the connection.
    ///
    /// # Errors
    ///
    /// Returns the connection error or the command's error. The connection
    /// is closed before returning in both cases.
    #[tracing::instrument(skip(self), target = TRACING_TARGET_QUERY, fields(query = self.command.is_query()))]
    pub async fn execute(&self) -> PgResult<ExecOutput> {
        let mut conn = client::connect(&self.config).await?;

        let result = self.run_command(&mut conn).await;
        if let Err(err) = &result {
            tracing::error!(
                target: TRACING_TARGET_QUERY,
                error = %err,
                "Could not execute SQL command"
            );
        }

        client::close(conn);
        result
    }

    async fn run_command(&self, conn: &mut AsyncPgConnection) -> PgResult<ExecOutput> {
        use diesel_async::RunQueryDsl;

        if self.command.is_query() {
            let rows: JsonRows = diesel::sql_query(self.command.as_json_query())
                .get_result(conn)
                .await?;

            let rows = match rows.result {
                Value::Array(rows) => rows,
                other => vec![other],
            };

            tracing::info!(target: TRACING_TARGET_QUERY, rows = rows.len(), "Query executed");
            Ok(ExecOutput::Rows(rows))
        } else {
            let affected_rows = diesel::sql_query(self.command.as_str())
                .execute(conn)
                .await?;

            tracing::info!(target: TRACING_TARGET_QUERY, affected_rows, "Statement executed");
            Ok(ExecOutput::Statement { affected_rows })
        }
    }
}

#[async_trait]
impl Probe for PgExec {
    type Error = PgError;
    type Output = ExecOutput;

    fn name(&self) -> &'static str {
        "postgres-exec"
    }

    async fn run(&self) -> Result<Self::Output, Self::Error> {
        self.execute().await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_command_classification() {
        assert!(SqlCommand::new("SELECT * FROM t").unwrap().is_query());
        assert!(SqlCommand::new("  select 1;").unwrap().is_query());
        assert!(!SqlCommand::new("CREATE TABLE t (id int)").unwrap().is_query());
        assert!(!SqlCommand::new("DELETE FROM t").unwrap().is_query());
    }

    #[test]
    fn test_command_trimming() {
        let command = SqlCommand::new("  SELECT 1 ;; \n").unwrap();
        assert_eq!(command.as_str(), "SELECT 1");
        assert_eq!(
            command.as_json_query(),
            "SELECT coalesce(json_agg(q), '[]'::json) AS result FROM (SELECT 1\n) AS q"
        );
    }

    #[test]
    fn test_empty_command_rejected() {
        assert!(matches!(SqlCommand::new(" ; "), Err(PgError::Config(_))));
        assert!(matches!(SqlCommand::new("-- nothing\n;"), Err(PgError::Config(_))));
    }

    #[test]
    fn test_trailing_line_comment() {
        let command = SqlCommand::new("select 1 as one -- check").unwrap();
        assert_eq!(command.as_str(), "select 1 as one -- check");
        assert!(
            command
                .as_json_query()
                .ends_with("FROM (select 1 as one -- check\n) AS q")
        );
    }

    #[test]
    fn test_multiple_statements_rejected() {
        let err = SqlCommand::new("select 1; select 2").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: SQL command must contain a single statement"
        );

        let command = SqlCommand::new("select 1; -- done\n").unwrap();
        assert_eq!(command.as_str(), "select 1");
    }

    #[test]
    fn test_semicolons_inside_literals() {
        let quoted = SqlCommand::new("select ';' as a, 'it''s; fine' as b").unwrap();
        assert_eq!(quoted.as_str(), "select ';' as a, 'it''s; fine' as b");

        let ident = SqlCommand::new(r#"select 1 as "a;b""#).unwrap();
        assert!(ident.is_query());

        let block = SqlCommand::new("select /* a; b */ 1").unwrap();
        assert_eq!(block.as_str(), "select /* a; b */ 1");

        let body = "do $fn$ begin perform 1; end $fn$";
        assert_eq!(SqlCommand::new(body).unwrap().as_str(), body);

        let param = SqlCommand::new("select $1; select $2");
        assert!(param.is_err());
    }

    #[test]
    fn test_output_shapes() {
        let rows = ExecOutput::Rows(vec![json!({ "id": 1 })]);
        assert_eq!(serde_json::to_value(&rows).unwrap(), json!([{ "id": 1 }]));

        let statement = ExecOutput::Statement { affected_rows: 3 };
        assert_eq!(
            serde_json::to_value(&statement).unwrap(),
            json!({ "affected_rows": 3 })
        );
    }

    #[tokio::test]
    #[ignore] // Requires running Postgres instance at POSTGRES_URL
    async fn test_execute_commented_query() {
        let url = std::env::var("POSTGRES_URL").expect("POSTGRES_URL must be set");
        let command = SqlCommand::new("select 1 as one -- check").unwrap();

        let output = PgExec::new(PgConfig::new(url), command).execute().await.unwrap();
        assert_eq!(output, ExecOutput::Rows(vec![json!({ "one": 1 })]));
    }
}
