use std::time::Instant;

use diesel_async::{AsyncConnection, AsyncPgConnection};

use crate::{PgConfig, PgError, PgResult, TRACING_TARGET_CONNECTION};

/// Opens a single connection described by `config`.
///
/// The configuration is validated first. When a connect timeout is set the
/// attempt is abandoned after it elapses.
///
/// # Errors
///
/// Returns [`PgError::Config`] for an invalid configuration,
/// [`PgError::Timeout`] when the timeout elapses and
/// [`PgError::Connection`] when the server refuses the connection.
#[tracing::instrument(
    skip(config),
    target = TRACING_TARGET_CONNECTION,
    fields(database_url = %config.database_url_masked())
)]
pub async fn connect(config: &PgConfig) -> PgResult<AsyncPgConnection> {
    config.validate()?;

    tracing::info!(target: TRACING_TARGET_CONNECTION, "Establishing database connection");

    let start = Instant::now();
    let establish = AsyncPgConnection::establish(config.database_url());

    let result = match config.connect_timeout() {
        Some(timeout) => match tokio::time::timeout(timeout, establish).await {
            Ok(result) => result.map_err(PgError::from),
            Err(_) => Err(PgError::Timeout(timeout)),
        },
        None => establish.await.map_err(PgError::from),
    };

    let elapsed = start.elapsed();
    match result {
        Ok(conn) => {
            tracing::info!(
                target: TRACING_TARGET_CONNECTION,
                elapsed_ms = elapsed.as_millis() as u64,
                "Database connection established"
            );
            Ok(conn)
        }
        Err(err) => {
            tracing::error!(
                target: TRACING_TARGET_CONNECTION,
                error = %err,
                elapsed_ms = elapsed.as_millis() as u64,
                "Failed to establish database connection"
            );
            Err(err)
        }
    }
}

/// Closes a connection opened by [`connect`].
///
/// Dropping the connection terminates the session with the server.
pub fn close(conn: AsyncPgConnection) {
    drop(conn);
    tracing::debug!(target: TRACING_TARGET_CONNECTION, "Database connection closed");
}
