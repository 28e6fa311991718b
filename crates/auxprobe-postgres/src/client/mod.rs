//! Single-connection PostgreSQL client.
//!
//! Every probe invocation owns exactly one connection: [`connect`] opens it
//! and [`close`] releases it. There is no pool.

mod pg_config;
mod pg_connection;

pub use pg_config::PgConfig;
pub use pg_connection::{close, connect};
