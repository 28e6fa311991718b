//! Row types read by the probes.

use diesel::QueryableByName;
use diesel::sql_types::{Nullable, Uuid as SqlUuid, Varchar};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of the scratch table used by the smoke test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, QueryableByName)]
pub struct MessageRow {
    /// Primary key generated by `gen_random_uuid()`.
    #[diesel(sql_type = SqlUuid)]
    pub id: Uuid,

    /// Message text.
    #[diesel(sql_type = Nullable<Varchar>)]
    pub message: Option<String>,
}
