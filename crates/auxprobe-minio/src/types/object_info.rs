//! Object information returned by a bucket content listing.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Information about an object stored in a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectInfo {
    /// Object key.
    pub name: String,
    /// Object size in bytes.
    pub size: u64,
    /// Last modification time, as reported by the server.
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified: Option<OffsetDateTime>,
    /// Entity tag of the object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
}

impl ObjectInfo {
    /// Creates a new ObjectInfo.
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            last_modified: None,
            etag: None,
        }
    }

    /// Sets the last modification time from a unix timestamp in seconds.
    ///
    /// Out-of-range timestamps leave the time unset.
    pub fn with_last_modified_timestamp(mut self, unix_seconds: i64) -> Self {
        self.last_modified = OffsetDateTime::from_unix_timestamp(unix_seconds).ok();
        self
    }

    /// Sets the entity tag.
    pub fn with_etag(mut self, etag: impl Into<String>) -> Self {
        self.etag = Some(etag.into());
        self
    }
}
