//! Bucket information returned by a bucket listing.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Information about a MinIO bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketInfo {
    /// Bucket name.
    pub name: String,
    /// Bucket creation date, as reported by the server.
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_date: Option<OffsetDateTime>,
}

impl BucketInfo {
    /// Creates a new BucketInfo.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            creation_date: None,
        }
    }

    /// Sets the creation date.
    pub fn with_creation_date(mut self, creation_date: OffsetDateTime) -> Self {
        self.creation_date = Some(creation_date);
        self
    }

    /// Sets the creation date from a unix timestamp in seconds.
    ///
    /// Out-of-range timestamps leave the creation date unset.
    pub fn with_creation_timestamp(mut self, unix_seconds: i64) -> Self {
        self.creation_date = OffsetDateTime::from_unix_timestamp(unix_seconds).ok();
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::macros::datetime;

    use super::*;

    #[test]
    fn test_serialize_with_date() {
        let info = BucketInfo::new("data").with_creation_date(datetime!(2024-05-01 10:00 UTC));
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(
            value,
            json!({ "name": "data", "creationDate": "2024-05-01T10:00:00Z" })
        );
    }

    #[test]
    fn test_serialize_without_date() {
        let value = serde_json::to_value(BucketInfo::new("data")).unwrap();
        assert_eq!(value, json!({ "name": "data" }));
    }

    #[test]
    fn test_creation_timestamp() {
        let info = BucketInfo::new("data").with_creation_timestamp(0);
        assert_eq!(info.creation_date, Some(OffsetDateTime::UNIX_EPOCH));

        let info = BucketInfo::new("data").with_creation_timestamp(i64::MAX);
        assert!(info.creation_date.is_none());
    }
}
