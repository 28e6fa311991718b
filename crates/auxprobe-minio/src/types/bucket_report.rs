//! Body of the bucket probe response.

use serde::{Deserialize, Serialize};

use super::BucketInfo;

/// Result of one bucket probe run.
///
/// `bucket_operation` is only present when the probe had to create the
/// bucket and the variant reports a creation message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketReport {
    /// Outcome of the bucket creation, if one was performed and reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_operation: Option<String>,
    /// Every bucket visible to the credentials.
    pub buckets: Vec<BucketInfo>,
}

impl BucketReport {
    /// Returns whether the listing contains the named bucket.
    pub fn contains(&self, bucket: &str) -> bool {
        self.buckets.iter().any(|b| b.name == bucket)
    }
}
