//! Body of the listing response.

use serde::{Deserialize, Serialize};

use super::{BucketInfo, ObjectInfo};

/// Either every visible bucket or the content of one bucket.
///
/// Serialized as a bare array of the listed entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BucketListing {
    /// Buckets visible to the credentials.
    Buckets(Vec<BucketInfo>),
    /// Objects of a single bucket, listed recursively.
    Objects(Vec<ObjectInfo>),
}

impl BucketListing {
    /// Returns the number of listed entries.
    pub fn len(&self) -> usize {
        match self {
            Self::Buckets(buckets) => buckets.len(),
            Self::Objects(objects) => objects.len(),
        }
    }

    /// Returns whether nothing was listed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_listing_is_a_bare_array() {
        let buckets = BucketListing::Buckets(vec![BucketInfo::new("a"), BucketInfo::new("b")]);
        assert_eq!(
            serde_json::to_value(&buckets).unwrap(),
            json!([{ "name": "a" }, { "name": "b" }])
        );
        assert_eq!(buckets.len(), 2);

        let objects = BucketListing::Objects(vec![]);
        assert_eq!(serde_json::to_value(&objects).unwrap(), json!([]));
        assert!(objects.is_empty());
    }
}
