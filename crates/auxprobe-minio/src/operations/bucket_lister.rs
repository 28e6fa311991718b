//! Read-only listing of buckets or bucket content.

use async_trait::async_trait;
use auxprobe_core::Probe;
use tracing::{info, instrument};

use super::{BucketOperations, BucketStore};
use crate::types::BucketListing;
use crate::{Error, MinioClient, Result, TRACING_TARGET_OPERATIONS};

/// Lists every bucket, or every object of one bucket when a name is given.
///
/// Never creates or modifies anything.
#[derive(Debug, Clone)]
pub struct MinioListing<S = BucketOperations> {
    store: S,
    bucket: Option<String>,
}

impl MinioListing {
    /// Creates a listing against a MinIO server.
    pub fn new(client: &MinioClient, bucket: Option<String>) -> Self {
        Self::with_store(client.bucket_operations(), bucket)
    }
}

impl<S: BucketStore> MinioListing<S> {
    /// Creates a listing over any bucket store.
    pub fn with_store(store: S, bucket: Option<String>) -> Self {
        Self { store, bucket }
    }

    /// Returns the bucket whose content is listed, if any.
    #[inline]
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// Runs the listing.
    ///
    /// # Errors
    ///
    /// Returns the client error unchanged, including when the named bucket
    /// does not exist.
    #[instrument(skip(self), target = TRACING_TARGET_OPERATIONS, fields(bucket = ?self.bucket))]
    pub async fn list(&self) -> Result<BucketListing> {
        let listing = match &self.bucket {
            Some(bucket) => {
                info!(target: TRACING_TARGET_OPERATIONS, "Listing bucket content");
                BucketListing::Objects(self.store.list_objects(bucket).await?)
            }
            None => {
                info!(target: TRACING_TARGET_OPERATIONS, "Listing buckets");
                BucketListing::Buckets(self.store.list_buckets().await?)
            }
        };

        info!(target: TRACING_TARGET_OPERATIONS, count = listing.len(), "Listing completed");
        Ok(listing)
    }
}

#[async_trait]
impl<S: BucketStore> Probe for MinioListing<S> {
    type Error = Error;
    type Output = BucketListing;

    fn name(&self) -> &'static str {
        "minio-ls"
    }

    async fn run(&self) -> Result<Self::Output, Self::Error> {
        self.list().await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::operations::bucket_store::memory::MemoryStore;
    use crate::types::{BucketInfo, ObjectInfo};

    #[tokio::test]
    async fn test_list_buckets() {
        let store = MemoryStore::default().with_bucket("b").with_bucket("a");
        let listing = MinioListing::with_store(store, None);

        let result = listing.run().await.unwrap();
        assert_eq!(
            result,
            BucketListing::Buckets(vec![BucketInfo::new("a"), BucketInfo::new("b")])
        );
        assert_eq!(listing.store.calls(), ["list"]);
        assert_eq!(listing.name(), "minio-ls");
    }

    #[tokio::test]
    async fn test_list_bucket_content() {
        let store = MemoryStore::default()
            .with_object("data", ObjectInfo::new("a.txt", 3))
            .with_object("data", ObjectInfo::new("dir/b.txt", 5))
            .with_bucket("other");
        let listing = MinioListing::with_store(store, Some("data".to_string()));

        let result = listing.list().await.unwrap();
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!([
                { "name": "a.txt", "size": 3 },
                { "name": "dir/b.txt", "size": 5 }
            ])
        );
        assert_eq!(listing.store.calls(), ["objects data"]);
        assert_eq!(listing.bucket(), Some("data"));
    }

    #[tokio::test]
    async fn test_missing_bucket_is_not_created() {
        let listing = MinioListing::with_store(MemoryStore::default(), Some("nope".to_string()));

        assert!(listing.list().await.is_err());
        assert_eq!(listing.store.calls(), ["objects nope"]);
        assert!(!listing.store.calls().iter().any(|call| call.starts_with("create")));
    }
}
