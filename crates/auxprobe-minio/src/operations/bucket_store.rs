//! The bucket calls the probes are written against.

use async_trait::async_trait;

use super::BucketOperations;
use crate::Result;
use crate::types::{BucketInfo, ObjectInfo};

/// Bucket-level calls against an object store.
///
/// [`BucketOperations`] implements this against a MinIO server.
#[async_trait]
pub trait BucketStore: Send + Sync {
    /// Checks if a bucket exists.
    async fn bucket_exists(&self, bucket: &str) -> Result<bool>;

    /// Creates a bucket in the given region.
    async fn create_bucket(&self, bucket: &str, region: &str) -> Result<()>;

    /// Lists all buckets visible to the credentials.
    async fn list_buckets(&self) -> Result<Vec<BucketInfo>>;

    /// Lists every object in a bucket.
    async fn list_objects(&self, bucket: &str) -> Result<Vec<ObjectInfo>>;
}

#[async_trait]
impl BucketStore for BucketOperations {
    async fn bucket_exists(&self, bucket: &str) -> Result<bool> {
        BucketOperations::bucket_exists(self, bucket).await
    }

    async fn create_bucket(&self, bucket: &str, region: &str) -> Result<()> {
        BucketOperations::create_bucket(self, bucket, region).await
    }

    async fn list_buckets(&self) -> Result<Vec<BucketInfo>> {
        BucketOperations::list_buckets(self).await
    }

    async fn list_objects(&self, bucket: &str) -> Result<Vec<ObjectInfo>> {
        BucketOperations::list_objects(self, bucket).await
    }
}
