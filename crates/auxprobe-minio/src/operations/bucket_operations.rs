//! Bucket operations for MinIO storage.

use std::future::Future;
use std::time::Instant;

use futures::StreamExt;
use minio::s3::types::{S3Api, ToStream};
use tracing::{debug, error, info, instrument};

use crate::types::{BucketInfo, ObjectInfo};
use crate::{Error, MinioClient, Result, TRACING_TARGET_BUCKETS, TRACING_TARGET_OPERATIONS};

/// The bucket calls the probes make, each timed and logged.
#[derive(Debug, Clone)]
pub struct BucketOperations {
    client: MinioClient,
}

impl BucketOperations {
    /// Creates new BucketOperations with a MinIO client.
    pub fn new(client: MinioClient) -> Self {
        Self { client }
    }

    /// Creates a new bucket in the given region.
    ///
    /// # Errors
    ///
    /// Returns an error if the bucket creation fails, including when the
    /// bucket already exists.
    #[instrument(skip(self), target = TRACING_TARGET_BUCKETS, fields(bucket = %bucket_name))]
    pub async fn create_bucket(&self, bucket_name: &str, region: &str) -> Result<()> {
        debug!(target: TRACING_TARGET_OPERATIONS, region = %region, "Creating bucket");

        let request = self
            .client
            .as_inner()
            .create_bucket(bucket_name)
            .region(Some(region.to_owned()))
            .send();

        timed("create bucket", async { request.await.map(|_| ()) }).await
    }

    /// Lists all buckets visible to the credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the bucket listing fails.
    #[instrument(skip(self), target = TRACING_TARGET_BUCKETS)]
    pub async fn list_buckets(&self) -> Result<Vec<BucketInfo>> {
        debug!(target: TRACING_TARGET_OPERATIONS, "Listing buckets");

        let response = timed("list buckets", self.client.as_inner().list_buckets().send()).await?;

        let buckets: Vec<BucketInfo> = response
            .buckets
            .into_iter()
            .map(|bucket| {
                BucketInfo::new(bucket.name).with_creation_timestamp(bucket.creation_date.timestamp())
            })
            .collect();

        debug!(target: TRACING_TARGET_BUCKETS, count = buckets.len(), "Buckets listed");
        Ok(buckets)
    }

    /// Checks if a bucket exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the existence check fails.
    #[instrument(skip(self), target = TRACING_TARGET_BUCKETS, fields(bucket = %bucket_name))]
    pub async fn bucket_exists(&self, bucket_name: &str) -> Result<bool> {
        debug!(target: TRACING_TARGET_OPERATIONS, "Checking if bucket exists");

        let request = self.client.as_inner().bucket_exists(bucket_name).send();
        let response = timed("check bucket", request).await?;

        debug!(target: TRACING_TARGET_BUCKETS, exists = response.exists, "Bucket checked");
        Ok(response.exists)
    }

    /// Lists every object in a bucket, following all result pages.
    ///
    /// # Errors
    ///
    /// Returns an error if any page of the listing fails, including when the
    /// bucket does not exist.
    #[instrument(skip(self), target = TRACING_TARGET_BUCKETS, fields(bucket = %bucket_name))]
    pub async fn list_objects(&self, bucket_name: &str) -> Result<Vec<ObjectInfo>> {
        debug!(target: TRACING_TARGET_OPERATIONS, "Listing objects");

        let request = self
            .client
            .as_inner()
            .list_objects(bucket_name)
            .recursive(true);

        let listing = async {
            let mut stream = request.to_stream().await;
            let mut objects = Vec::new();

            while let Some(page) = stream.next().await {
                let entries = page?.contents.into_iter().filter(|entry| !entry.is_prefix);
                objects.extend(entries.map(|entry| {
                    let mut object = ObjectInfo::new(entry.name, entry.size.unwrap_or(0));
                    if let Some(modified) = entry.last_modified {
                        object = object.with_last_modified_timestamp(modified.timestamp());
                    }
                    if let Some(etag) = entry.etag {
                        object = object.with_etag(etag);
                    }
                    object
                }));
            }

            Ok::<_, minio::s3::error::Error>(objects)
        };

        let objects = timed("list objects", listing).await?;

        debug!(target: TRACING_TARGET_BUCKETS, count = objects.len(), "Objects listed");
        Ok(objects)
    }
}

/// Awaits a client call and logs its duration and outcome.
async fn timed<T, F>(operation: &'static str, call: F) -> Result<T>
where
    F: Future<Output = Result<T, minio::s3::error::Error>>,
{
    let start = Instant::now();
    let result = call.await.map_err(Error::Client);
    let elapsed = start.elapsed();

    match &result {
        Ok(_) => info!(
            target: TRACING_TARGET_BUCKETS,
            operation,
            elapsed = ?elapsed,
            "Bucket operation completed"
        ),
        Err(e) => error!(
            target: TRACING_TARGET_BUCKETS,
            operation,
            error = %e,
            elapsed = ?elapsed,
            "Bucket operation failed"
        ),
    }

    result
}
