//! Bucket smoke test.

use async_trait::async_trait;
use auxprobe_core::Probe;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};
use tracing::{info, instrument, warn};

use super::{BucketOperations, BucketStore};
use crate::types::BucketReport;
use crate::{DEFAULT_BUCKET, DEFAULT_REGION, Error, MinioClient, Result, TRACING_TARGET_OPERATIONS};

/// How the probe reports bucket creation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(AsRefStr, Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MinioProbeVariant {
    /// Caller-supplied bucket; client errors propagate unchanged and a
    /// successful creation reports nothing.
    Direct,
    /// Fixed bucket; creation reports a message and a failed creation
    /// becomes [`Error::BucketCreation`].
    #[default]
    Wrapped,
}

impl MinioProbeVariant {
    /// Maps the result of a bucket creation to the `bucketOperation` field.
    ///
    /// # Errors
    ///
    /// `Direct` passes the client error through; `Wrapped` replaces it with
    /// [`Error::BucketCreation`].
    pub fn creation_outcome(self, bucket: &str, result: Result<()>) -> Result<Option<String>> {
        match (self, result) {
            (Self::Direct, Ok(())) => Ok(None),
            (Self::Direct, Err(e)) => Err(e),
            (Self::Wrapped, Ok(())) => Ok(Some(format!("bucket {bucket} has been created"))),
            (Self::Wrapped, Err(e)) => {
                warn!(
                    target: TRACING_TARGET_OPERATIONS,
                    bucket = %bucket,
                    error = %e,
                    "Bucket creation failed"
                );
                Err(Error::BucketCreation {
                    bucket: bucket.to_owned(),
                })
            }
        }
    }
}

/// Checks a bucket, creates it when missing and lists every bucket.
///
/// Running the probe twice against the same bucket creates it at most once:
/// the second run finds it and skips creation.
#[derive(Debug, Clone)]
pub struct MinioProbe<S = BucketOperations> {
    store: S,
    bucket: String,
    variant: MinioProbeVariant,
}

impl MinioProbe {
    /// Creates a probe for an explicit bucket using the `Direct` variant.
    pub fn direct(client: &MinioClient, bucket: impl Into<String>) -> Self {
        Self::with_store(client.bucket_operations(), bucket, MinioProbeVariant::Direct)
    }

    /// Creates a probe for [`DEFAULT_BUCKET`] using the `Wrapped` variant.
    pub fn wrapped(client: &MinioClient) -> Self {
        Self::with_store(
            client.bucket_operations(),
            DEFAULT_BUCKET,
            MinioProbeVariant::Wrapped,
        )
    }

    /// Picks the variant from whether a bucket name was supplied.
    pub fn from_bucket(client: &MinioClient, bucket: Option<String>) -> Self {
        match bucket {
            Some(bucket) => Self::direct(client, bucket),
            None => Self::wrapped(client),
        }
    }
}

impl<S: BucketStore> MinioProbe<S> {
    /// Creates a probe over any bucket store.
    pub fn with_store(store: S, bucket: impl Into<String>, variant: MinioProbeVariant) -> Self {
        Self {
            store,
            bucket: bucket.into(),
            variant,
        }
    }

    /// Returns the underlying bucket store.
    #[inline]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the bucket under test.
    #[inline]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Returns the reporting variant.
    #[inline]
    pub fn variant(&self) -> MinioProbeVariant {
        self.variant
    }

    /// Runs the existence check, the optional creation and the listing.
    ///
    /// # Errors
    ///
    /// Returns the first failing operation's error; see
    /// [`MinioProbeVariant::creation_outcome`] for how creation errors are
    /// reported.
    #[instrument(skip(self), target = TRACING_TARGET_OPERATIONS, fields(bucket = %self.bucket, variant = %self.variant))]
    pub async fn check(&self) -> Result<BucketReport> {
        info!(target: TRACING_TARGET_OPERATIONS, "Checking existence of bucket");
        let exists = self.store.bucket_exists(&self.bucket).await?;

        let bucket_operation = if exists {
            None
        } else {
            info!(target: TRACING_TARGET_OPERATIONS, "Creating missing bucket");
            let created = self.store.create_bucket(&self.bucket, DEFAULT_REGION).await;
            self.variant.creation_outcome(&self.bucket, created)?
        };

        let buckets = self.store.list_buckets().await?;

        Ok(BucketReport {
            bucket_operation,
            buckets,
        })
    }
}

#[async_trait]
impl<S: BucketStore> Probe for MinioProbe<S> {
    type Error = Error;
    type Output = BucketReport;

    fn name(&self) -> &'static str {
        "minio"
    }

    async fn run(&self) -> Result<Self::Output, Self::Error> {
        self.check().await
    }
}
