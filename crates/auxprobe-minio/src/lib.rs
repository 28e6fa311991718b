#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]
#![allow(clippy::result_large_err)]

// Tracing target constants for consistent logging
pub const TRACING_TARGET_CLIENT: &str = "auxprobe_minio::client";
pub const TRACING_TARGET_OPERATIONS: &str = "auxprobe_minio::operations";
pub const TRACING_TARGET_BUCKETS: &str = "auxprobe_minio::buckets";

pub mod client;
pub mod operations;
pub mod types;

// Re-export for convenience
pub use crate::client::{MinioClient, MinioConfig, MinioCredentials};
pub use crate::operations::{
    BucketOperations, BucketStore, MinioListing, MinioProbe, MinioProbeVariant,
};
pub use crate::types::{BucketInfo, BucketListing, BucketReport, ObjectInfo};

/// Region new buckets are created in.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Bucket used when no bucket name is supplied.
pub const DEFAULT_BUCKET: &str = "test-bucket";

/// Error type for MinIO probe operations.
#[derive(Debug, thiserror::Error)]
#[must_use = "errors should be handled appropriately"]
pub enum Error {
    /// Configuration error.
    ///
    /// This includes missing credentials, an unusable host or port, or an
    /// endpoint the underlying client refuses.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Bucket creation failed in the wrapped probe variant.
    ///
    /// The underlying client error is logged but not carried; the message is
    /// what the caller sees.
    #[error("error creating {bucket}")]
    BucketCreation {
        /// Name of the bucket that could not be created.
        bucket: String,
    },

    /// Serialization or deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Underlying MinIO client error.
    ///
    /// Connection, authentication and request failures reported by the
    /// minio crate all surface here unchanged.
    #[error("MinIO client error: {0}")]
    Client(#[from] minio::s3::error::Error),
}

impl Error {
    /// Returns whether this error indicates a configuration issue.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// Returns whether this error comes from a failed bucket creation.
    pub fn is_bucket_creation(&self) -> bool {
        matches!(self, Error::BucketCreation { .. })
    }

    /// Returns whether this error was reported by the MinIO client.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Client(_))
    }
}

/// Specialized [`Result`] type for MinIO operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_creation_message() {
        let err = Error::BucketCreation {
            bucket: "test-bucket".to_string(),
        };
        assert_eq!(err.to_string(), "error creating test-bucket");
        assert!(err.is_bucket_creation());
        assert!(!err.is_config_error());
    }

    #[test]
    fn test_config_error() {
        let err = Error::Config("Access key cannot be empty".to_string());
        assert!(err.is_config_error());
        assert!(!err.is_client_error());
    }
}
