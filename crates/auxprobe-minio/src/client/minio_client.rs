//! High-level MinIO client implementation.

use std::sync::Arc;

use minio::s3::Client;
use minio::s3::creds::StaticProvider;
use minio::s3::http::BaseUrl;
use tracing::{error, info, instrument};

use crate::operations::BucketOperations;
use crate::{Error, MinioConfig, Result, TRACING_TARGET_CLIENT};

/// MinIO client bound to a single endpoint and set of credentials.
///
/// Creating the client does not contact the server; the first request does.
#[derive(Clone)]
pub struct MinioClient {
    inner: Client,
    config: Arc<MinioConfig>,
}

impl MinioClient {
    /// Creates a new MinIO client with the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration validation fails
    /// - The minio crate rejects the endpoint
    ///
    /// # Examples
    ///
    /// ```rust
    /// use auxprobe_minio::{MinioClient, MinioConfig, MinioCredentials};
    ///
    /// let credentials = MinioCredentials::new("access_key", "secret_key");
    /// let config = MinioConfig::new("localhost", 9000, credentials);
    /// let client = MinioClient::new(config).unwrap();
    /// ```
    #[instrument(skip(config), target = TRACING_TARGET_CLIENT, fields(endpoint = %config.endpoint_masked()))]
    pub fn new(config: MinioConfig) -> Result<Self> {
        info!(target: TRACING_TARGET_CLIENT, "Initializing MinIO client");

        config.validate().map_err(|e| {
            error!(target: TRACING_TARGET_CLIENT, error = %e, "Configuration validation failed");
            e
        })?;

        let provider = StaticProvider::from(config.credentials().clone());

        let endpoint_url = config.endpoint()?.to_string();
        let base_url: BaseUrl = endpoint_url.parse().map_err(|e| {
            error!(target: TRACING_TARGET_CLIENT, error = %e, "Invalid endpoint URL");
            Error::Config(format!("Invalid endpoint URL: {}", e))
        })?;

        let inner = Client::new(base_url, Some(Box::new(provider)), None, None).map_err(|e| {
            error!(target: TRACING_TARGET_CLIENT, error = %e, "Failed to create MinIO client");
            Error::Config(format!("Failed to build MinIO client: {}", e))
        })?;

        info!(
            target: TRACING_TARGET_CLIENT,
            endpoint = %config.endpoint_masked(),
            secure = config.is_secure(),
            access_key = %config.credentials().access_key_masked(),
            "MinIO client initialized"
        );

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Creates a new BucketOperations instance.
    pub fn bucket_operations(&self) -> BucketOperations {
        BucketOperations::new(self.clone())
    }

    /// Returns the configuration this client was built from.
    #[inline]
    pub fn config(&self) -> &MinioConfig {
        &self.config
    }

    /// Returns a reference to the inner client.
    #[inline]
    pub(crate) fn as_inner(&self) -> &Client {
        &self.inner
    }
}

impl std::fmt::Debug for MinioClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MinioClient")
            .field("endpoint", &self.config.endpoint_masked())
            .field("secure", &self.config.is_secure())
            .field("access_key", &self.config.credentials().access_key_masked())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MinioCredentials;

    fn create_test_config() -> MinioConfig {
        let credentials = MinioCredentials::new("minioadmin", "minioadmin");
        MinioConfig::new("localhost", 9000, credentials)
    }

    #[test]
    fn test_client_creation() {
        let client = MinioClient::new(create_test_config());
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_invalid_config() {
        let credentials = MinioCredentials::new("", "");
        let config = MinioConfig::new("localhost", 9000, credentials);

        let client = MinioClient::new(config);
        assert!(matches!(client, Err(Error::Config(_))));
    }

    #[test]
    fn test_client_debug() {
        let client = MinioClient::new(create_test_config()).unwrap();
        let debug_str = format!("{:?}", client);

        assert!(debug_str.contains("MinioClient"));
        assert!(debug_str.contains("localhost:9000"));
        assert!(!debug_str.contains("minioadmin"));
    }
}
