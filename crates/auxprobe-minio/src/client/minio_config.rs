//! MinIO client configuration management.
//!
//! This module provides the configuration needed to reach a MinIO server:
//! host, port, transport security and credentials.

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};
use url::Url;

use super::minio_credentials::MinioCredentials;
use crate::{Error, Result};

/// MinIO client configuration.
///
/// The endpoint is assembled from `host` and `port`. Plain HTTP is the
/// default, which is how MinIO is exposed inside the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct MinioConfig {
    /// MinIO server host name or address.
    #[cfg_attr(feature = "config", arg(long = "minio-host", env = "MINIO_HOST"))]
    pub host: String,

    /// MinIO API port.
    #[cfg_attr(
        feature = "config",
        arg(long = "minio-port", env = "MINIO_PORT", default_value_t = 9000)
    )]
    pub port: u16,

    /// Use HTTPS instead of plain HTTP.
    #[cfg_attr(
        feature = "config",
        arg(long = "minio-secure", env = "MINIO_SECURE", default_value_t = false)
    )]
    #[serde(default)]
    pub secure: bool,

    /// Authentication credentials.
    #[cfg_attr(feature = "config", command(flatten))]
    pub credentials: MinioCredentials,
}

impl MinioConfig {
    /// Creates a new plain-HTTP configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use auxprobe_minio::{MinioConfig, MinioCredentials};
    ///
    /// let credentials = MinioCredentials::new("access_key", "secret_key");
    /// let config = MinioConfig::new("localhost", 9000, credentials);
    /// assert_eq!(config.endpoint().unwrap().as_str(), "http://localhost:9000/");
    /// ```
    pub fn new(host: impl Into<String>, port: u16, credentials: MinioCredentials) -> Self {
        Self {
            host: host.into(),
            port,
            secure: false,
            credentials,
        }
    }

    /// Sets whether HTTPS should be used.
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Returns whether secure connections should be used.
    #[inline]
    pub fn is_secure(&self) -> bool {
        self.secure
    }

    /// Returns the credentials.
    #[inline]
    pub fn credentials(&self) -> &MinioCredentials {
        &self.credentials
    }

    /// Builds the endpoint URL from host, port and scheme.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the host cannot form a valid URL.
    pub fn endpoint(&self) -> Result<Url> {
        let scheme = if self.secure { "https" } else { "http" };
        let raw = format!("{scheme}://{}:{}", self.host, self.port);

        let url = Url::parse(&raw)
            .map_err(|e| Error::Config(format!("Invalid endpoint '{raw}': {e}")))?;

        if url.host().is_none() {
            return Err(Error::Config(
                "Endpoint must include a valid hostname".to_string(),
            ));
        }

        Ok(url)
    }

    /// Returns the endpoint for logging, or the raw host and port if it is invalid.
    pub fn endpoint_masked(&self) -> String {
        match self.endpoint() {
            Ok(mut url) => {
                let _ = url.set_username("");
                let _ = url.set_password(None);
                url.to_string()
            }
            Err(_) => format!("{}:{}", self.host, self.port),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns validation errors if:
    /// - The host is empty or the port is zero
    /// - Credentials are empty
    /// - The endpoint cannot be assembled
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(Error::Config("Host cannot be empty".to_string()));
        }

        if self.port == 0 {
            return Err(Error::Config("Port must be greater than zero".to_string()));
        }

        if self.credentials.access_key.is_empty() {
            return Err(Error::Config("Access key cannot be empty".to_string()));
        }

        if self.credentials.secret_key.is_empty() {
            return Err(Error::Config("Secret key cannot be empty".to_string()));
        }

        self.endpoint()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> MinioCredentials {
        MinioCredentials::new("access", "secret")
    }

    #[test]
    fn test_config_new() {
        let config = MinioConfig::new("minio.local", 9000, credentials());
        assert!(!config.is_secure());
        assert_eq!(
            config.endpoint().unwrap().as_str(),
            "http://minio.local:9000/"
        );
    }

    #[test]
    fn test_config_secure() {
        let config = MinioConfig::new("minio.local", 9443, credentials()).with_secure(true);
        assert!(config.is_secure());
        assert_eq!(
            config.endpoint().unwrap().as_str(),
            "https://minio.local:9443/"
        );
    }

    #[test]
    fn test_config_validation() {
        assert!(MinioConfig::new("localhost", 9000, credentials()).validate().is_ok());

        let empty_host = MinioConfig::new("", 9000, credentials());
        assert!(empty_host.validate().is_err());

        let zero_port = MinioConfig::new("localhost", 0, credentials());
        assert!(zero_port.validate().is_err());

        let empty_access = MinioConfig::new("localhost", 9000, MinioCredentials::new("", "s"));
        assert!(empty_access.validate().is_err());

        let empty_secret = MinioConfig::new("localhost", 9000, MinioCredentials::new("a", ""));
        assert!(empty_secret.validate().is_err());
    }

    #[test]
    fn test_invalid_host() {
        let config = MinioConfig::new("bad host", 9000, credentials());
        assert!(matches!(config.endpoint(), Err(Error::Config(_))));
        assert_eq!(config.endpoint_masked(), "bad host:9000");
    }
}
