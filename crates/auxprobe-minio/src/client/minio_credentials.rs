//! MinIO authentication credentials.

use std::fmt;

#[cfg(feature = "config")]
use clap::Args;
use minio::s3::creds::StaticProvider;
use serde::{Deserialize, Serialize};

/// MinIO authentication credentials.
///
/// On the command line the keys are also accepted as `--minio-user` and
/// `--minio-password`, the names used by the fixed-bucket variant.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct MinioCredentials {
    /// Access key for MinIO authentication.
    #[cfg_attr(
        feature = "config",
        arg(
            long = "minio-access-key",
            visible_alias = "minio-user",
            env = "MINIO_ACCESS_KEY"
        )
    )]
    pub access_key: String,

    /// Secret key for MinIO authentication.
    #[cfg_attr(
        feature = "config",
        arg(
            long = "minio-secret-key",
            visible_alias = "minio-password",
            env = "MINIO_SECRET_KEY",
            hide_env_values = true
        )
    )]
    #[serde(skip_serializing)]
    pub secret_key: String,
}

impl MinioCredentials {
    /// Creates new MinIO credentials with access key and secret key.
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Returns the access key.
    #[inline]
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// Returns the secret key.
    #[inline]
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Returns a masked version of the access key for logging.
    ///
    /// This shows only the first 4 characters followed by asterisks.
    pub fn access_key_masked(&self) -> String {
        match self.access_key.char_indices().nth(4) {
            Some((idx, _)) => format!("{}***", &self.access_key[..idx]),
            None => "*".repeat(self.access_key.chars().count()),
        }
    }
}

impl fmt::Debug for MinioCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinioCredentials")
            .field("access_key", &self.access_key_masked())
            .field("secret_key", &"***")
            .finish()
    }
}

impl From<MinioCredentials> for StaticProvider {
    fn from(credentials: MinioCredentials) -> Self {
        StaticProvider::new(&credentials.access_key, &credentials.secret_key, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_new() {
        let creds = MinioCredentials::new("access", "secret");
        assert_eq!(creds.access_key(), "access");
        assert_eq!(creds.secret_key(), "secret");
    }

    #[test]
    fn test_credentials_masking() {
        let creds = MinioCredentials::new("AKIATEST12345", "secret");
        assert_eq!(creds.access_key_masked(), "AKIA***");

        let short_creds = MinioCredentials::new("ABCD", "secret");
        assert_eq!(short_creds.access_key_masked(), "****");
    }

    #[test]
    fn test_debug_hides_secret() {
        let creds = MinioCredentials::new("minioadmin", "supersecret");
        let debug_str = format!("{creds:?}");
        assert!(!debug_str.contains("supersecret"));
        assert!(!debug_str.contains("minioadmin"));
        assert!(debug_str.contains("mini***"));
    }

    #[test]
    fn test_secret_not_serialized() {
        let creds = MinioCredentials::new("access", "secret");
        let json = serde_json::to_string(&creds).unwrap();
        assert!(json.contains("access"));
        assert!(!json.contains("\"secret\""));
    }
}
