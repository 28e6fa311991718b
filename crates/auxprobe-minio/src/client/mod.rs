//! MinIO client with configuration management.
//!
//! This module wraps the minio crate client together with the endpoint and
//! credentials it was built from, so that logs never carry secrets.

mod minio_client;
mod minio_config;
mod minio_credentials;

pub use minio_client::MinioClient;
pub use minio_config::MinioConfig;
pub use minio_credentials::MinioCredentials;
