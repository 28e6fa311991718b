//! MinIO probe configuration.

use auxprobe_minio::MinioConfig;
use clap::{Args, Subcommand};

use crate::TRACING_TARGET_CONFIG;

/// Arguments of the `minio` subcommand.
///
/// When a bucket is given, client errors are reported unchanged and the
/// response carries only the bucket list. Without one, the default bucket
/// is used and the response also describes what happened to it.
#[derive(Debug, Clone, Args)]
pub struct MinioArgs {
    /// Endpoint and credentials.
    #[command(flatten)]
    pub config: MinioConfig,

    /// Bucket to ensure exists.
    #[arg(long = "bucket", env = "MINIO_BUCKET")]
    pub bucket: Option<String>,

    /// What to run; defaults to the bucket smoke test.
    #[command(subcommand)]
    pub action: Option<MinioAction>,
}

/// MinIO operations.
#[derive(Debug, Clone, Subcommand)]
pub enum MinioAction {
    /// Ensure the bucket exists and list all buckets.
    Smoke,
    /// List all buckets, or the objects of one bucket.
    Ls {
        /// Bucket whose content to list.
        #[arg(long = "bucket")]
        bucket: Option<String>,
    },
}

impl MinioArgs {
    /// Logs the configuration with the credentials masked.
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            endpoint = %self.config.endpoint_masked(),
            access_key = %self.config.credentials.access_key_masked(),
            bucket = ?self.bucket,
            action = match self.action {
                Some(MinioAction::Ls { .. }) => "ls",
                Some(MinioAction::Smoke) | None => "smoke",
            },
            "MinIO configuration"
        );
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::config::{Cli, Command};

    #[test]
    fn test_parse_minio() {
        let cli = Cli::try_parse_from([
            "auxprobe",
            "minio",
            "--minio-host",
            "minio.local",
            "--minio-port",
            "9001",
            "--minio-user",
            "access",
            "--minio-password",
            "secret",
            "--bucket",
            "probe-bucket",
        ])
        .unwrap();

        let Command::Minio(args) = cli.command else {
            panic!("expected the minio subcommand");
        };
        assert_eq!(args.config.host, "minio.local");
        assert_eq!(args.config.port, 9001);
        assert_eq!(args.config.credentials.access_key, "access");
        assert_eq!(args.bucket.as_deref(), Some("probe-bucket"));
    }

    fn parse(args: &[&str]) -> MinioArgs {
        let base = ["auxprobe", "minio", "--minio-user", "access", "--minio-password", "secret"];
        let cli = Cli::try_parse_from(base.iter().chain(args)).unwrap();
        match cli.command {
            Command::Minio(args) => args,
            other => panic!("unexpected subcommand: {other:?}"),
        }
    }

    #[test]
    fn test_default_action_is_smoke() {
        assert!(parse(&[]).action.is_none());
        assert!(matches!(parse(&["smoke"]).action, Some(MinioAction::Smoke)));
    }

    #[test]
    fn test_ls_action() {
        let args = parse(&["ls"]);
        assert!(matches!(args.action, Some(MinioAction::Ls { bucket: None })));

        let args = parse(&["ls", "--bucket", "data"]);
        let Some(MinioAction::Ls { bucket }) = args.action else {
            panic!("expected the ls action");
        };
        assert_eq!(bucket.as_deref(), Some("data"));
    }
}
