use anyhow::Context;
use auxprobe_minio::{MinioClient, MinioListing, MinioProbe};

use crate::config::{MinioAction, MinioArgs};
use crate::output::Output;

/// Runs the bucket smoke test or the read-only listing.
pub(super) async fn run(args: MinioArgs, output: &Output) -> anyhow::Result<()> {
    let client = MinioClient::new(args.config).context("failed to create MinIO client")?;

    match args.action {
        Some(MinioAction::Ls { bucket }) => {
            let listing = MinioListing::new(&client, bucket);
            super::run_probe(&listing, output).await
        }
        Some(MinioAction::Smoke) | None => {
            let probe = MinioProbe::from_bucket(&client, args.bucket);
            super::run_probe(&probe, output).await
        }
    }
}
