//! MinIO operations used by the bucket probe and the listing.
//!
//! [`BucketOperations`] wraps the bucket calls (existence check, creation,
//! bucket and object listing) with timing and structured logs. The probes
//! are written against [`BucketStore`]: [`MinioProbe`] sequences the smoke
//! test and [`MinioListing`] is the read-only `ls`.

mod bucket_lister;
mod bucket_operations;
mod bucket_probe;
mod bucket_store;

pub use bucket_lister::MinioListing;
pub use bucket_operations::BucketOperations;
pub use bucket_probe::{MinioProbe, MinioProbeVariant};
pub use bucket_store::BucketStore;
