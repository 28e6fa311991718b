//! Data types returned by the MinIO probes.

mod bucket_info;
mod bucket_listing;
mod bucket_report;
mod object_info;

pub use bucket_info::BucketInfo;
pub use bucket_listing::BucketListing;
pub use bucket_report::BucketReport;
pub use object_info::ObjectInfo;
