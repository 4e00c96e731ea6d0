//! AWS SDK S3 backend for phoenix-storage.
//!
//! This crate provides the `ObjectStoreClient` implementation using the
//! AWS SDK for Rust, plus client construction with region validation and
//! optional named-profile credentials.
//!
//! # Example
//!
//! ```ignore
//! use phoenix_storage::{ClientSettings, ObjectOperations};
//! use phoenix_storage_aws::AwsStoreClient;
//!
//! let settings = ClientSettings::new("us-west-2").with_profile("batch");
//! let client = AwsStoreClient::new(settings).await?;
//!
//! let ops = ObjectOperations::new(client);
//! ops.store("my-bucket", "reports/daily.csv", "/tmp/daily.csv").await?;
//! ```

mod client;
mod error;

pub use client::AwsStoreClient;
