//! # snapwall-storage
//!
//! Object storage layer implementing the [`snapwall_core::ObjectStore`] trait
//! against any S3-compatible store (Cloudflare R2, MinIO, AWS S3).
//!
//! ## Features
//!
//! - **Paginated prefix listing** with opaque continuation tokens
//! - **Bulk delete** in store-sized batches
//! - **Presigned PUT URLs** for direct client uploads
//! - **Custom endpoints** and path-style addressing for R2/MinIO

pub mod client;
pub mod s3_store;

pub use client::{build_client, CACHE_CONTROL_IMMUTABLE};
pub use s3_store::S3ObjectStore;
