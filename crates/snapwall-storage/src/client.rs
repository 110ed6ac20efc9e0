//! S3 client construction.
//!
//! Builds an `aws-sdk-s3` client from application configuration, supporting
//! custom endpoints (R2, MinIO, LocalStack) and path-style addressing.

use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::config::{Builder as S3ConfigBuilder, Credentials};
use aws_sdk_s3::Client as S3Client;
use snapwall_common::S3Config;
use tracing::info;

/// Cache-control applied to uploaded originals and derived thumbnails.
///
/// Correctness-critical: the same key is assumed to never change content
/// once uploaded, so responses are cacheable forever.
pub const CACHE_CONTROL_IMMUTABLE: &str = "public, max-age=31536000, immutable";

/// Build an S3 client from application configuration
pub async fn build_client(config: &S3Config) -> S3Client {
    let aws_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .load()
        .await;

    let credentials = Credentials::new(
        config.access_key_id.clone(),
        config.secret_access_key.clone(),
        None,
        None,
        "snapwall-static",
    );

    let mut builder = S3ConfigBuilder::from(&aws_config).credentials_provider(credentials);

    // Configure custom endpoint for R2/MinIO/LocalStack
    if let Some(ref endpoint_url) = config.endpoint_url {
        builder = builder.endpoint_url(endpoint_url);
    }

    // Path-style access for MinIO compatibility
    if config.force_path_style {
        builder = builder.force_path_style(true);
    }

    let client = S3Client::from_conf(builder.build());

    info!(
        bucket = %config.bucket,
        region = %config.region,
        endpoint = config.endpoint_url.as_deref().unwrap_or("aws-default"),
        "S3 client initialized"
    );

    client
}
