//! S3-backed implementation of the [`ObjectStore`] trait.
//!
//! All store failures surface as a generic `DomainError::StorageError`; the
//! underlying SDK error is logged here and never exposed to callers.

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::types::{Delete, ObjectIdentifier};
use aws_sdk_s3::Client as S3Client;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use tracing::{debug, error};

use snapwall_core::{DomainError, ObjectEntry, ObjectPage, ObjectStore, StoreResult};

use crate::client::CACHE_CONTROL_IMMUTABLE;

/// Object store backed by an S3-compatible service
#[derive(Clone)]
pub struct S3ObjectStore {
    client: S3Client,
    bucket: String,
}

impl S3ObjectStore {
    /// Create a new store for one bucket
    #[must_use]
    pub fn new(client: S3Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Get the bucket name
    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    fn storage_error(op: &'static str, err: impl std::fmt::Display) -> DomainError {
        error!(operation = op, error = %err, "Object store request failed");
        DomainError::StorageError(format!("{op} failed"))
    }
}

impl std::fmt::Debug for S3ObjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3ObjectStore")
            .field("bucket", &self.bucket)
            .finish()
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn list_page(
        &self,
        prefix: &str,
        max_keys: i32,
        continuation_token: Option<String>,
    ) -> StoreResult<ObjectPage> {
        let response = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .prefix(prefix)
            .max_keys(max_keys)
            .set_continuation_token(continuation_token)
            .send()
            .await
            .map_err(|e| Self::storage_error("list", DisplayErrorContext(&e)))?;

        let entries = response
            .contents()
            .iter()
            .map(|obj| ObjectEntry {
                key: obj.key().map(String::from),
                size: obj.size(),
                last_modified: obj.last_modified().and_then(to_chrono),
            })
            .collect::<Vec<_>>();

        debug!(
            prefix = %prefix,
            count = entries.len(),
            truncated = response.is_truncated().unwrap_or(false),
            "Listed object page"
        );

        Ok(ObjectPage {
            entries,
            next_continuation_token: response.next_continuation_token().map(String::from),
            is_truncated: response.is_truncated().unwrap_or(false),
        })
    }

    async fn delete_batch(&self, keys: Vec<String>) -> StoreResult<usize> {
        if keys.is_empty() {
            return Ok(0);
        }
        let count = keys.len();

        let objects = keys
            .into_iter()
            .map(|key| ObjectIdentifier::builder().key(key).build())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| Self::storage_error("delete batch", e))?;

        let delete = Delete::builder()
            .set_objects(Some(objects))
            .quiet(true)
            .build()
            .map_err(|e| Self::storage_error("delete batch", e))?;

        self.client
            .delete_objects()
            .bucket(&self.bucket)
            .delete(delete)
            .send()
            .await
            .map_err(|e| Self::storage_error("delete batch", DisplayErrorContext(&e)))?;

        debug!(count, "Deleted object batch");
        Ok(count)
    }

    async fn presign_put(
        &self,
        key: &str,
        content_type: &str,
        ttl: Duration,
    ) -> StoreResult<String> {
        let presigning = PresigningConfig::expires_in(ttl)
            .map_err(|e| Self::storage_error("presign", e))?;

        let presigned = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .cache_control(CACHE_CONTROL_IMMUTABLE)
            .presigned(presigning)
            .await
            .map_err(|e| Self::storage_error("presign", DisplayErrorContext(&e)))?;

        Ok(presigned.uri().to_string())
    }

    async fn get_object(&self, key: &str) -> StoreResult<Bytes> {
        let response = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                // Missing keys are a caller error, not an upstream outage
                if e.as_service_error().is_some_and(|se| {
                    matches!(
                        se,
                        aws_sdk_s3::operation::get_object::GetObjectError::NoSuchKey(_)
                    )
                }) {
                    DomainError::ObjectNotFound(key.to_string())
                } else {
                    Self::storage_error("get object", DisplayErrorContext(&e))
                }
            })?;

        let data = response
            .body
            .collect()
            .await
            .map_err(|e| Self::storage_error("get object", e))?;

        Ok(data.into_bytes())
    }

    async fn health_check(&self) -> StoreResult<()> {
        self.client
            .head_bucket()
            .bucket(&self.bucket)
            .send()
            .await
            .map_err(|e| Self::storage_error("health check", DisplayErrorContext(&e)))?;
        Ok(())
    }
}

/// Convert an SDK timestamp to chrono
fn to_chrono(dt: &aws_sdk_s3::primitives::DateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(dt.secs(), dt.subsec_nanos())
}
