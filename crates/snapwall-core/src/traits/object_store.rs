//! Object store trait.
//!
//! Abstracts the S3-compatible blob store so services depend on capabilities,
//! not the SDK. Implemented by `snapwall-storage`.

use async_trait::async_trait;
use bytes::Bytes;
use std::time::Duration;

use crate::entities::ObjectPage;
use crate::error::DomainError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, DomainError>;

/// Capability set of the object store collaborator.
///
/// Continuation tokens are opaque byte strings minted by the store; callers
/// pass them back unmodified and must not assume any lifetime.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// List up to `max_keys` objects under `prefix`, starting after the
    /// continuation point. Entries come back in the store's own order
    /// (lexicographic by key).
    async fn list_page(
        &self,
        prefix: &str,
        max_keys: i32,
        continuation_token: Option<String>,
    ) -> StoreResult<ObjectPage>;

    /// Delete a batch of keys in one request. Returns the number of keys
    /// submitted for deletion.
    async fn delete_batch(&self, keys: Vec<String>) -> StoreResult<usize>;

    /// Generate a presigned PUT URL for direct client upload.
    ///
    /// The signed request pins the content type and an immutable one-year
    /// cache-control header; the same key is assumed to never change content
    /// once uploaded.
    async fn presign_put(&self, key: &str, content_type: &str, ttl: Duration) -> StoreResult<String>;

    /// Fetch the full content of one object
    async fn get_object(&self, key: &str) -> StoreResult<Bytes>;

    /// Cheap reachability probe for readiness checks
    async fn health_check(&self) -> StoreResult<()>;
}
