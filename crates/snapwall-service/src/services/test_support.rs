//! Shared fixtures for service unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use snapwall_cache::{RedisPool, RedisPoolConfig};
use snapwall_core::{DomainError, ObjectPage, ObjectStore, StoreResult};

use super::context::ServiceContext;

pub const TEST_ADMIN_TOKEN: &str = "test-admin-token";
pub const TEST_BASE_URL: &str = "https://cdn.test";

/// In-memory [`ObjectStore`] double.
///
/// Pages are served from a queue in order; calls are recorded for assertion.
#[derive(Default, Clone)]
pub struct MockStore {
    inner: Arc<Mutex<MockStoreInner>>,
}

#[derive(Default)]
struct MockStoreInner {
    pages: VecDeque<ObjectPage>,
    listed_prefixes: Vec<String>,
    deleted_batches: Vec<Vec<String>>,
    objects: Vec<(String, Bytes)>,
    presigned: Vec<(String, String)>,
    fail_listing: bool,
}

impl MockStore {
    pub fn with_page(self, page: ObjectPage) -> Self {
        self.inner.lock().unwrap().pages.push_back(page);
        self
    }

    pub fn with_object(self, key: &str, bytes: Bytes) -> Self {
        self.inner
            .lock()
            .unwrap()
            .objects
            .push((key.to_string(), bytes));
        self
    }

    pub fn failing_listing(self) -> Self {
        self.inner.lock().unwrap().fail_listing = true;
        self
    }

    pub fn listed_prefixes(&self) -> Vec<String> {
        self.inner.lock().unwrap().listed_prefixes.clone()
    }

    pub fn deleted_batches(&self) -> Vec<Vec<String>> {
        self.inner.lock().unwrap().deleted_batches.clone()
    }

    pub fn presigned(&self) -> Vec<(String, String)> {
        self.inner.lock().unwrap().presigned.clone()
    }
}

#[async_trait]
impl ObjectStore for MockStore {
    async fn list_page(
        &self,
        prefix: &str,
        _max_keys: i32,
        _continuation_token: Option<String>,
    ) -> StoreResult<ObjectPage> {
        let mut inner = self.inner.lock().unwrap();
        if inner.fail_listing {
            return Err(DomainError::StorageError("ListObjectsV2 failed".to_string()));
        }
        inner.listed_prefixes.push(prefix.to_string());
        Ok(inner.pages.pop_front().unwrap_or_default())
    }

    async fn delete_batch(&self, keys: Vec<String>) -> StoreResult<usize> {
        let count = keys.len();
        self.inner.lock().unwrap().deleted_batches.push(keys);
        Ok(count)
    }

    async fn presign_put(
        &self,
        key: &str,
        content_type: &str,
        _ttl: Duration,
    ) -> StoreResult<String> {
        self.inner
            .lock()
            .unwrap()
            .presigned
            .push((key.to_string(), content_type.to_string()));
        Ok(format!("https://store.test/presigned/{key}"))
    }

    async fn get_object(&self, key: &str) -> StoreResult<Bytes> {
        self.inner
            .lock()
            .unwrap()
            .objects
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, b)| b.clone())
            .ok_or_else(|| DomainError::ObjectNotFound(key.to_string()))
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}

/// Build a [`ServiceContext`] around a mock store.
///
/// The Redis pool points at a closed port, so counter-path calls fail
/// deterministically even on a machine running a local Redis; tests that
/// exercise counter paths belong in the integration suite.
pub fn fixture_context(store: MockStore) -> ServiceContext {
    let pool = RedisPool::new(RedisPoolConfig {
        url: "redis://127.0.0.1:1".to_string(),
        ..RedisPoolConfig::default()
    })
    .unwrap();
    ServiceContext::new(
        Arc::new(store),
        Arc::new(pool),
        TEST_ADMIN_TOKEN.to_string(),
        Some(TEST_BASE_URL.to_string()),
        Duration::from_secs(900),
    )
}
