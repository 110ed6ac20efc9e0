//! Service context - dependency container for services
//!
//! Holds the object store, counter stores, and the configuration slices the
//! services need.

use std::sync::Arc;
use std::time::Duration;

use snapwall_cache::{RankingStore, ReactionStore, SharedRedisPool};
use snapwall_core::ObjectStore;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - The object store (gallery images)
/// - The Redis-backed reaction and ranking stores
/// - The admin shared secret and public URL configuration
#[derive(Clone)]
pub struct ServiceContext {
    object_store: Arc<dyn ObjectStore>,
    redis_pool: SharedRedisPool,
    reaction_store: ReactionStore,
    ranking_store: RankingStore,
    admin_token: String,
    public_base_url: Option<String>,
    presign_ttl: Duration,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        object_store: Arc<dyn ObjectStore>,
        redis_pool: SharedRedisPool,
        admin_token: String,
        public_base_url: Option<String>,
        presign_ttl: Duration,
    ) -> Self {
        // Stores share the inner pool
        let inner_pool = (*redis_pool).clone();
        let reaction_store = ReactionStore::new(inner_pool.clone());
        let ranking_store = RankingStore::new(inner_pool);

        Self {
            object_store,
            redis_pool,
            reaction_store,
            ranking_store,
            admin_token,
            public_base_url,
            presign_ttl,
        }
    }

    /// Get the object store
    pub fn object_store(&self) -> &dyn ObjectStore {
        self.object_store.as_ref()
    }

    /// Get the Redis connection pool
    pub fn redis_pool(&self) -> &SharedRedisPool {
        &self.redis_pool
    }

    /// Get the reaction counter store
    pub fn reaction_store(&self) -> &ReactionStore {
        &self.reaction_store
    }

    /// Get the ranking store
    pub fn ranking_store(&self) -> &RankingStore {
        &self.ranking_store
    }

    /// Get the configured public base URL for direct image links
    pub fn public_base_url(&self) -> Option<&str> {
        self.public_base_url.as_deref()
    }

    /// Presigned upload URL lifetime
    pub fn presign_ttl(&self) -> Duration {
        self.presign_ttl
    }

    /// Check an admin credential against the configured shared secret.
    ///
    /// A plain equality compare on a single static secret - this is the whole
    /// auth system, by scope.
    pub fn authorize_admin(&self, credential: &str) -> ServiceResult<()> {
        if credential == self.admin_token {
            Ok(())
        } else {
            Err(ServiceError::Unauthorized)
        }
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("object_store", &"ObjectStore")
            .field("redis_pool", &"SharedRedisPool")
            .field("public_base_url", &self.public_base_url)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    object_store: Option<Arc<dyn ObjectStore>>,
    redis_pool: Option<SharedRedisPool>,
    admin_token: Option<String>,
    public_base_url: Option<String>,
    presign_ttl: Option<Duration>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn object_store(mut self, store: Arc<dyn ObjectStore>) -> Self {
        self.object_store = Some(store);
        self
    }

    pub fn redis_pool(mut self, pool: SharedRedisPool) -> Self {
        self.redis_pool = Some(pool);
        self
    }

    pub fn admin_token(mut self, token: impl Into<String>) -> Self {
        self.admin_token = Some(token.into());
        self
    }

    pub fn public_base_url(mut self, url: Option<String>) -> Self {
        self.public_base_url = url;
        self
    }

    pub fn presign_ttl(mut self, ttl: Duration) -> Self {
        self.presign_ttl = Some(ttl);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.object_store
                .ok_or_else(|| ServiceError::validation("object_store is required"))?,
            self.redis_pool
                .ok_or_else(|| ServiceError::validation("redis_pool is required"))?,
            self.admin_token
                .ok_or_else(|| ServiceError::validation("admin_token is required"))?,
            self.public_base_url,
            self.presign_ttl.unwrap_or(Duration::from_secs(900)),
        ))
    }
}
