//! Reaction service
//!
//! Batch counter reads, single-reaction recording, and the per-event
//! leaderboard.

use std::collections::HashMap;

use tracing::instrument;

use snapwall_core::{DomainError, EventSlug, RankingEntry, ReactionCounts, ReactionKind};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Default leaderboard size
pub const DEFAULT_RANKING_LIMIT: usize = 10;
/// Leaderboard size ceiling
pub const MAX_RANKING_LIMIT: usize = 100;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch reaction counts for a batch of image keys.
    ///
    /// One pipelined round trip; keys with no recorded reactions come back
    /// zero-filled. An empty batch is a validation error.
    #[instrument(skip(self))]
    pub async fn get_reactions(
        &self,
        keys: &[String],
    ) -> ServiceResult<HashMap<String, ReactionCounts>> {
        if keys.is_empty() {
            return Err(ServiceError::validation("At least one image key is required"));
        }

        self.ctx
            .reaction_store()
            .get_many(keys)
            .await
            .map_err(ServiceError::counter_store)
    }

    /// Record one reaction and return the post-increment count for that kind.
    ///
    /// The kind and the slug embedded in the key's first path segment are
    /// both validated before touching the counter store. The per-kind
    /// counter and the event ranking score move in one atomic transaction.
    #[instrument(skip(self))]
    pub async fn react(&self, key: &str, kind: &str) -> ServiceResult<u64> {
        let kind: ReactionKind = kind
            .parse()
            .map_err(|_| DomainError::InvalidReactionKind(kind.to_string()))?;
        let slug = EventSlug::from_key(key)?;

        self.ctx
            .reaction_store()
            .increment(key, kind, &slug)
            .await
            .map_err(ServiceError::counter_store)
    }

    /// Top images for an event by total reaction score, descending.
    ///
    /// `limit` defaults to [`DEFAULT_RANKING_LIMIT`] and is clamped to
    /// [`MAX_RANKING_LIMIT`]; zero is treated as absent.
    #[instrument(skip(self))]
    pub async fn get_ranking(
        &self,
        slug: &str,
        limit: Option<usize>,
    ) -> ServiceResult<Vec<RankingEntry>> {
        let slug = EventSlug::parse(slug)?;
        let limit = match limit {
            Some(0) | None => DEFAULT_RANKING_LIMIT,
            Some(n) => n.min(MAX_RANKING_LIMIT),
        };

        self.ctx
            .ranking_store()
            .top(&slug, limit)
            .await
            .map_err(ServiceError::counter_store)
    }
}
