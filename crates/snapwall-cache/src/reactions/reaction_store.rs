//! Reaction counter storage in Redis.
//!
//! Per-image counts live in a hash `reactions:{key}` with one field per
//! reaction kind; the per-event leaderboard is a sorted set `ranking:{slug}`
//! scored by total reactions. Counters are created lazily on first increment
//! and removed only by event purge.

use std::collections::HashMap;

use snapwall_core::{EventSlug, ReactionCounts, ReactionKind};

use crate::keys;
use crate::pool::{RedisPool, RedisResult};

/// Reaction counter store
#[derive(Debug, Clone)]
pub struct ReactionStore {
    pool: RedisPool,
}

impl ReactionStore {
    /// Create a new reaction store
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    /// Batch-fetch reaction counts for the given image keys.
    ///
    /// One pipelined round trip regardless of key count. Keys with no prior
    /// reactions come back zero-filled, never absent.
    pub async fn get_many(&self, keys: &[String]) -> RedisResult<HashMap<String, ReactionCounts>> {
        if keys.is_empty() {
            return Ok(HashMap::new());
        }

        let mut conn = self.pool.get().await?;
        let mut pipe = redis::pipe();
        for key in keys {
            pipe.hgetall(keys::reactions_key(key));
        }

        // HGETALL on a missing key yields an empty map, which maps to zeros
        let raw: Vec<HashMap<String, u64>> = pipe.query_async(&mut conn).await?;

        let mut result = HashMap::with_capacity(keys.len());
        for (key, fields) in keys.iter().zip(raw) {
            let counts =
                ReactionCounts::from_fields(fields.iter().map(|(f, v)| (f.as_str(), *v)));
            result.insert(key.clone(), counts);
        }

        Ok(result)
    }

    /// Atomically record one reaction.
    ///
    /// Increments the per-kind counter and the event's ranking score in a
    /// single MULTI/EXEC transaction, so both derived views move together.
    /// Both increments are server-side atomic; concurrent reactions from
    /// different clients are never lost.
    ///
    /// Returns the post-increment count for `(image_key, kind)`.
    pub async fn increment(
        &self,
        image_key: &str,
        kind: ReactionKind,
        slug: &EventSlug,
    ) -> RedisResult<u64> {
        let mut conn = self.pool.get().await?;

        let (new_count, new_score): (u64, f64) = redis::pipe()
            .atomic()
            .hincr(keys::reactions_key(image_key), kind.as_str(), 1i64)
            .zincr(keys::ranking_key(slug), image_key, 1i64)
            .query_async(&mut conn)
            .await?;

        tracing::debug!(
            key = %image_key,
            kind = %kind,
            count = new_count,
            score = new_score,
            "Reaction recorded"
        );

        Ok(new_count)
    }

    /// Remove all counter state for one event: every `reactions:{slug}/...`
    /// hash plus the `ranking:{slug}` sorted set.
    ///
    /// Returns the number of Redis keys removed.
    pub async fn purge_event(&self, slug: &EventSlug) -> RedisResult<u64> {
        let pattern = keys::event_reactions_pattern(slug);
        let mut doomed = self.pool.scan_keys(&pattern, 100).await?;
        doomed.push(keys::ranking_key(slug));

        let deleted = self.pool.delete_many(&doomed).await?;

        tracing::info!(slug = %slug, deleted, "Purged event counters");
        Ok(deleted)
    }
}

