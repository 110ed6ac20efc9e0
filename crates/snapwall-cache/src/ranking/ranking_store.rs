//! Per-event leaderboard queries against the `ranking:{slug}` sorted set.

use redis::AsyncCommands;

use snapwall_core::{EventSlug, RankingEntry};

use crate::keys;
use crate::pool::{RedisPool, RedisResult};

/// Leaderboard store
#[derive(Debug, Clone)]
pub struct RankingStore {
    pool: RedisPool,
}

impl RankingStore {
    /// Create a new ranking store
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    /// Top `limit` images by total reaction score, descending.
    ///
    /// Tie-break: Redis orders equal-score members lexicographically by
    /// member, so the reversed range yields reverse-lexicographic key order
    /// among ties. Stable but otherwise unspecified.
    pub async fn top(&self, slug: &EventSlug, limit: usize) -> RedisResult<Vec<RankingEntry>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let mut conn = self.pool.get().await?;
        let raw: Vec<(String, f64)> = conn
            .zrevrange_withscores(keys::ranking_key(slug), 0, limit as isize - 1)
            .await?;

        Ok(raw
            .into_iter()
            .map(|(key, score)| RankingEntry {
                key,
                score: score.max(0.0) as u64,
            })
            .collect())
    }

    /// Total reactions across the whole event (sum of all scores)
    pub async fn total_reactions(&self, slug: &EventSlug) -> RedisResult<u64> {
        let mut conn = self.pool.get().await?;
        let raw: Vec<(String, f64)> = conn
            .zrevrange_withscores(keys::ranking_key(slug), 0, -1)
            .await?;

        Ok(raw.iter().map(|(_, score)| score.max(0.0) as u64).sum())
    }
}
