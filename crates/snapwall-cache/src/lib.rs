//! # snapwall-cache
//!
//! Redis counter-store layer for reactions and the per-event leaderboard.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Reaction Counters**: pipelined batch reads, atomic dual increment
//!   (per-kind counter + ranking score in one MULTI/EXEC)
//! - **Ranking**: per-event sorted set queried top-N by score
//! - **Event Purge**: slug-scoped deletion of all counter state
//!
//! Key layout: `reactions:{key}` hashes (fields `heart|laugh|sparkle|crown`)
//! and `ranking:{slug}` sorted sets keyed by image key.

pub mod keys;
pub mod pool;
pub mod ranking;
pub mod reactions;

// Re-export pool types
pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult, SharedRedisPool};

// Re-export store types
pub use ranking::RankingStore;
pub use reactions::ReactionStore;
