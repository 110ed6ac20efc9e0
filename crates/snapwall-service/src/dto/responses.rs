//! Response DTOs for API endpoints
//!
//! Field names follow the public wire format (camelCase), hence the serde
//! renames.

use chrono::{DateTime, Utc};
use serde::Serialize;

use snapwall_core::{GalleryImage, RankingEntry};

/// One page of the event gallery
#[derive(Debug, Clone, Serialize)]
pub struct ListingPage {
    /// Images in display order (newest first within the page)
    pub images: Vec<GalleryImage>,

    /// Cursor for the next page, absent when exhausted
    #[serde(rename = "nextContinuationToken", skip_serializing_if = "Option::is_none")]
    pub next_continuation_token: Option<String>,

    /// Whether more pages exist
    #[serde(rename = "isTruncated")]
    pub is_truncated: bool,
}

/// Result of an event purge
#[derive(Debug, Clone, Serialize)]
pub struct PurgeOutcome {
    pub success: bool,
    pub message: String,
}

impl PurgeOutcome {
    /// Build the response body from a completed purge
    #[must_use]
    pub fn purged(slug: &str, deleted_objects: u64, deleted_counters: u64) -> Self {
        Self {
            success: true,
            message: format!(
                "Purged event '{slug}': {deleted_objects} objects, {deleted_counters} counter keys"
            ),
        }
    }
}

/// Result of recording a reaction
#[derive(Debug, Clone, Serialize)]
pub struct ReactResponse {
    pub success: bool,

    /// Post-increment count for the reacted kind
    #[serde(rename = "newValue")]
    pub new_value: u64,
}

/// Per-event leaderboard
#[derive(Debug, Clone, Serialize)]
pub struct RankingResponse {
    pub ranking: Vec<RankingEntry>,
}

/// Presigned upload slot
#[derive(Debug, Clone, Serialize)]
pub struct UploadGrant {
    /// PUT here with the declared content type
    #[serde(rename = "signedUrl")]
    pub signed_url: String,

    /// Object key the upload will land at
    pub key: String,
}

/// Aggregate event statistics (admin)
#[derive(Debug, Clone, Serialize)]
pub struct EventStats {
    #[serde(rename = "imageCount")]
    pub image_count: u64,

    #[serde(rename = "totalBytes")]
    pub total_bytes: u64,

    /// Newest upload timestamp, absent for an empty event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest: Option<DateTime<Utc>>,

    #[serde(rename = "totalReactions")]
    pub total_reactions: u64,
}

/// Liveness check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each backing service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub storage: String,
    pub redis: String,
}

impl ReadinessResponse {
    pub fn ready(storage_healthy: bool, redis_healthy: bool) -> Self {
        let all_healthy = storage_healthy && redis_healthy;
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                storage: if storage_healthy { "healthy" } else { "unhealthy" }.to_string(),
                redis: if redis_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
