//! Event statistics service (admin)
//!
//! Aggregates a whole event: image count, stored bytes, newest upload, and
//! total reactions.

use chrono::{DateTime, Utc};
use tracing::instrument;

use snapwall_core::EventSlug;

use crate::dto::EventStats;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::listing::PAGE_SIZE;

/// Event statistics service
pub struct StatsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatsService<'a> {
    /// Create a new StatsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Aggregate statistics for one event.
    ///
    /// Admin-authenticated. Walks every page under the event's `original/`
    /// prefix, so cost grows with event size; this endpoint is for the
    /// organizer dashboard, not the guest path.
    #[instrument(skip(self, credential))]
    pub async fn stats(&self, slug: &str, credential: &str) -> ServiceResult<EventStats> {
        self.ctx.authorize_admin(credential)?;
        let slug = EventSlug::parse(slug)?;

        let mut image_count: u64 = 0;
        let mut total_bytes: u64 = 0;
        let mut latest: Option<DateTime<Utc>> = None;
        let mut continuation_token: Option<String> = None;

        loop {
            let page = self
                .ctx
                .object_store()
                .list_page(&slug.original_prefix(), PAGE_SIZE, continuation_token)
                .await?;

            for entry in &page.entries {
                if !entry.is_image() {
                    continue;
                }
                image_count += 1;
                total_bytes += entry.size.unwrap_or_default().max(0) as u64;
                if entry.last_modified > latest {
                    latest = entry.last_modified;
                }
            }

            continuation_token = page.next_continuation_token;
            if !page.is_truncated || continuation_token.is_none() {
                break;
            }
        }

        let total_reactions = self
            .ctx
            .ranking_store()
            .total_reactions(&slug)
            .await
            .map_err(ServiceError::counter_store)?;

        Ok(EventStats {
            image_count,
            total_bytes,
            latest,
            total_reactions,
        })
    }
}
