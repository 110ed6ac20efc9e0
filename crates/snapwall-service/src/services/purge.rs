//! Event purge service
//!
//! Admin-only bulk deletion of everything an event left behind: stored
//! objects and counter-store state.

use tracing::{info, instrument};

use snapwall_core::EventSlug;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Objects deleted per batch (the store's bulk-delete ceiling)
pub const PURGE_BATCH_SIZE: i32 = 1000;

/// What a completed purge removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurgeReport {
    /// Objects deleted from the store
    pub deleted_objects: u64,
    /// Counter keys removed (reaction hashes plus the ranking set)
    pub deleted_counters: u64,
}

/// Event purge service
pub struct PurgeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PurgeService<'a> {
    /// Create a new PurgeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Delete every object and counter key belonging to an event.
    ///
    /// The credential is checked before any storage call. Deletion walks the
    /// full `{slug}/` prefix, which is wider than the listing prefix on
    /// purpose: derived artifacts under the event go too. Batches are
    /// sequential; a mid-run failure surfaces as one upstream error with no
    /// partial count, and a retry is naturally idempotent.
    #[instrument(skip(self, credential))]
    pub async fn purge(&self, slug: &str, credential: &str) -> ServiceResult<PurgeReport> {
        self.ctx.authorize_admin(credential)?;
        let slug = EventSlug::parse(slug)?;

        let mut deleted_objects: u64 = 0;
        let mut continuation_token: Option<String> = None;

        loop {
            let page = self
                .ctx
                .object_store()
                .list_page(&slug.event_prefix(), PURGE_BATCH_SIZE, continuation_token)
                .await?;

            let keys: Vec<String> = page
                .entries
                .into_iter()
                .filter_map(|entry| entry.key)
                .collect();

            if !keys.is_empty() {
                deleted_objects += self.ctx.object_store().delete_batch(keys).await? as u64;
            }

            continuation_token = page.next_continuation_token;
            if !page.is_truncated || continuation_token.is_none() {
                break;
            }
        }

        let deleted_counters = self
            .ctx
            .reaction_store()
            .purge_event(&slug)
            .await
            .map_err(ServiceError::counter_store)?;

        info!(
            slug = %slug,
            deleted_objects,
            deleted_counters,
            "Event purged"
        );

        Ok(PurgeReport {
            deleted_objects,
            deleted_counters,
        })
    }
}
