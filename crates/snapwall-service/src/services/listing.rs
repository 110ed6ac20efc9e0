//! Gallery listing service
//!
//! Pages through the event's `original/` prefix and shapes entries for the
//! guest gallery.

use tracing::instrument;

use snapwall_core::{EventSlug, GalleryImage};

use crate::dto::ListingPage;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Objects fetched per listing page
pub const PAGE_SIZE: i32 = 100;

/// Gallery listing service
pub struct ListingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ListingService<'a> {
    /// Create a new ListingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List one page of gallery images for an event.
    ///
    /// Directory markers (zero-size or keyless entries) are filtered out.
    /// The page is sorted newest-first by upload time. The sort is
    /// page-local: the store pages lexicographically by key, so ordering is
    /// not globally monotonic across pages.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        slug: &str,
        continuation_token: Option<String>,
    ) -> ServiceResult<ListingPage> {
        let slug = EventSlug::parse(slug)?;

        let page = self
            .ctx
            .object_store()
            .list_page(&slug.original_prefix(), PAGE_SIZE, continuation_token)
            .await?;

        let mut images: Vec<GalleryImage> = page
            .entries
            .iter()
            .filter_map(|entry| GalleryImage::from_entry(entry, self.ctx.public_base_url()))
            .collect();

        images.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));

        Ok(ListingPage {
            images,
            next_continuation_token: page.next_continuation_token,
            is_truncated: page.is_truncated,
        })
    }
}
