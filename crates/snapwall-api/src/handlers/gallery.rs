//! Gallery listing handler

use axum::extract::{Query, State};
use serde::Deserialize;
use snapwall_service::{ListingPage, ListingService};

use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Query parameters for listing
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub slug: String,
    /// Continuation token from the previous page
    pub token: Option<String>,
}

/// List one page of gallery images
///
/// GET /api/list?slug=wedding&token=...
pub async fn list_images(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<ApiJson<ListingPage>> {
    let page = ListingService::new(state.service_context())
        .list(&query.slug, query.token)
        .await?;

    Ok(ApiJson(page))
}
