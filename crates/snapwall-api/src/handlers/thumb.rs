//! Thumbnail handler

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use snapwall_service::ThumbnailService;
use snapwall_storage::CACHE_CONTROL_IMMUTABLE;

use crate::response::ApiResult;
use crate::state::AppState;

/// Query parameters for thumbnail rendering
#[derive(Debug, Deserialize)]
pub struct ThumbQuery {
    pub key: String,
    /// Target width in pixels
    pub w: Option<u32>,
}

/// Render a WebP thumbnail of a stored original
///
/// GET /api/thumb?key=wedding/original/a.jpg&w=400
pub async fn render_thumbnail(
    State(state): State<AppState>,
    Query(query): Query<ThumbQuery>,
) -> ApiResult<Response> {
    let bytes = ThumbnailService::new(state.service_context())
        .render(&query.key, query.w)
        .await?;

    Ok((
        [
            (header::CONTENT_TYPE, "image/webp"),
            (header::CACHE_CONTROL, CACHE_CONTROL_IMMUTABLE),
        ],
        bytes,
    )
        .into_response())
}
