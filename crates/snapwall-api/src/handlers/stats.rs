//! Event statistics handler (admin)

use axum::extract::{Query, State};
use serde::Deserialize;
use snapwall_service::{EventStats, StatsService};

use crate::extractors::AdminBearer;
use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Query parameters for stats
#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    pub slug: String,
}

/// Aggregate statistics for one event
///
/// GET /api/stats?slug=wedding (admin bearer required)
pub async fn event_stats(
    State(state): State<AppState>,
    admin: AdminBearer,
    Query(query): Query<StatsQuery>,
) -> ApiResult<ApiJson<EventStats>> {
    let stats = StatsService::new(state.service_context())
        .stats(&query.slug, admin.token())
        .await?;

    Ok(ApiJson(stats))
}
