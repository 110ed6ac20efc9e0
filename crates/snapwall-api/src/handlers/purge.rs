//! Event purge handler (admin)

use axum::extract::{Query, State};
use serde::Deserialize;
use snapwall_service::{PurgeOutcome, PurgeService};

use crate::extractors::AdminBearer;
use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Query parameters for purge
#[derive(Debug, Deserialize)]
pub struct PurgeQuery {
    pub slug: String,
}

/// Delete every object and counter key belonging to an event
///
/// DELETE /api/purge?slug=wedding (admin bearer required)
pub async fn purge_event(
    State(state): State<AppState>,
    admin: AdminBearer,
    Query(query): Query<PurgeQuery>,
) -> ApiResult<ApiJson<PurgeOutcome>> {
    let report = PurgeService::new(state.service_context())
        .purge(&query.slug, admin.token())
        .await?;

    Ok(ApiJson(PurgeOutcome::purged(
        &query.slug,
        report.deleted_objects,
        report.deleted_counters,
    )))
}
