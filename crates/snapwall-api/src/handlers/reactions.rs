//! Reaction handlers: batch counts, recording, leaderboard

use std::collections::HashMap;

use axum::extract::{Query, State};
use serde::Deserialize;
use snapwall_core::ReactionCounts;
use snapwall_service::{RankingResponse, ReactRequest, ReactResponse, ReactionService};

use crate::extractors::ValidatedJson;
use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Query parameters for batch reaction counts
#[derive(Debug, Deserialize)]
pub struct ReactionsQuery {
    /// Comma-separated image keys
    pub keys: String,
}

/// Query parameters for the leaderboard
#[derive(Debug, Deserialize)]
pub struct RankingQuery {
    pub slug: String,
    pub limit: Option<usize>,
}

/// Fetch reaction counts for a batch of image keys
///
/// GET /api/reactions?keys=k1,k2,k3
pub async fn get_reactions(
    State(state): State<AppState>,
    Query(query): Query<ReactionsQuery>,
) -> ApiResult<ApiJson<HashMap<String, ReactionCounts>>> {
    let keys: Vec<String> = query
        .keys
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(String::from)
        .collect();

    let counts = ReactionService::new(state.service_context())
        .get_reactions(&keys)
        .await?;

    Ok(ApiJson(counts))
}

/// Record one reaction
///
/// POST /api/reactions body `{"key": "...", "type": "heart"}`
pub async fn react(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ReactRequest>,
) -> ApiResult<ApiJson<ReactResponse>> {
    let new_value = ReactionService::new(state.service_context())
        .react(&request.key, &request.kind)
        .await?;

    Ok(ApiJson(ReactResponse {
        success: true,
        new_value,
    }))
}

/// Top images for an event by reaction score
///
/// GET /api/ranking?slug=wedding&limit=10
pub async fn get_ranking(
    State(state): State<AppState>,
    Query(query): Query<RankingQuery>,
) -> ApiResult<ApiJson<RankingResponse>> {
    let ranking = ReactionService::new(state.service_context())
        .get_ranking(&query.slug, query.limit)
        .await?;

    Ok(ApiJson(RankingResponse { ranking }))
}
