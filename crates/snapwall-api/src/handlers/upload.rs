//! Presigned upload handler

use axum::extract::State;
use snapwall_service::{UploadGrant, UploadRequest, UploadService};

use crate::extractors::ValidatedJson;
use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Issue a presigned upload slot
///
/// POST /api/upload body `{"slug", "filename", "contentType"}`
pub async fn create_upload(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UploadRequest>,
) -> ApiResult<ApiJson<UploadGrant>> {
    let grant = UploadService::new(state.service_context())
        .create_upload(&request)
        .await?;

    Ok(ApiJson(grant))
}
