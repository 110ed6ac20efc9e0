//! Upload service
//!
//! Issues presigned PUT URLs so clients upload directly to the object store;
//! image bytes never pass through this server.

use tracing::{info, instrument};

use snapwall_core::{DomainError, EventSlug};

use crate::dto::{UploadGrant, UploadRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Content types accepted for upload
pub const ALLOWED_CONTENT_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

/// Upload service
pub struct UploadService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UploadService<'a> {
    /// Create a new UploadService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Issue a presigned upload slot for one image.
    ///
    /// Validates slug, filename, and content type before any store call. The
    /// signed request pins the content type and an immutable one-year cache
    /// header; the key is `{slug}/original/{filename}` with the filename
    /// reduced to a safe character set.
    #[instrument(skip(self, request), fields(slug = %request.slug))]
    pub async fn create_upload(&self, request: &UploadRequest) -> ServiceResult<UploadGrant> {
        let slug = EventSlug::parse(request.slug.as_str())?;

        if !ALLOWED_CONTENT_TYPES.contains(&request.content_type.as_str()) {
            return Err(DomainError::UnsupportedContentType(request.content_type.clone()).into());
        }

        let filename = sanitize_filename(&request.filename)?;
        let key = format!("{}{filename}", slug.original_prefix());

        let signed_url = self
            .ctx
            .object_store()
            .presign_put(&key, &request.content_type, self.ctx.presign_ttl())
            .await?;

        info!(key = %key, content_type = %request.content_type, "Upload slot issued");

        Ok(UploadGrant { signed_url, key })
    }
}

/// Reduce a client-supplied filename to a safe character set.
///
/// Only the final path component is kept, then every character outside
/// `A-Za-z0-9._-` becomes `_`. A name that sanitizes to nothing but
/// separators is rejected rather than silently renamed.
fn sanitize_filename(raw: &str) -> ServiceResult<String> {
    let base = raw
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.is_empty() || cleaned.chars().all(|c| matches!(c, '.' | '_' | '-')) {
        return Err(
            ServiceError::from(DomainError::InvalidFilename(raw.to_string()))
        );
    }

    Ok(cleaned)
}
