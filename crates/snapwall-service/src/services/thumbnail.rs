//! Thumbnail service
//!
//! Renders WebP thumbnails from stored originals on demand. Decode and
//! resize are CPU-bound and run on a blocking task off the async runtime.

use std::io::Cursor;

use bytes::Bytes;
use image::codecs::webp::WebPEncoder;
use image::imageops::FilterType;
use tracing::instrument;

use snapwall_core::EventSlug;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Smallest accepted thumbnail width
pub const MIN_WIDTH: u32 = 16;
/// Largest accepted thumbnail width
pub const MAX_WIDTH: u32 = 2048;
/// Width used when the client does not specify one
pub const DEFAULT_WIDTH: u32 = 400;

/// Thumbnail service
pub struct ThumbnailService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ThumbnailService<'a> {
    /// Create a new ThumbnailService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Render a WebP thumbnail of the object at `key`.
    ///
    /// Width defaults to [`DEFAULT_WIDTH`] and is clamped to
    /// [`MIN_WIDTH`]..=[`MAX_WIDTH`]. Aspect ratio is preserved and images
    /// narrower than the target are re-encoded at their original size, never
    /// enlarged.
    #[instrument(skip(self))]
    pub async fn render(&self, key: &str, width: Option<u32>) -> ServiceResult<Bytes> {
        // The slug check also keeps arbitrary bucket paths out of this endpoint
        EventSlug::from_key(key)?;
        let width = width.unwrap_or(DEFAULT_WIDTH).clamp(MIN_WIDTH, MAX_WIDTH);

        let original = self.ctx.object_store().get_object(key).await?;

        let rendered = tokio::task::spawn_blocking(move || render_webp(&original, width))
            .await
            .map_err(|e| ServiceError::internal(format!("thumbnail task panicked: {e}")))??;

        Ok(Bytes::from(rendered))
    }
}

/// Decode, resize to at most `width` wide, and re-encode as WebP
fn render_webp(original: &[u8], width: u32) -> ServiceResult<Vec<u8>> {
    let img = image::load_from_memory(original)
        .map_err(|e| ServiceError::internal(format!("image decode failed: {e}")))?;

    let img = if img.width() > width {
        let height = scaled_height(img.width(), img.height(), width);
        img.resize(width, height, FilterType::Lanczos3)
    } else {
        img
    };

    let mut out = Cursor::new(Vec::new());
    img.write_with_encoder(WebPEncoder::new_lossless(&mut out))
        .map_err(|e| ServiceError::internal(format!("webp encode failed: {e}")))?;

    Ok(out.into_inner())
}

/// Height that preserves aspect ratio at the target width, never below 1
fn scaled_height(width: u32, height: u32, target_width: u32) -> u32 {
    let scaled = u64::from(height) * u64::from(target_width) / u64::from(width);
    u32::try_from(scaled).unwrap_or(u32::MAX).max(1)
}
