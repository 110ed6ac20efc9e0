//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; structured inputs also derive
//! `Validate` for declarative field checks.

use serde::Deserialize;
use validator::Validate;

/// Record one reaction on an image
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReactRequest {
    /// Full object key of the image being reacted to
    #[validate(length(min = 1, max = 1024, message = "Image key must be 1-1024 characters"))]
    pub key: String,

    /// Reaction kind, wire name `type`
    #[serde(rename = "type")]
    pub kind: String,
}

/// Request a presigned upload slot
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UploadRequest {
    /// Target event slug
    #[validate(length(min = 1, max = 64, message = "Slug must be 1-64 characters"))]
    pub slug: String,

    /// Client-side filename, sanitized before use
    #[validate(length(min = 1, max = 255, message = "Filename must be 1-255 characters"))]
    pub filename: String,

    /// Declared MIME type of the upload
    #[serde(rename = "contentType")]
    pub content_type: String,
}
