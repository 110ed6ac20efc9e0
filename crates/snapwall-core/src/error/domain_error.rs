//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::SlugParseError;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    InvalidSlug(#[from] SlugParseError),

    #[error("Invalid reaction type: {0}")]
    InvalidReactionKind(String),

    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),

    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Unauthorized")]
    Unauthorized,

    // =========================================================================
    // Not Found
    // =========================================================================
    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Counter store error: {0}")]
    CounterError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidSlug(_) => "INVALID_SLUG",
            Self::InvalidReactionKind(_) => "INVALID_REACTION_TYPE",
            Self::UnsupportedContentType(_) => "UNSUPPORTED_CONTENT_TYPE",
            Self::InvalidFilename(_) => "INVALID_FILENAME",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::ObjectNotFound(_) => "NOT_FOUND",
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::CounterError(_) => "COUNTER_STORE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidSlug(_)
                | Self::InvalidReactionKind(_)
                | Self::UnsupportedContentType(_)
                | Self::InvalidFilename(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ObjectNotFound(_))
    }

    /// Check if this wraps an upstream store failure
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::StorageError(_) | Self::CounterError(_))
    }
}
