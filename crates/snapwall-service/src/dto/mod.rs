//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs

pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{ReactRequest, UploadRequest};

// Re-export commonly used response types
pub use responses::{
    EventStats, HealthChecks, HealthResponse, ListingPage, PurgeOutcome, RankingResponse,
    ReactResponse, ReadinessResponse, UploadGrant,
};
