//! # snapwall-service
//!
//! Business logic layer: gallery listing/pagination, event purge, reaction
//! counters and ranking, presigned uploads, on-the-fly thumbnails, and admin
//! stats. Services depend on the store abstractions, never on the SDKs.

pub mod dto;
pub mod services;

pub use dto::{
    EventStats, HealthResponse, ListingPage, PurgeOutcome, RankingResponse, ReactRequest,
    ReactResponse, ReadinessResponse, UploadGrant, UploadRequest,
};
pub use services::{
    ListingService, PurgeReport, PurgeService, ReactionService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, StatsService, ThumbnailService,
    UploadService,
};
