//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of gallery operations.

pub mod context;
pub mod error;
pub mod listing;
pub mod purge;
pub mod reaction;
pub mod stats;
pub mod thumbnail;
pub mod upload;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use listing::ListingService;
pub use purge::{PurgeReport, PurgeService};
pub use reaction::ReactionService;
pub use stats::StatsService;
pub use thumbnail::ThumbnailService;
pub use upload::UploadService;
