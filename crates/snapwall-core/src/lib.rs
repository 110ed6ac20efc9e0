//! # snapwall-core
//!
//! Domain layer containing entities, value objects, and store traits.
//! This crate has zero dependencies on infrastructure (object store SDK, Redis, web framework).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{GalleryImage, ObjectEntry, ObjectPage, RankingEntry, ReactionCounts, ReactionKind};
pub use error::DomainError;
pub use traits::{ObjectStore, StoreResult};
pub use value_objects::{EventSlug, SlugParseError};
