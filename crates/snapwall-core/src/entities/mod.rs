//! Domain entities

mod image;
mod reaction;

pub use image::{GalleryImage, ObjectEntry, ObjectPage};
pub use reaction::{RankingEntry, ReactionCounts, ReactionKind};
