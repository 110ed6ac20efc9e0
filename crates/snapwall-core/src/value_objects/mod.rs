//! Value objects for the snapwall domain

mod event_slug;

pub use event_slug::{EventSlug, SlugParseError};
