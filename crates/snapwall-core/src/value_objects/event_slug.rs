//! Event slug value object.
//!
//! The slug is the human-chosen event identifier and doubles as the namespace
//! prefix for every storage key and counter key. It is therefore validated at
//! the boundary: lowercase alphanumerics and hyphens only, so a slug can never
//! escape its namespace or collide with another event's keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum slug length in characters
pub const MAX_SLUG_LEN: usize = 64;

/// Validated event identifier.
///
/// Invariant: non-empty, at most [`MAX_SLUG_LEN`] characters, consisting only
/// of `a-z`, `0-9` and `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventSlug(String);

impl EventSlug {
    /// Parse and validate a raw slug string
    pub fn parse(raw: impl Into<String>) -> Result<Self, SlugParseError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(SlugParseError::Empty);
        }
        if raw.len() > MAX_SLUG_LEN {
            return Err(SlugParseError::TooLong {
                max: MAX_SLUG_LEN,
                actual: raw.len(),
            });
        }
        if !raw
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(SlugParseError::InvalidCharacters(raw));
        }
        Ok(Self(raw))
    }

    /// Extract and validate the slug from an object key.
    ///
    /// The event slug is the first path segment of a key such as
    /// `summer-party/original/photo.jpg`.
    pub fn from_key(key: &str) -> Result<Self, SlugParseError> {
        let first = key.split('/').next().unwrap_or_default();
        Self::parse(first)
    }

    /// Get the slug as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Storage prefix covering the full event namespace (`{slug}/`).
    ///
    /// Used by purge: deliberately broader than [`Self::original_prefix`] so
    /// that derived artifacts (thumbnails, exports) under the event are
    /// removed as well.
    #[must_use]
    pub fn event_prefix(&self) -> String {
        format!("{}/", self.0)
    }

    /// Storage prefix for uploaded originals (`{slug}/original/`)
    #[must_use]
    pub fn original_prefix(&self) -> String {
        format!("{}/original/", self.0)
    }
}

impl fmt::Display for EventSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EventSlug {
    type Err = SlugParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for EventSlug {
    type Error = SlugParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<EventSlug> for String {
    fn from(slug: EventSlug) -> Self {
        slug.0
    }
}

/// Errors from slug validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlugParseError {
    #[error("Slug must not be empty")]
    Empty,

    #[error("Slug too long: max {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("Slug contains invalid characters (allowed: a-z, 0-9, -): {0}")]
    InvalidCharacters(String),
}
