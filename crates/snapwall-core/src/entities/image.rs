//! Gallery image entities and raw store listing types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A raw entry as reported by the object store.
///
/// Key and size are optional because some stores materialize zero-byte
/// directory-marker pseudo-objects; the listing service filters those out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectEntry {
    /// Object key, if present
    pub key: Option<String>,
    /// Object size in bytes, if reported
    pub size: Option<i64>,
    /// Last modification timestamp, if reported
    pub last_modified: Option<DateTime<Utc>>,
}

impl ObjectEntry {
    /// An entry counts as a real image when it has a key and a non-zero size
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.key.is_some() && self.size.is_some_and(|s| s > 0)
    }
}

/// One page of a paginated store listing.
///
/// Invariant: concatenating pages in store order (following
/// `next_continuation_token` until exhausted) yields the complete,
/// non-overlapping set of objects under the prefix at listing time.
#[derive(Debug, Clone, Default)]
pub struct ObjectPage {
    /// Entries in store order (lexicographic by key)
    pub entries: Vec<ObjectEntry>,
    /// Opaque cursor for the next page, absent when exhausted
    pub next_continuation_token: Option<String>,
    /// Whether the store reports more results
    pub is_truncated: bool,
}

/// A gallery image as served to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    /// Full object key (`{slug}/original/{filename}`)
    pub key: String,
    /// Public URL when a base URL is configured, otherwise the raw key
    pub url: String,
    /// Upload timestamp as reported by the store
    #[serde(rename = "lastModified")]
    pub last_modified: DateTime<Utc>,
    /// Size in bytes
    pub size: i64,
}

impl GalleryImage {
    /// Build a gallery image from a store entry.
    ///
    /// Returns `None` for entries that are not real images (missing key or
    /// zero size). When `base_url` is set, the URL is the base joined with
    /// the key; a trailing slash on the base is trimmed first.
    #[must_use]
    pub fn from_entry(entry: &ObjectEntry, base_url: Option<&str>) -> Option<Self> {
        if !entry.is_image() {
            return None;
        }
        let key = entry.key.clone()?;
        let url = match base_url {
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), key),
            None => key.clone(),
        };
        Some(Self {
            key,
            url,
            last_modified: entry.last_modified.unwrap_or_default(),
            size: entry.size.unwrap_or_default(),
        })
    }
}
