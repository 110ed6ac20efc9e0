//! Reaction kinds, per-image counters, and ranking entries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of reaction kinds.
///
/// The variant names double as Redis hash field names and wire values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Heart,
    Laugh,
    Sparkle,
    Crown,
}

impl ReactionKind {
    /// All reaction kinds, in canonical order
    pub const ALL: [Self; 4] = [Self::Heart, Self::Laugh, Self::Sparkle, Self::Crown];

    /// Field name used on the wire and in the counter store
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Heart => "heart",
            Self::Laugh => "laugh",
            Self::Sparkle => "sparkle",
            Self::Crown => "crown",
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "heart" => Ok(Self::Heart),
            "laugh" => Ok(Self::Laugh),
            "sparkle" => Ok(Self::Sparkle),
            "crown" => Ok(Self::Crown),
            _ => Err(format!("Invalid reaction type: {s}")),
        }
    }
}

/// Per-image reaction counters, zero-filled by default.
///
/// A key with no prior reactions always yields all-zero counts, never a
/// missing entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionCounts {
    pub heart: u64,
    pub laugh: u64,
    pub sparkle: u64,
    pub crown: u64,
}

impl ReactionCounts {
    /// Get the count for one kind
    #[must_use]
    pub fn get(&self, kind: ReactionKind) -> u64 {
        match kind {
            ReactionKind::Heart => self.heart,
            ReactionKind::Laugh => self.laugh,
            ReactionKind::Sparkle => self.sparkle,
            ReactionKind::Crown => self.crown,
        }
    }

    /// Set the count for one kind
    pub fn set(&mut self, kind: ReactionKind, count: u64) {
        match kind {
            ReactionKind::Heart => self.heart = count,
            ReactionKind::Laugh => self.laugh = count,
            ReactionKind::Sparkle => self.sparkle = count,
            ReactionKind::Crown => self.crown = count,
        }
    }

    /// Total reactions across all kinds
    #[must_use]
    pub fn total(&self) -> u64 {
        ReactionKind::ALL.iter().map(|k| self.get(*k)).sum()
    }

    /// Build counts from `(field, value)` pairs, ignoring unknown fields.
    ///
    /// Unknown fields can appear if the hash is ever written by a newer
    /// deployment; they must not fail the read.
    pub fn from_fields<'a>(fields: impl IntoIterator<Item = (&'a str, u64)>) -> Self {
        let mut counts = Self::default();
        for (field, value) in fields {
            if let Ok(kind) = field.parse::<ReactionKind>() {
                counts.set(kind, value);
            }
        }
        counts
    }
}

/// One leaderboard entry: image key and its kind-agnostic reaction score.
///
/// Invariant: the score equals the number of successful reaction increments
/// ever issued for the key within its event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    /// Full image object key
    pub key: String,
    /// Total reactions received (all kinds)
    pub score: u64,
}
