//! Redis key layout, shared by the reaction and ranking stores.
//!
//! Keeping the schema in one place means the writer (`ReactionStore`) and
//! the reader (`RankingStore`) can never drift apart on key names.

use snapwall_core::EventSlug;

/// Key prefix for per-image reaction hashes
pub const REACTIONS_PREFIX: &str = "reactions:";
/// Key prefix for per-event ranking sorted sets
pub const RANKING_PREFIX: &str = "ranking:";

/// Redis key for an image's reaction hash
#[must_use]
pub fn reactions_key(image_key: &str) -> String {
    format!("{REACTIONS_PREFIX}{image_key}")
}

/// Redis key for an event's ranking sorted set
#[must_use]
pub fn ranking_key(slug: &EventSlug) -> String {
    format!("{RANKING_PREFIX}{slug}")
}

/// SCAN pattern matching every reaction hash belonging to one event.
///
/// Image keys are `{slug}/...`, so their hashes all share this prefix.
#[must_use]
pub fn event_reactions_pattern(slug: &EventSlug) -> String {
    format!("{REACTIONS_PREFIX}{}*", slug.event_prefix())
}
