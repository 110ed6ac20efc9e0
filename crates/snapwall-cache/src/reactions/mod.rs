//! Reaction counter storage

mod reaction_store;

pub use reaction_store::ReactionStore;
