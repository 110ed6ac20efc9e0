//! Store abstractions implemented by the infrastructure crates

mod object_store;

pub use object_store::{ObjectStore, StoreResult};
