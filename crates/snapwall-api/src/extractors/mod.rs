//! Axum extractors for request handling
//!
//! Custom extractors for admin credentials and validated JSON bodies.

mod auth;
mod validated;

pub use auth::AdminBearer;
pub use validated::ValidatedJson;
