//! Integration test utilities for the gallery server
//!
//! This crate provides helpers for running end-to-end tests against the
//! REST API with a real S3-compatible store and Redis behind it.

pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
