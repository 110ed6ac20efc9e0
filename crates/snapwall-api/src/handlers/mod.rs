//! HTTP request handlers
//!
//! Thin layer over the services: extract, call, serialize.

pub mod gallery;
pub mod health;
pub mod purge;
pub mod reactions;
pub mod stats;
pub mod thumb;
pub mod upload;
