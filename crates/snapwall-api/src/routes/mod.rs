//! Route definitions
//!
//! All API routes mounted under /api, with health probes kept separate so
//! they bypass rate limiting.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{gallery, health, purge, reactions, stats, thumb, upload};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        // Gallery
        .route("/list", get(gallery::list_images))
        // Admin
        .route("/purge", delete(purge::purge_event))
        .route("/stats", get(stats::event_stats))
        // Reactions
        .route("/reactions", get(reactions::get_reactions))
        .route("/reactions", post(reactions::react))
        .route("/ranking", get(reactions::get_ranking))
        // Uploads
        .route("/upload", post(upload::create_upload))
        // Thumbnails
        .route("/thumb", get(thumb::render_thumbnail))
}
