//! API Module
//!
//! HTTP API layer for the job board.
//! Each submodule handles endpoints for a specific domain.

pub mod error;
pub mod health;
pub mod job;

use axum::{Router, routing::get};
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

/// Create the main API router with all endpoints
pub fn create_router(pool: SqlitePool) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Job endpoints
        .route("/jobs", get(job::list_jobs).post(job::create_job))
        .route(
            "/jobs/{id}",
            get(job::get_job).put(job::update_job).delete(job::delete_job),
        )
        // Add state and middleware
        .with_state(pool)
        .layer(TraceLayer::new_for_http())
}
