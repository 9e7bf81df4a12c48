//! # Routes
//!
//! Router construction.

use crate::api::rest::handlers::{self, AppState};
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Builds the application router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/course_quotes", post(handlers::calculate_quotes))
        .route("/api/v1/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
