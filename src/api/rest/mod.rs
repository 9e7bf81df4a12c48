//! # REST API
//!
//! HTTP endpoints using axum.
//!
//! # Endpoints
//!
//! - `POST /course_quotes` - Compute quotes for `{"topics": {name: weight}}`
//! - `GET /api/v1/health` - Health check endpoint
//!
//! Errors are returned as `{"error": "..."}` with status 400 for bad
//! requests and 500 for internal failures.
//!
//! # Usage
//!
//! ```ignore
//! use course_quotes::api::rest::{create_router, AppState};
//! use std::sync::Arc;
//!
//! let router = create_router(Arc::new(AppState::new(use_case)));
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{AppState, ErrorResponse, HealthResponse, SERVICE_NAME};
pub use routes::create_router;
