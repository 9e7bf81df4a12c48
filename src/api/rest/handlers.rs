//! # REST Handlers
//!
//! Request handlers, shared state and response types.

use crate::application::error::ApplicationError;
use crate::application::use_cases::{CalculateQuotesRequest, CalculateQuotesUseCase};
use crate::domain::entities::ProviderQuotes;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "course-quotes";

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Quote calculation use case.
    pub use_case: CalculateQuotesUseCase,
}

impl AppState {
    /// Creates new state around a use case.
    #[must_use]
    pub fn new(use_case: CalculateQuotesUseCase) -> Self {
        Self { use_case }
    }
}

/// Error body: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    /// Human-readable message.
    pub error: String,
    #[serde(skip)]
    status: StatusCode,
}

impl ErrorResponse {
    /// Creates a 400 response.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            status: StatusCode::BAD_REQUEST,
        }
    }

    /// Creates a 500 response with a generic message.
    #[must_use]
    pub fn internal() -> Self {
        Self {
            error: "internal server error".to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the HTTP status.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl Default for ErrorResponse {
    fn default() -> Self {
        Self::internal()
    }
}

impl From<ApplicationError> for ErrorResponse {
    fn from(err: ApplicationError) -> Self {
        if err.is_validation() {
            Self::bad_request(err.to_string())
        } else {
            tracing::error!(error = %err, "request failed");
            Self::internal()
        }
    }
}

impl From<JsonRejection> for ErrorResponse {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "rejected request body");
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// Health check body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `healthy` while the process serves requests.
    pub status: String,
    /// Service name.
    pub service: String,
    /// Crate version.
    pub version: String,
    /// Number of providers in the loaded catalog.
    pub providers: usize,
}

/// `POST /course_quotes`
///
/// Computes quotes for the topics in the body.
///
/// # Errors
///
/// Returns 400 for unparsable bodies and missing or invalid topics, 500
/// for anything else.
pub async fn calculate_quotes(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CalculateQuotesRequest>, JsonRejection>,
) -> Result<Json<ProviderQuotes>, ErrorResponse> {
    let Json(request) = payload?;
    let quotes = state.use_case.execute(request)?;
    Ok(Json(quotes))
}

/// `GET /api/v1/health`
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        providers: state.use_case.engine().catalog().len(),
    })
}
