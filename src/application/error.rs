//! # Application Errors
//!
//! Error types for the application layer.
//!
//! These errors represent failures that can occur while serving a quote
//! request or bringing the service up, including validation failures,
//! pricing failures, and catalog loading errors.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Domain(DomainError)                 - Business rule / arithmetic failures
//! ├── Infrastructure(InfrastructureError) - Catalog and configuration failures
//! └── Validation(String)                  - Input validation failures
//! ```
//!
//! # Examples
//!
//! ```
//! use course_quotes::application::error::{ApplicationError, InfrastructureError};
//!
//! // Create validation error
//! let err = ApplicationError::validation("Request Missing required fields");
//! assert!(err.is_validation());
//!
//! // Create infrastructure error
//! let infra_err = InfrastructureError::invalid_catalog("missing provider_topics");
//! let app_err: ApplicationError = infra_err.into();
//! assert!(!app_err.is_validation());
//! ```

use crate::domain::errors::DomainError;
use std::path::PathBuf;
use thiserror::Error;

/// Infrastructure layer error.
///
/// Represents errors from external resources such as the provider catalog
/// file and the process configuration.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// The catalog file does not exist.
    #[error("catalog file missing: {}", path.display())]
    CatalogNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// I/O error while reading an external resource.
    #[error("io error: {0}")]
    Io(String),

    /// Document is not valid JSON or not valid UTF-8.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Document is valid JSON but does not describe a catalog.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl InfrastructureError {
    /// Creates a catalog not found error.
    #[must_use]
    pub fn catalog_not_found(path: impl Into<PathBuf>) -> Self {
        Self::CatalogNotFound { path: path.into() }
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Creates an invalid catalog error.
    #[must_use]
    pub fn invalid_catalog(message: impl Into<String>) -> Self {
        Self::InvalidCatalog(message.into())
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Result type for infrastructure operations.
pub type InfrastructureResult<T> = Result<T, InfrastructureError>;

/// Application layer error.
///
/// Wraps domain and infrastructure errors with application-specific
/// context for request handling failures.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain error from business logic.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Infrastructure error from external resources.
    #[error("infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    /// Request validation failed.
    #[error("{0}")]
    Validation(String),
}

impl ApplicationError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Returns true if this error was caused by the caller's input.
    ///
    /// Domain validation failures (bad topic names or weights) count as
    /// caller errors; arithmetic failures do not.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        match self {
            Self::Validation(_) => true,
            Self::Domain(e) => e.is_validation(),
            _ => false,
        }
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
