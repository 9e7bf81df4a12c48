//! # Domain Errors
//!
//! Error types for business rule violations in the quote domain.
//!
//! # Examples
//!
//! ```
//! use course_quotes::domain::errors::DomainError;
//! use course_quotes::domain::value_objects::ArithmeticError;
//!
//! let err = DomainError::InvalidWeight("weight must be non-negative".to_string());
//! assert!(err.is_validation());
//!
//! let err: DomainError = ArithmeticError::Overflow.into();
//! assert!(!err.is_validation());
//! ```

use crate::domain::value_objects::arithmetic::ArithmeticError;
use thiserror::Error;

/// Domain layer error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A topic name is not acceptable.
    #[error("invalid topic: {0}")]
    InvalidTopic(String),

    /// A topic weight is not acceptable.
    #[error("invalid weight: {0}")]
    InvalidWeight(String),

    /// Pricing arithmetic failed.
    #[error("pricing arithmetic failed: {0}")]
    Arithmetic(#[from] ArithmeticError),
}

impl DomainError {
    /// Returns true if this error was caused by caller-supplied input.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidTopic(_) | Self::InvalidWeight(_))
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
