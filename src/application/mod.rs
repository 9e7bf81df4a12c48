//! # Application Layer
//!
//! Orchestrates the domain for quote requests.
//!
//! - [`services::QuoteEngine`]: prices every catalog provider
//! - [`use_cases::CalculateQuotesUseCase`]: request validation and policy
//! - [`error`]: application and infrastructure errors

pub mod error;
pub mod services;
pub mod use_cases;
