//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`Topic`]: a named subject of interest
//! - [`ProviderId`]: course provider identifier
//!
//! ## Numeric Types
//!
//! - [`Weight`]: non-negative requester interest
//! - [`QuoteAmount`]: computed quote with integer-normalizing serialization
//!
//! ## Arithmetic
//!
//! - [`ArithmeticError`]: Error type for arithmetic failures
//! - [`CheckedArithmetic`]: Trait for safe arithmetic operations

pub mod arithmetic;
pub mod ids;
pub mod quote_amount;
pub mod weight;

pub use arithmetic::{ArithmeticError, ArithmeticResult, CheckedArithmetic, percent_of};
pub use ids::{ProviderId, Topic};
pub use quote_amount::QuoteAmount;
pub use weight::Weight;
