//! # Use Cases
//!
//! Entry points invoked by the API layer.

pub mod calculate_quotes;

pub use calculate_quotes::{
    CalculateQuotesRequest, CalculateQuotesUseCase, EmptyTopicsPolicy, MISSING_FIELDS_MESSAGE,
};
