//! # Application Services
//!
//! Services that orchestrate domain logic.
//!
//! This module provides:
//! - [`QuoteEngine`]: ranks requested topics and prices every provider

pub mod quote_engine;

pub use quote_engine::QuoteEngine;
