//! # API Layer
//!
//! External interfaces for the quote service.
//!
//! - [`rest`]: HTTP endpoints using axum

pub mod rest;
