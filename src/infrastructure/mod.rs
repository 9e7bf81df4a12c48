//! # Infrastructure Layer
//!
//! Adapters to the outside world.
//!
//! - [`catalog`]: provider catalog loading

pub mod catalog;
