//! # Domain Layer
//!
//! Pure quote-computation model: value objects, entities and the ranking,
//! overlap and pricing services. Nothing in this layer performs I/O.

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;
