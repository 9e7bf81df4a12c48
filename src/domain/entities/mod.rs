//! # Domain Entities
//!
//! Core business concepts of the quote domain.
//!
//! ## Request Side
//!
//! - [`RequestedTopics`]: weighted topic interests, input-ordered
//!
//! ## Catalog Side
//!
//! - [`Provider`]: provider id plus [`Specialization`]
//! - [`ProviderCatalog`]: read-only provider table
//!
//! ## Result
//!
//! - [`ProviderQuotes`]: positive quotes per provider

pub mod catalog;
pub mod provider;
pub mod provider_quotes;
pub mod requested_topics;

pub use catalog::ProviderCatalog;
pub use provider::{Provider, SPECIALIZATION_SEPARATOR, Specialization};
pub use provider_quotes::ProviderQuotes;
pub use requested_topics::RequestedTopics;
