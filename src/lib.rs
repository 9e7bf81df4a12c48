//! # Course Quotes
//!
//! Per-provider course quotes computed from weighted topic interests.
//!
//! A request names topics with non-negative weights. The three heaviest
//! topics are ranked, every provider in the catalog is matched against
//! them by specialization, and the overlap is priced:
//!
//! | overlap              | quote                                   |
//! |----------------------|-----------------------------------------|
//! | one topic, rank 1    | 20% of its weight                       |
//! | one topic, rank 2    | 25% of its weight                       |
//! | one topic, rank 3    | 30% of its weight                       |
//! | two or more topics   | 10% of the combined weight              |
//!
//! Providers whose quote is zero are left out of the result.
//!
//! # Architecture
//!
//! - [`domain`]: value objects, entities and the ranking, overlap and
//!   pricing services
//! - [`application`]: the [`QuoteEngine`](application::services::QuoteEngine)
//!   and the request use case
//! - [`infrastructure`]: catalog sources
//! - [`api`]: axum REST endpoints
//! - [`config`]: layered configuration
//! - [`telemetry`]: tracing setup
//!
//! # Example
//!
//! ```
//! use course_quotes::application::services::QuoteEngine;
//! use course_quotes::domain::entities::{ProviderCatalog, RequestedTopics};
//! use std::sync::Arc;
//!
//! let catalog = ProviderCatalog::from_pairs([
//!     ("provider_a", "math+science"),
//!     ("provider_b", "reading+science"),
//!     ("provider_c", "history+math"),
//! ]);
//! let engine = QuoteEngine::with_defaults(Arc::new(catalog));
//!
//! let requested: RequestedTopics = serde_json::from_str(
//!     r#"{"reading": 20, "math": 50, "science": 30, "history": 15, "art": 10}"#,
//! )
//! .unwrap();
//!
//! let quotes = engine.compute_quotes(&requested).unwrap();
//! assert_eq!(
//!     serde_json::to_string(&quotes).unwrap(),
//!     r#"{"provider_a":8,"provider_b":5,"provider_c":10}"#
//! );
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;
