//! # Domain Services
//!
//! The three steps of quote computation.
//!
//! ## Services
//!
//! - [`ranking`]: top-topic selection by weight
//! - [`overlap`]: specialization overlap classification
//! - [`pricing`]: overlap to quote conversion

pub mod overlap;
pub mod pricing;
pub mod ranking;

pub use overlap::TopicOverlap;
pub use pricing::{PricingStrategy, TieredPricingStrategy};
pub use ranking::{MAX_TOP_TOPICS, Rank, RankedTopic, TopTopics, rank_topics};
