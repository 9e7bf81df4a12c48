//! # Pricing Strategy
//!
//! Converts a [`TopicOverlap`] into a quote.
//!
//! This module provides the [`PricingStrategy`] trait and the
//! [`TieredPricingStrategy`] used by the quote engine:
//!
//! | overlap | quote                                              |
//! |---------|----------------------------------------------------|
//! | none    | 0                                                  |
//! | single  | `weight * rank_pct / 100`, rank 0/1/2 = 20/25/30 % |
//! | double  | `sum(weight * 10 / 100)` over both topics          |
//! | triple  | `sum(weight * 10 / 100)` over all three topics     |
//!
//! A single match at a lower rank earns a higher percentage, and any
//! multi-topic match earns less per topic than a single match. Both are
//! part of the pricing policy.

use crate::domain::errors::DomainResult;
use crate::domain::services::overlap::TopicOverlap;
use crate::domain::services::ranking::{Rank, RankedTopic};
use crate::domain::value_objects::arithmetic::{CheckedArithmetic, percent_of};
use crate::domain::value_objects::QuoteAmount;
use rust_decimal::Decimal;
use std::fmt;

/// Percentage applied to a single matched topic at rank 0.
pub const FIRST_RANK_PERCENTAGE: u32 = 20;
/// Percentage applied to a single matched topic at rank 1.
pub const SECOND_RANK_PERCENTAGE: u32 = 25;
/// Percentage applied to a single matched topic at rank 2.
pub const THIRD_RANK_PERCENTAGE: u32 = 30;
/// Flat percentage applied to each topic of a multi-topic match.
pub const MULTI_TOPIC_PERCENTAGE: u32 = 10;

/// Trait for pricing strategies.
///
/// Implementations turn an overlap classification into a quote amount.
pub trait PricingStrategy: Send + Sync + fmt::Debug {
    /// Prices a provider's overlap with the top topics.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Arithmetic` if the computation overflows.
    fn price(&self, overlap: &TopicOverlap<'_>) -> DomainResult<QuoteAmount>;

    /// Returns the name of this pricing strategy.
    fn name(&self) -> &'static str;
}

/// Rank-tiered single-topic pricing with a flat multi-topic rate.
///
/// # Examples
///
/// ```
/// use course_quotes::domain::services::pricing::TieredPricingStrategy;
/// use course_quotes::domain::services::ranking::Rank;
///
/// let strategy = TieredPricingStrategy::default();
/// assert_eq!(strategy.single_topic_percentage(Rank::First), 20);
/// assert_eq!(strategy.single_topic_percentage(Rank::Third), 30);
/// assert_eq!(strategy.multi_topic_percentage, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TieredPricingStrategy {
    /// Single-match percentage per rank, indexed by [`Rank::index`].
    pub rank_percentages: [u32; 3],
    /// Per-topic percentage for double and triple matches.
    pub multi_topic_percentage: u32,
}

impl Default for TieredPricingStrategy {
    fn default() -> Self {
        Self {
            rank_percentages: [
                FIRST_RANK_PERCENTAGE,
                SECOND_RANK_PERCENTAGE,
                THIRD_RANK_PERCENTAGE,
            ],
            multi_topic_percentage: MULTI_TOPIC_PERCENTAGE,
        }
    }
}

impl TieredPricingStrategy {
    /// Creates the default tiered strategy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the single-match percentage for `rank`.
    #[must_use]
    pub fn single_topic_percentage(&self, rank: Rank) -> u32 {
        let [first, second, third] = self.rank_percentages;
        match rank {
            Rank::First => first,
            Rank::Second => second,
            Rank::Third => third,
        }
    }

    fn single(&self, ranked: &RankedTopic) -> DomainResult<Decimal> {
        let percentage = self.single_topic_percentage(ranked.rank());
        Ok(percent_of(ranked.weight().get(), percentage)?)
    }

    fn flat(&self, matched: &[&RankedTopic]) -> DomainResult<Decimal> {
        let mut total = Decimal::ZERO;
        for ranked in matched {
            let contribution = percent_of(ranked.weight().get(), self.multi_topic_percentage)?;
            total = total.safe_add(contribution)?;
        }
        Ok(total)
    }
}

impl PricingStrategy for TieredPricingStrategy {
    fn price(&self, overlap: &TopicOverlap<'_>) -> DomainResult<QuoteAmount> {
        let amount = match overlap {
            TopicOverlap::None => Decimal::ZERO,
            TopicOverlap::Single(ranked) => self.single(ranked)?,
            TopicOverlap::Double(matched) => self.flat(matched)?,
            TopicOverlap::Triple(matched) => self.flat(matched)?,
        };
        Ok(QuoteAmount::new(amount))
    }

    fn name(&self) -> &'static str {
        "Tiered"
    }
}
