//! # Quote Engine
//!
//! Computes quotes for every provider in the catalog.
//!
//! This module provides the [`QuoteEngine`], which ranks the requested
//! topics once and then scores and prices each provider, keeping only
//! positive quotes. The engine is stateless: the catalog is injected at
//! construction and never mutated, so one engine can serve concurrent
//! requests and identical inputs always give identical outputs.
//!
//! # Examples
//!
//! ```
//! use course_quotes::application::services::QuoteEngine;
//! use course_quotes::domain::entities::{ProviderCatalog, RequestedTopics};
//! use std::sync::Arc;
//!
//! let catalog = ProviderCatalog::from_pairs([("provider_c", "history+math")]);
//! let engine = QuoteEngine::with_defaults(Arc::new(catalog));
//!
//! let requested: RequestedTopics =
//!     serde_json::from_str(r#"{"reading": 20, "math": 50, "science": 30}"#).unwrap();
//! let quotes = engine.compute_quotes(&requested).unwrap();
//!
//! assert_eq!(serde_json::to_string(&quotes).unwrap(), r#"{"provider_c":10}"#);
//! ```

use crate::domain::entities::{Provider, ProviderCatalog, ProviderQuotes, RequestedTopics};
use crate::domain::errors::DomainResult;
use crate::domain::services::overlap::TopicOverlap;
use crate::domain::services::pricing::{PricingStrategy, TieredPricingStrategy};
use crate::domain::services::ranking::{TopTopics, rank_topics};
use crate::domain::value_objects::QuoteAmount;
use std::sync::Arc;

/// Engine that turns requested topics into per-provider quotes.
#[derive(Debug, Clone)]
pub struct QuoteEngine {
    catalog: Arc<ProviderCatalog>,
    pricing_strategy: Arc<dyn PricingStrategy>,
}

impl QuoteEngine {
    /// Creates a new QuoteEngine.
    #[must_use]
    pub fn new(catalog: Arc<ProviderCatalog>, pricing_strategy: Arc<dyn PricingStrategy>) -> Self {
        Self {
            catalog,
            pricing_strategy,
        }
    }

    /// Creates a new engine with tiered pricing.
    #[must_use]
    pub fn with_defaults(catalog: Arc<ProviderCatalog>) -> Self {
        Self::new(catalog, Arc::new(TieredPricingStrategy::default()))
    }

    /// Computes quotes for all providers.
    ///
    /// Providers with a zero quote are omitted. An empty request yields an
    /// empty result.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Arithmetic` if pricing overflows for any provider.
    pub fn compute_quotes(&self, requested: &RequestedTopics) -> DomainResult<ProviderQuotes> {
        let mut quotes = ProviderQuotes::new();

        let top_topics = rank_topics(requested);
        if top_topics.is_empty() {
            return Ok(quotes);
        }

        for provider in self.catalog.iter() {
            let amount = self.quote_provider(&top_topics, provider)?;
            quotes.record(provider.id().clone(), amount);
        }

        Ok(quotes)
    }

    /// Prices a single provider against precomputed top topics.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Arithmetic` if pricing overflows.
    pub fn quote_provider(
        &self,
        top_topics: &TopTopics,
        provider: &Provider,
    ) -> DomainResult<QuoteAmount> {
        let overlap = TopicOverlap::between(top_topics, provider.specialization());
        let amount = self.pricing_strategy.price(&overlap)?;

        tracing::trace!(
            provider = %provider.id(),
            matches = overlap.match_count(),
            quote = %amount,
            "priced provider"
        );

        Ok(amount)
    }

    /// Returns the catalog this engine quotes against.
    #[must_use]
    pub fn catalog(&self) -> &ProviderCatalog {
        &self.catalog
    }

    /// Returns the pricing strategy name.
    #[must_use]
    pub fn pricing_strategy_name(&self) -> &'static str {
        self.pricing_strategy.name()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;
    use crate::domain::value_objects::{ArithmeticError, Weight};
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn example_request() -> RequestedTopics {
        serde_json::from_str(
            r#"{"reading": 20, "math": 50, "science": 30, "history": 15, "art": 10}"#,
        )
        .unwrap()
    }

    fn engine(pairs: &[(&str, &str)]) -> QuoteEngine {
        QuoteEngine::with_defaults(Arc::new(ProviderCatalog::from_pairs(
            pairs.iter().copied(),
        )))
    }

    fn amount(value: i64) -> QuoteAmount {
        QuoteAmount::new(Decimal::from(value))
    }

    #[test]
    fn end_to_end_example() {
        let engine = engine(&[
            ("provider_a", "math+science"),
            ("provider_b", "reading+science"),
            ("provider_c", "history+math"),
            ("provider_d", "reading+art"),
            ("provider_e", "history+art"),
            ("provider_f", "math"),
        ]);

        let quotes = engine.compute_quotes(&example_request()).unwrap();

        assert_eq!(quotes.get("provider_a"), Some(amount(8)));
        assert_eq!(quotes.get("provider_b"), Some(amount(5)));
        assert_eq!(quotes.get("provider_c"), Some(amount(10)));
        assert_eq!(quotes.get("provider_d"), Some(amount(6)));
        assert_eq!(quotes.get("provider_e"), None);
        assert_eq!(quotes.get("provider_f"), Some(amount(10)));
        assert_eq!(quotes.len(), 5);
    }

    #[test]
    fn output_follows_catalog_order() {
        let engine = engine(&[
            ("zeta", "math"),
            ("alpha", "science"),
            ("mid", "reading"),
        ]);
        let quotes = engine.compute_quotes(&example_request()).unwrap();
        let ids: Vec<&str> = quotes.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn empty_request_yields_empty_result() {
        let engine = engine(&[("provider_a", "math")]);
        let quotes = engine.compute_quotes(&RequestedTopics::new()).unwrap();
        assert!(quotes.is_empty());
    }

    #[test]
    fn empty_catalog_yields_empty_result() {
        let engine = engine(&[]);
        assert!(engine.compute_quotes(&example_request()).unwrap().is_empty());
    }

    #[test]
    fn zero_weight_match_is_omitted() {
        let engine = engine(&[("provider_a", "math")]);
        let requested =
            RequestedTopics::from_pairs([("math", Weight::ZERO), ("art", Weight::from_units(5))])
                .unwrap();
        assert!(engine.compute_quotes(&requested).unwrap().is_empty());
    }

    #[test]
    fn malformed_specializations_do_not_fail() {
        let engine = engine(&[("blank", ""), ("plus", "+++"), ("ok", "math++")]);
        let quotes = engine.compute_quotes(&example_request()).unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes.get("ok"), Some(amount(10)));
    }

    #[test]
    fn triple_overlap_priced_at_flat_rate() {
        let engine = engine(&[("all", "reading+science+math")]);
        let quotes = engine.compute_quotes(&example_request()).unwrap();
        assert_eq!(quotes.get("all"), Some(amount(10)));
    }

    #[test]
    fn fractional_quote_is_kept() {
        let engine = engine(&[("p", "history+science")]);
        let quotes = engine.compute_quotes(&example_request()).unwrap();
        assert_eq!(quotes.get("p"), Some(QuoteAmount::new(Decimal::new(75, 1))));
        assert_eq!(serde_json::to_string(&quotes).unwrap(), r#"{"p":7.5}"#);
    }

    #[test]
    fn whole_quote_beyond_i64_stays_an_integer() {
        let engine = engine(&[("p", "math")]);
        let weight = Decimal::from_i128_with_scale(100_000_000_000_000_000_000, 0);
        let requested =
            RequestedTopics::from_pairs([("math", Weight::new(weight).unwrap())]).unwrap();

        let quotes = engine.compute_quotes(&requested).unwrap();
        assert_eq!(
            serde_json::to_string(&quotes).unwrap(),
            r#"{"p":20000000000000000000}"#
        );
    }

    #[test]
    fn largest_weight_is_priced() {
        let engine = engine(&[("p", "math")]);
        let requested =
            RequestedTopics::from_pairs([("math", Weight::new(Decimal::MAX).unwrap())]).unwrap();
        let quotes = engine.compute_quotes(&requested).unwrap();
        assert!(quotes.get("p").unwrap().is_positive());
    }

    #[derive(Debug)]
    struct OverflowingStrategy;

    impl PricingStrategy for OverflowingStrategy {
        fn price(&self, _overlap: &TopicOverlap<'_>) -> DomainResult<QuoteAmount> {
            Err(ArithmeticError::Overflow.into())
        }

        fn name(&self) -> &'static str {
            "Overflowing"
        }
    }

    #[test]
    fn pricing_failure_surfaces_as_domain_error() {
        let engine = QuoteEngine::new(
            Arc::new(ProviderCatalog::from_pairs([("p", "math")])),
            Arc::new(OverflowingStrategy),
        );
        let err = engine.compute_quotes(&example_request()).unwrap_err();
        assert_eq!(err, DomainError::Arithmetic(ArithmeticError::Overflow));
    }

    #[test]
    fn idempotent() {
        let engine = engine(&[("a", "math+science"), ("b", "reading")]);
        let first = engine.compute_quotes(&example_request()).unwrap();
        let second = engine.compute_quotes(&example_request()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn accessors() {
        let engine = engine(&[("a", "math")]);
        assert_eq!(engine.catalog().len(), 1);
        assert_eq!(engine.pricing_strategy_name(), "Tiered");
    }

    proptest! {
        #[test]
        fn providers_without_overlap_never_appear(
            weights in prop::collection::vec(0u32..100, 1..6),
            specs in prop::collection::vec(
                prop::collection::vec(prop::sample::select(vec!["t0", "t1", "t2", "t3", "t4", "x"]), 0..4),
                0..8,
            ),
        ) {
            let requested = RequestedTopics::from_pairs(
                weights.iter().enumerate().map(|(i, w)| (format!("t{i}"), Weight::from_units(*w))),
            )
            .unwrap();
            let catalog = ProviderCatalog::from_pairs(
                specs.iter().enumerate().map(|(i, s)| (format!("p{i}"), s.join("+"))),
            );
            let engine = QuoteEngine::with_defaults(Arc::new(catalog.clone()));

            let top = rank_topics(&requested);
            let quotes = engine.compute_quotes(&requested).unwrap();

            for provider in catalog.iter() {
                let overlaps = top
                    .iter()
                    .any(|t| provider.specialization().covers(t.topic().as_str()));
                if !overlaps {
                    prop_assert!(quotes.get(provider.id().as_str()).is_none());
                }
            }
            for (_, amount) in quotes.iter() {
                prop_assert!(amount.is_positive());
            }
        }
    }
}
