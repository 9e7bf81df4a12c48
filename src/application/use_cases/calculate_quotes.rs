//! # Calculate Quotes Use Case
//!
//! Validates a quote request and runs it through the [`QuoteEngine`].
//!
//! The engine itself answers an empty topic mapping with an empty result.
//! Whether callers see that empty result or a validation error is decided
//! here by the configured [`EmptyTopicsPolicy`].

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::QuoteEngine;
use crate::domain::entities::{ProviderQuotes, RequestedTopics};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Message returned when a request carries no usable topics.
pub const MISSING_FIELDS_MESSAGE: &str = "Request Missing required fields";

/// How a request with an empty `topics` object is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyTopicsPolicy {
    /// Reject as a validation error.
    #[default]
    Reject,
    /// Answer with an empty quote mapping.
    EmptyResult,
}

impl fmt::Display for EmptyTopicsPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reject => write!(f, "reject"),
            Self::EmptyResult => write!(f, "empty_result"),
        }
    }
}

impl FromStr for EmptyTopicsPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reject" => Ok(Self::Reject),
            "empty_result" => Ok(Self::EmptyResult),
            other => Err(format!("unknown empty topics policy: {other}")),
        }
    }
}

/// Request body for a quote calculation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculateQuotesRequest {
    /// Requested topics with weights.
    pub topics: Option<RequestedTopics>,
}

impl CalculateQuotesRequest {
    /// Creates a request for the given topics.
    #[must_use]
    pub fn new(topics: RequestedTopics) -> Self {
        Self {
            topics: Some(topics),
        }
    }
}

/// Use case for computing provider quotes from a request.
#[derive(Debug, Clone)]
pub struct CalculateQuotesUseCase {
    engine: Arc<QuoteEngine>,
    empty_topics: EmptyTopicsPolicy,
}

impl CalculateQuotesUseCase {
    /// Creates a new use case.
    #[must_use]
    pub fn new(engine: Arc<QuoteEngine>, empty_topics: EmptyTopicsPolicy) -> Self {
        Self {
            engine,
            empty_topics,
        }
    }

    /// Returns the configured empty-topics policy.
    #[must_use]
    pub fn empty_topics_policy(&self) -> EmptyTopicsPolicy {
        self.empty_topics
    }

    /// Returns the underlying engine.
    #[must_use]
    pub fn engine(&self) -> &QuoteEngine {
        &self.engine
    }

    /// Executes the use case.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::Validation` if `topics` is missing, or empty
    ///   under [`EmptyTopicsPolicy::Reject`].
    /// - `ApplicationError::Domain` if pricing fails.
    pub fn execute(&self, request: CalculateQuotesRequest) -> ApplicationResult<ProviderQuotes> {
        let Some(topics) = request.topics else {
            return Err(ApplicationError::validation(MISSING_FIELDS_MESSAGE));
        };

        if topics.is_empty() && self.empty_topics == EmptyTopicsPolicy::Reject {
            return Err(ApplicationError::validation(MISSING_FIELDS_MESSAGE));
        }

        let quotes = self.engine.compute_quotes(&topics).map_err(|e| {
            tracing::error!(error = %e, topics = topics.len(), "quote computation failed");
            ApplicationError::from(e)
        })?;

        tracing::debug!(
            topics = topics.len(),
            quotes = quotes.len(),
            "computed course quotes"
        );

        Ok(quotes)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::ProviderCatalog;
    use crate::domain::errors::{DomainError, DomainResult};
    use crate::domain::services::{PricingStrategy, TopicOverlap};
    use crate::domain::value_objects::{ArithmeticError, QuoteAmount, Weight};
    use rust_decimal::Decimal;

    fn use_case(policy: EmptyTopicsPolicy) -> CalculateQuotesUseCase {
        let catalog = ProviderCatalog::from_pairs([
            ("provider_a", "math+science"),
            ("provider_b", "reading+science"),
            ("provider_c", "history+math"),
        ]);
        let engine = QuoteEngine::with_defaults(Arc::new(catalog));
        CalculateQuotesUseCase::new(Arc::new(engine), policy)
    }

    fn parse(json: &str) -> CalculateQuotesRequest {
        serde_json::from_str(json).unwrap()
    }

    mod policy {
        use super::*;

        #[test]
        fn default_is_reject() {
            assert_eq!(EmptyTopicsPolicy::default(), EmptyTopicsPolicy::Reject);
        }

        #[test]
        fn display_and_parse_agree() {
            for policy in [EmptyTopicsPolicy::Reject, EmptyTopicsPolicy::EmptyResult] {
                assert_eq!(policy.to_string().parse::<EmptyTopicsPolicy>().unwrap(), policy);
            }
            assert!("sometimes".parse::<EmptyTopicsPolicy>().is_err());
        }

        #[test]
        fn deserializes_snake_case() {
            let policy: EmptyTopicsPolicy = serde_json::from_str("\"empty_result\"").unwrap();
            assert_eq!(policy, EmptyTopicsPolicy::EmptyResult);
        }
    }

    #[test]
    fn computes_example_quotes() {
        let request = parse(
            r#"{"topics": {"reading": 20, "math": 50, "science": 30, "history": 15, "art": 10}}"#,
        );
        let quotes = use_case(EmptyTopicsPolicy::Reject).execute(request).unwrap();
        assert_eq!(
            serde_json::to_value(&quotes).unwrap(),
            serde_json::json!({"provider_a": 8, "provider_b": 5, "provider_c": 10})
        );
    }

    #[test]
    fn missing_topics_is_rejected_under_any_policy() {
        for policy in [EmptyTopicsPolicy::Reject, EmptyTopicsPolicy::EmptyResult] {
            let err = use_case(policy).execute(parse("{}")).unwrap_err();
            assert!(err.is_validation());
            assert_eq!(err.to_string(), MISSING_FIELDS_MESSAGE);
        }
    }

    #[test]
    fn null_topics_is_rejected() {
        let err = use_case(EmptyTopicsPolicy::EmptyResult)
            .execute(parse(r#"{"topics": null}"#))
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn empty_topics_rejected_by_default() {
        let err = use_case(EmptyTopicsPolicy::Reject)
            .execute(parse(r#"{"topics": {}}"#))
            .unwrap_err();
        assert_eq!(err.to_string(), MISSING_FIELDS_MESSAGE);
    }

    #[test]
    fn empty_topics_answered_with_empty_result_when_configured() {
        let quotes = use_case(EmptyTopicsPolicy::EmptyResult)
            .execute(parse(r#"{"topics": {}}"#))
            .unwrap();
        assert!(quotes.is_empty());
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
    fn overflow_is_not_a_validation_error() {
        let engine = QuoteEngine::new(
            Arc::new(ProviderCatalog::from_pairs([("provider_a", "math")])),
            Arc::new(OverflowingStrategy),
        );
        let topics = RequestedTopics::from_pairs([("math", Weight::from_units(10))]).unwrap();
        let err = CalculateQuotesUseCase::new(Arc::new(engine), EmptyTopicsPolicy::Reject)
            .execute(CalculateQuotesRequest::new(topics))
            .unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::Arithmetic(_))
        ));
        assert!(!err.is_validation());
    }

    #[test]
    fn largest_weight_is_quoted() {
        let topics =
            RequestedTopics::from_pairs([("math", Weight::new(Decimal::MAX).unwrap())]).unwrap();
        let quotes = use_case(EmptyTopicsPolicy::Reject)
            .execute(CalculateQuotesRequest::new(topics))
            .unwrap();
        assert_eq!(quotes.len(), 2);
    }

    #[test]
    fn accessors() {
        let uc = use_case(EmptyTopicsPolicy::EmptyResult);
        assert_eq!(uc.empty_topics_policy(), EmptyTopicsPolicy::EmptyResult);
        assert_eq!(uc.engine().catalog().len(), 3);
    }
}
