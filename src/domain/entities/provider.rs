//! # Provider
//!
//! A course provider and the topics it specializes in.
//!
//! Specializations are written as topics joined by `+`, for example
//! `"math+art"`. Parsing never fails: duplicate topics collapse and empty
//! segments (`"math++art"`, `""`) are ignored.
//!
//! # Examples
//!
//! ```
//! use course_quotes::domain::entities::{Provider, Specialization};
//!
//! let spec = Specialization::parse("math+art+math");
//! assert_eq!(spec.len(), 2);
//! assert!(spec.covers("art"));
//!
//! let provider = Provider::new("provider_a", "math+science");
//! assert_eq!(provider.id().as_str(), "provider_a");
//! assert!(provider.specialization().covers("science"));
//! ```

use crate::domain::value_objects::{ProviderId, Topic};
use std::collections::HashSet;
use std::fmt;

/// Separator between topics in a specialization string.
pub const SPECIALIZATION_SEPARATOR: char = '+';

/// The set of topics a provider covers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Specialization {
    raw: String,
    topics: HashSet<Topic>,
}

impl Specialization {
    /// Parses a `+`-delimited specialization string.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let topics = raw
            .split(SPECIALIZATION_SEPARATOR)
            .filter(|segment| !segment.is_empty())
            .map(Topic::new)
            .collect();
        Self {
            raw: raw.to_string(),
            topics,
        }
    }

    /// Returns true if the provider covers `topic`.
    #[must_use]
    pub fn covers(&self, topic: &str) -> bool {
        self.topics.contains(topic)
    }

    /// Returns the distinct topics covered.
    pub fn topics(&self) -> impl Iterator<Item = &Topic> {
        self.topics.iter()
    }

    /// Returns the number of distinct topics covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Returns true if no topics are covered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Returns the specialization string as it was supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Specialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// A catalog entry: provider identifier plus specialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provider {
    id: ProviderId,
    specialization: Specialization,
}

impl Provider {
    /// Creates a provider from its id and specialization string.
    #[must_use]
    pub fn new(id: impl Into<ProviderId>, specialization: &str) -> Self {
        Self {
            id: id.into(),
            specialization: Specialization::parse(specialization),
        }
    }

    /// Returns the provider identifier.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &ProviderId {
        &self.id
    }

    /// Returns the provider's specialization.
    #[inline]
    #[must_use]
    pub fn specialization(&self) -> &Specialization {
        &self.specialization
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Provider({} specialization={})", self.id, self.specialization)
    }
}
