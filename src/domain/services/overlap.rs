//! # Topic Overlap
//!
//! Classifies how many of the requester's top topics a provider covers.
//!
//! The classification is a closed enum, so pricing has to handle every
//! match count explicitly. Because [`TopTopics`] never holds more than three
//! topics, `Triple` is the largest possible overlap.
//!
//! # Examples
//!
//! ```
//! use course_quotes::domain::entities::{RequestedTopics, Specialization};
//! use course_quotes::domain::services::overlap::TopicOverlap;
//! use course_quotes::domain::services::ranking::rank_topics;
//!
//! let requested: RequestedTopics =
//!     serde_json::from_str(r#"{"math": 50, "science": 30, "reading": 20}"#).unwrap();
//! let top = rank_topics(&requested);
//!
//! let overlap = TopicOverlap::between(&top, &Specialization::parse("math+science"));
//! assert_eq!(overlap.match_count(), 2);
//!
//! let overlap = TopicOverlap::between(&top, &Specialization::parse("history"));
//! assert!(overlap.is_none());
//! ```

use crate::domain::entities::Specialization;
use crate::domain::services::ranking::{RankedTopic, TopTopics};

/// Overlap between a provider's specialization and the top topics.
///
/// Matched topics are held in rank order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicOverlap<'a> {
    /// No top topic is covered.
    None,
    /// Exactly one top topic is covered.
    Single(&'a RankedTopic),
    /// Exactly two top topics are covered.
    Double([&'a RankedTopic; 2]),
    /// All three top topics are covered.
    Triple([&'a RankedTopic; 3]),
}

impl<'a> TopicOverlap<'a> {
    /// Scores a specialization against the top topics.
    #[must_use]
    pub fn between(top: &'a TopTopics, specialization: &Specialization) -> Self {
        top.iter()
            .filter(|ranked| specialization.covers(ranked.topic().as_str()))
            .fold(Self::None, Self::with)
    }

    fn with(self, ranked: &'a RankedTopic) -> Self {
        match self {
            Self::None => Self::Single(ranked),
            Self::Single(first) => Self::Double([first, ranked]),
            Self::Double([first, second]) => Self::Triple([first, second, ranked]),
            // TopTopics holds at most three topics.
            Self::Triple(matched) => Self::Triple(matched),
        }
    }

    /// Returns the number of matched topics.
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.matched().len()
    }

    /// Returns the matched topics in rank order.
    #[must_use]
    pub fn matched(&self) -> &[&'a RankedTopic] {
        match self {
            Self::None => &[],
            Self::Single(ranked) => std::slice::from_ref(ranked),
            Self::Double(matched) => matched.as_slice(),
            Self::Triple(matched) => matched.as_slice(),
        }
    }

    /// Returns true if nothing matched.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
