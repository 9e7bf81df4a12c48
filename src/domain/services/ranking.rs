//! # Topic Ranking
//!
//! Selects the requester's top topics by weight.
//!
//! Topics are stably sorted by descending weight and the first
//! [`MAX_TOP_TOPICS`] are kept. Equal weights keep their input order.
//!
//! # Examples
//!
//! ```
//! use course_quotes::domain::entities::RequestedTopics;
//! use course_quotes::domain::services::ranking::{rank_topics, Rank};
//!
//! let requested: RequestedTopics = serde_json::from_str(
//!     r#"{"reading": 20, "math": 50, "science": 30, "history": 15, "art": 10}"#,
//! )
//! .unwrap();
//!
//! let top = rank_topics(&requested);
//! let names: Vec<&str> = top.iter().map(|t| t.topic().as_str()).collect();
//! assert_eq!(names, vec!["math", "science", "reading"]);
//! assert_eq!(top.find("reading").map(|t| t.rank()), Some(Rank::Third));
//! ```

use crate::domain::entities::RequestedTopics;
use crate::domain::value_objects::{Topic, Weight};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of topics that take part in pricing.
pub const MAX_TOP_TOPICS: usize = Rank::ALL.len();

/// Position of a topic among the top topics (`First` = highest weight).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    /// Highest weight.
    First = 0,
    /// Second highest weight.
    Second = 1,
    /// Third highest weight.
    Third = 2,
}

impl Rank {
    /// All ranks, best first.
    pub const ALL: [Self; 3] = [Self::First, Self::Second, Self::Third];

    /// Returns the zero-based position.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the rank at a zero-based position.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::First),
            1 => Some(Self::Second),
            2 => Some(Self::Third),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// A top topic together with its rank and requested weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedTopic {
    topic: Topic,
    weight: Weight,
    rank: Rank,
}

impl RankedTopic {
    /// Returns the topic.
    #[inline]
    #[must_use]
    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    /// Returns the weight the requester assigned to the topic.
    #[inline]
    #[must_use]
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Returns the topic's rank.
    #[inline]
    #[must_use]
    pub fn rank(&self) -> Rank {
        self.rank
    }
}

/// Up to [`MAX_TOP_TOPICS`] topics in rank order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TopTopics {
    ranked: Vec<RankedTopic>,
}

impl TopTopics {
    /// Iterates over the top topics, best first.
    pub fn iter(&self) -> impl Iterator<Item = &RankedTopic> {
        self.ranked.iter()
    }

    /// Finds a top topic by name.
    #[must_use]
    pub fn find(&self, topic: &str) -> Option<&RankedTopic> {
        self.ranked.iter().find(|t| t.topic.as_str() == topic)
    }

    /// Returns the number of top topics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    /// Returns true if there are no top topics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

/// Ranks requested topics and keeps the top [`MAX_TOP_TOPICS`].
#[must_use]
pub fn rank_topics(requested: &RequestedTopics) -> TopTopics {
    let mut by_weight: Vec<(&Topic, Weight)> = requested.iter().collect();
    // `sort_by` is stable, so ties keep input order.
    by_weight.sort_by(|a, b| b.1.cmp(&a.1));

    let ranked = by_weight
        .into_iter()
        .zip(Rank::ALL)
        .map(|((topic, weight), rank)| RankedTopic {
            topic: topic.clone(),
            weight,
            rank,
        })
        .collect();

    TopTopics { ranked }
}
