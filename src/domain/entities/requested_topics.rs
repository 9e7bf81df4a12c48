//! # Requested Topics
//!
//! The requester's weighted topic interests, in the order they were supplied.
//!
//! Input order matters: ranking breaks weight ties by it. JSON objects are
//! therefore decoded entry by entry instead of through a hashed map.
//!
//! # Examples
//!
//! ```
//! use course_quotes::domain::entities::RequestedTopics;
//! use course_quotes::domain::value_objects::Weight;
//!
//! let topics: RequestedTopics =
//!     serde_json::from_str(r#"{"reading": 20, "math": 50}"#).unwrap();
//!
//! assert_eq!(topics.len(), 2);
//! assert_eq!(topics.weight_of("math"), Some(Weight::from_units(50)));
//! assert_eq!(topics.iter().next().map(|(t, _)| t.as_str()), Some("reading"));
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{Topic, Weight};
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

/// Ordered mapping of topic to requester weight with unique keys.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestedTopics {
    entries: Vec<(Topic, Weight)>,
    /// Position of each topic in `entries`.
    positions: HashMap<Topic, usize>,
}

impl RequestedTopics {
    /// Creates an empty set of requested topics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds requested topics from `(topic, weight)` pairs, keeping order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTopic` if any topic name is empty.
    pub fn from_pairs<I, T>(pairs: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = (T, Weight)>,
        T: Into<Topic>,
    {
        let mut topics = Self::new();
        for (topic, weight) in pairs {
            topics.insert(topic, weight)?;
        }
        Ok(topics)
    }

    /// Inserts a topic.
    ///
    /// A topic that is already present keeps its original position and
    /// takes the new weight.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTopic` if the topic name is empty.
    pub fn insert(&mut self, topic: impl Into<Topic>, weight: Weight) -> DomainResult<()> {
        let topic = topic.into();
        if topic.is_empty() {
            return Err(DomainError::InvalidTopic(
                "topic name must not be empty".to_string(),
            ));
        }

        match self.positions.entry(topic) {
            Entry::Occupied(slot) => {
                if let Some((_, existing_weight)) = self.entries.get_mut(*slot.get()) {
                    *existing_weight = weight;
                }
            }
            Entry::Vacant(slot) => {
                let position = self.entries.len();
                self.entries.push((slot.key().clone(), weight));
                slot.insert(position);
            }
        }
        Ok(())
    }

    /// Returns the weight assigned to `topic`, if requested.
    #[must_use]
    pub fn weight_of(&self, topic: &str) -> Option<Weight> {
        self.positions
            .get(topic)
            .and_then(|&position| self.entries.get(position))
            .map(|(_, w)| *w)
    }

    /// Returns the number of requested topics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no topics were requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(topic, weight)` in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&Topic, Weight)> {
        self.entries.iter().map(|(t, w)| (t, *w))
    }
}

impl<'de> Deserialize<'de> for RequestedTopics {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TopicsVisitor;

        impl<'de> Visitor<'de> for TopicsVisitor {
            type Value = RequestedTopics;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping topic names to non-negative numbers")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut topics = RequestedTopics::new();
                while let Some((topic, weight)) = map.next_entry::<String, Weight>()? {
                    topics.insert(topic, weight).map_err(de::Error::custom)?;
                }
                Ok(topics)
            }
        }

        deserializer.deserialize_map(TopicsVisitor)
    }
}
