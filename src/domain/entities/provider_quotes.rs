//! # Provider Quotes
//!
//! Result of a quote computation: provider id mapped to quote amount.
//!
//! Only strictly positive quotes are ever recorded. Serializes as a JSON
//! object in catalog order.

use crate::domain::value_objects::{ProviderId, QuoteAmount};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Ordered mapping of provider id to positive quote amount.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProviderQuotes {
    entries: Vec<(ProviderId, QuoteAmount)>,
}

impl ProviderQuotes {
    /// Creates an empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a quote for a provider.
    ///
    /// Returns false, recording nothing, when `amount` is not positive.
    pub fn record(&mut self, provider: ProviderId, amount: QuoteAmount) -> bool {
        if !amount.is_positive() {
            return false;
        }
        self.entries.push((provider, amount));
        true
    }

    /// Returns the quote for `provider`, if any.
    #[must_use]
    pub fn get(&self, provider: &str) -> Option<QuoteAmount> {
        self.entries
            .iter()
            .find(|(id, _)| id.as_str() == provider)
            .map(|(_, amount)| *amount)
    }

    /// Returns the number of quoted providers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no provider was quoted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(provider, amount)` in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&ProviderId, QuoteAmount)> {
        self.entries.iter().map(|(id, amount)| (id, *amount))
    }
}

impl Serialize for ProviderQuotes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (provider, amount) in &self.entries {
            map.serialize_entry(provider, amount)?;
        }
        map.end()
    }
}
