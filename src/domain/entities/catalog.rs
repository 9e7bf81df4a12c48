//! # Provider Catalog
//!
//! Read-only table of providers and their specializations.
//!
//! The catalog is loaded once at startup and shared by every quote
//! computation. Provider order follows the source document, which is also
//! the order quotes are reported in.
//!
//! # Examples
//!
//! ```
//! use course_quotes::domain::entities::ProviderCatalog;
//!
//! let catalog: ProviderCatalog = serde_json::from_str(
//!     r#"{"provider_a": "math+science", "provider_b": "reading+science"}"#,
//! )
//! .unwrap();
//!
//! assert_eq!(catalog.len(), 2);
//! assert!(catalog.get("provider_b").is_some());
//! ```

use crate::domain::entities::provider::Provider;
use crate::domain::value_objects::ProviderId;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

/// Ordered, immutable collection of providers with unique identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProviderCatalog {
    providers: Vec<Provider>,
    /// Position of each provider in `providers`.
    positions: HashMap<ProviderId, usize>,
}

impl ProviderCatalog {
    /// Creates a catalog from providers.
    ///
    /// A repeated identifier keeps its first position and takes the
    /// specialization of its last occurrence.
    #[must_use]
    pub fn new(providers: impl IntoIterator<Item = Provider>) -> Self {
        let mut catalog = Self::default();
        for provider in providers {
            catalog.upsert(provider);
        }
        catalog
    }

    /// Creates a catalog from `(provider id, specialization string)` pairs.
    #[must_use]
    pub fn from_pairs<I, P, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (P, S)>,
        P: Into<ProviderId>,
        S: AsRef<str>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(id, spec)| Provider::new(id, spec.as_ref())),
        )
    }

    fn upsert(&mut self, provider: Provider) {
        match self.positions.entry(provider.id().clone()) {
            Entry::Occupied(slot) => {
                if let Some(existing) = self.providers.get_mut(*slot.get()) {
                    *existing = provider;
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(self.providers.len());
                self.providers.push(provider);
            }
        }
    }

    /// Looks up a provider by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Provider> {
        self.positions
            .get(id)
            .and_then(|&position| self.providers.get(position))
    }

    /// Iterates over providers in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Provider> {
        self.providers.iter()
    }

    /// Returns the number of providers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Returns true if the catalog has no providers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl<'a> IntoIterator for &'a ProviderCatalog {
    type Item = &'a Provider;
    type IntoIter = std::slice::Iter<'a, Provider>;

    fn into_iter(self) -> Self::IntoIter {
        self.providers.iter()
    }
}

/// Deserializes from an object mapping provider id to specialization string.
impl<'de> Deserialize<'de> for ProviderCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = ProviderCatalog;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping provider ids to specialization strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut catalog = ProviderCatalog::default();
                while let Some((id, spec)) = map.next_entry::<String, String>()? {
                    catalog.upsert(Provider::new(id, &spec));
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn from_pairs_keeps_order() {
        let catalog = ProviderCatalog::from_pairs([
            ("provider_b", "reading+science"),
            ("provider_a", "math+science"),
        ]);
        let ids: Vec<&str> = catalog.iter().map(|p| p.id().as_str()).collect();
        assert_eq!(ids, vec!["provider_b", "provider_a"]);
    }

    #[test]
    fn repeated_id_takes_last_specialization() {
        let catalog = ProviderCatalog::from_pairs([
            ("provider_a", "math"),
            ("provider_b", "art"),
            ("provider_a", "history"),
        ]);
        assert_eq!(catalog.len(), 2);
        let first = catalog.iter().next().unwrap();
        assert_eq!(first.id().as_str(), "provider_a");
        assert!(first.specialization().covers("history"));
        assert!(!first.specialization().covers("math"));
    }

    #[test]
    fn large_catalog_with_repeats() {
        let catalog = ProviderCatalog::from_pairs(
            (0..20_000)
                .chain(0..20_000)
                .map(|i| (format!("p{i}"), if i % 2 == 0 { "math" } else { "art" })),
        );
        assert_eq!(catalog.len(), 20_000);
        assert!(catalog.get("p19998").unwrap().specialization().covers("math"));
        assert_eq!(catalog.iter().nth(1).unwrap().id().as_str(), "p1");
    }

    #[test]
    fn get_missing_provider() {
        let catalog = ProviderCatalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.get("provider_a").is_none());
    }

    mod deserialize {
        use super::*;

        #[test]
        fn preserves_document_order() {
            let catalog: ProviderCatalog =
                serde_json::from_str(r#"{"z": "math", "a": "art", "m": "history"}"#).unwrap();
            let ids: Vec<&str> = (&catalog).into_iter().map(|p| p.id().as_str()).collect();
            assert_eq!(ids, vec!["z", "a", "m"]);
        }

        #[test]
        fn empty_specialization_is_accepted() {
            let catalog: ProviderCatalog = serde_json::from_str(r#"{"p": ""}"#).unwrap();
            assert!(catalog.get("p").unwrap().specialization().is_empty());
        }

        #[test]
        fn rejects_non_string_specialization() {
            assert!(serde_json::from_str::<ProviderCatalog>(r#"{"p": 5}"#).is_err());
            assert!(serde_json::from_str::<ProviderCatalog>(r#"{"p": ["math"]}"#).is_err());
        }
    }
}
