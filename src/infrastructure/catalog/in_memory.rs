//! # In-Memory Catalog Source
//!
//! In-memory implementation of [`CatalogSource`] for testing.

use crate::application::error::InfrastructureResult;
use crate::domain::entities::ProviderCatalog;
use crate::infrastructure::catalog::traits::CatalogSource;
use async_trait::async_trait;

/// Catalog source that hands out a prebuilt catalog.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogSource {
    catalog: ProviderCatalog,
}

impl InMemoryCatalogSource {
    /// Creates a source serving `catalog`.
    #[must_use]
    pub fn new(catalog: ProviderCatalog) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalogSource {
    async fn load(&self) -> InfrastructureResult<ProviderCatalog> {
        Ok(self.catalog.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory catalog ({} providers)", self.catalog.len())
    }
}
