//! # Catalog Source Trait
//!
//! Port definition for loading the provider catalog.
//!
//! The service loads the catalog exactly once at startup and hands the
//! result to the quote engine; sources are not consulted per request.
//!
//! # Examples
//!
//! ```ignore
//! use course_quotes::infrastructure::catalog::CatalogSource;
//!
//! async fn provider_count(source: &impl CatalogSource) -> usize {
//!     source.load().await.map(|c| c.len()).unwrap_or(0)
//! }
//! ```

use crate::application::error::InfrastructureResult;
use crate::domain::entities::ProviderCatalog;
use async_trait::async_trait;
use std::fmt;

/// Source of the provider catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync + fmt::Debug {
    /// Loads the full catalog.
    ///
    /// # Errors
    ///
    /// Returns an `InfrastructureError` if the catalog cannot be read or
    /// does not have the expected structure.
    async fn load(&self) -> InfrastructureResult<ProviderCatalog>;

    /// Returns a human-readable description of where the catalog comes from.
    fn describe(&self) -> String;
}
