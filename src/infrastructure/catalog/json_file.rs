//! # JSON File Catalog Source
//!
//! Loads the provider catalog from a JSON document on disk.
//!
//! The document must be an object with a `provider_topics` member mapping
//! provider ids to `+`-delimited specialization strings:
//!
//! ```json
//! {"provider_topics": {"provider_a": "math+science", "provider_b": "reading+science"}}
//! ```
//!
//! Failures are classified so that operators can tell a missing file from
//! a broken one:
//!
//! | failure                                   | error               |
//! |-------------------------------------------|---------------------|
//! | file does not exist                       | `CatalogNotFound`   |
//! | other read failure                        | `Io`                |
//! | not JSON, truncated, invalid UTF-8        | `Serialization`     |
//! | wrong shape, missing `provider_topics`    | `InvalidCatalog`    |

use crate::application::error::{InfrastructureError, InfrastructureResult};
use crate::domain::entities::ProviderCatalog;
use crate::infrastructure::catalog::traits::CatalogSource;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::error::Category;
use std::io;
use std::path::{Path, PathBuf};

/// Default location of the catalog file, relative to the working directory.
pub const DEFAULT_CATALOG_PATH: &str = "static/providers.json";

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    provider_topics: ProviderCatalog,
}

/// Parses a catalog document from raw bytes.
///
/// # Errors
///
/// Returns `InfrastructureError::Serialization` for malformed JSON and
/// `InfrastructureError::InvalidCatalog` for well-formed JSON of the wrong
/// shape.
pub fn parse_catalog(bytes: &[u8]) -> InfrastructureResult<ProviderCatalog> {
    match serde_json::from_slice::<CatalogDocument>(bytes) {
        Ok(document) => Ok(document.provider_topics),
        Err(e) => match e.classify() {
            Category::Data => Err(InfrastructureError::invalid_catalog(e.to_string())),
            Category::Syntax | Category::Eof | Category::Io => {
                Err(InfrastructureError::serialization(e.to_string()))
            }
        },
    }
}

/// Catalog source backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileCatalogSource {
    path: PathBuf,
}

impl JsonFileCatalogSource {
    /// Creates a source reading from `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileCatalogSource {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_PATH)
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalogSource {
    async fn load(&self) -> InfrastructureResult<ProviderCatalog> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => InfrastructureError::catalog_not_found(&self.path),
            _ => InfrastructureError::io(format!("{}: {e}", self.path.display())),
        })?;

        let catalog = parse_catalog(&bytes)?;

        tracing::info!(
            path = %self.path.display(),
            providers = catalog.len(),
            "loaded provider catalog"
        );

        Ok(catalog)
    }

    fn describe(&self) -> String {
        format!("json file {}", self.path.display())
    }
}
