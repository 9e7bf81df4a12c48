//! # Provider Catalog Sources
//!
//! ## Source Trait (Port)
//!
//! - [`CatalogSource`]: loads the provider catalog
//!
//! ## Implementations
//!
//! - [`JsonFileCatalogSource`]: JSON document on disk
//! - [`InMemoryCatalogSource`]: prebuilt catalog for testing

pub mod in_memory;
pub mod json_file;
pub mod traits;

pub use in_memory::InMemoryCatalogSource;
pub use json_file::{DEFAULT_CATALOG_PATH, JsonFileCatalogSource, parse_catalog};
pub use traits::CatalogSource;
