//! Catalog building and serialization

mod builder;
mod writer;

pub use builder::{build_catalog, build_catalog_with_options, CatalogOptions, CatalogSummary};
pub use writer::{to_json, write_catalog};
