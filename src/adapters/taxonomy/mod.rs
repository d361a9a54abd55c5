//! Taxonomy catalog sources.

mod yaml_catalog;

pub use yaml_catalog::{EmbeddedCatalogSource, YamlCatalogSource};
