//! Taxonomy catalog configuration

use serde::Deserialize;

/// Configuration for the specialty catalog source
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaxonomyConfig {
    /// Path to a YAML catalog file. When unset, the embedded default
    /// catalog is used.
    pub catalog_path: Option<String>,
}

impl TaxonomyConfig {
    /// Check if an external catalog file is configured
    pub fn has_catalog_file(&self) -> bool {
        self.catalog_path.as_ref().is_some_and(|p| !p.is_empty())
    }
}
