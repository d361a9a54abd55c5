//! YAML catalog source.
//!
//! Loads the specialty -> providers catalog from a YAML file shaped like:
//!
//! ```yaml
//! Cardiology:
//!   - name: "Dr. Elena Vasquez"
//!     phone: "+1-555-0142"
//!     availability: true
//! ```
//!
//! An embedded copy of the default catalog ships with the binary so the
//! service can start without any external data file.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::taxonomy::{Provider, SpecialtyCatalog};
use crate::ports::{TaxonomyError, TaxonomySource};

/// Default catalog bundled into the binary.
const EMBEDDED_CATALOG: &str = include_str!("../../../data/specialties.yaml");

/// One provider entry as written in the catalog file. The specialty is
/// implied by the enclosing key and stamped on during conversion.
#[derive(Debug, Deserialize)]
struct ProviderEntry {
    name: String,
    phone: String,
    availability: bool,
}

fn parse_catalog(yaml: &str) -> Result<SpecialtyCatalog, TaxonomyError> {
    let entries: BTreeMap<String, Vec<ProviderEntry>> =
        serde_yaml::from_str(yaml).map_err(|e| TaxonomyError::Parse(e.to_string()))?;

    let providers = entries
        .into_iter()
        .map(|(specialty, entries)| {
            let providers = entries
                .into_iter()
                .map(|entry| {
                    Provider::new(entry.name, entry.phone, entry.availability, &specialty)
                })
                .collect();
            (specialty, providers)
        })
        .collect();

    Ok(SpecialtyCatalog::new(providers)?)
}

/// Catalog source reading a YAML file from disk.
#[derive(Debug, Clone)]
pub struct YamlCatalogSource {
    path: PathBuf,
}

impl YamlCatalogSource {
    /// Creates a source for the given file path.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl TaxonomySource for YamlCatalogSource {
    fn load(&self) -> Result<SpecialtyCatalog, TaxonomyError> {
        let yaml = std::fs::read_to_string(&self.path)
            .map_err(|e| TaxonomyError::Io(format!("{}: {}", self.path.display(), e)))?;
        let catalog = parse_catalog(&yaml)?;

        tracing::info!(
            path = %self.path.display(),
            specialties = catalog.len(),
            "loaded specialty catalog"
        );
        Ok(catalog)
    }
}

/// Catalog source backed by the embedded default data.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalogSource;

impl EmbeddedCatalogSource {
    /// Creates the embedded source.
    pub fn new() -> Self {
        Self
    }
}

impl TaxonomySource for EmbeddedCatalogSource {
    fn load(&self) -> Result<SpecialtyCatalog, TaxonomyError> {
        let catalog = parse_catalog(EMBEDDED_CATALOG)?;
        tracing::info!(specialties = catalog.len(), "loaded embedded specialty catalog");
        Ok(catalog)
    }
}
