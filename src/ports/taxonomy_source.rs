//! Taxonomy Source Port - Startup-time catalog loading.
//!
//! The catalog is loaded exactly once at process startup and shared
//! read-only afterwards. A load failure is fatal: without the catalog the
//! matcher and provider directory cannot operate.

use crate::domain::taxonomy::{CatalogError, SpecialtyCatalog};

/// Taxonomy loading errors.
#[derive(Debug, thiserror::Error)]
pub enum TaxonomyError {
    /// The catalog source could not be read.
    #[error("failed to read catalog: {0}")]
    Io(String),

    /// The catalog source could not be parsed.
    #[error("failed to parse catalog: {0}")]
    Parse(String),

    /// The parsed catalog is structurally invalid.
    #[error("invalid catalog: {0}")]
    Invalid(#[from] CatalogError),
}

/// Port for loading the immutable specialty catalog.
///
/// Synchronous by design: loading happens once during startup, before any
/// session exists.
pub trait TaxonomySource: Send + Sync {
    /// Loads the full catalog snapshot.
    fn load(&self) -> Result<SpecialtyCatalog, TaxonomyError>;
}
