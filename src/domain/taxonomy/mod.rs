//! Specialty Taxonomy Domain Module
//!
//! The fixed catalog of medical specialties with their provider records,
//! plus the approximate-string matcher that maps free-text labels produced
//! by the classifier onto canonical specialty names.
//!
//! The catalog is loaded once at startup through the `TaxonomySource` port
//! and treated as an immutable snapshot for the lifetime of the process.

mod catalog;
mod matcher;

pub use catalog::{CatalogError, Provider, SpecialtyCatalog};
pub use matcher::{best_match, similarity, MatchCandidate};
