//! Specialty catalog and provider directory.
//!
//! An immutable snapshot mapping canonical specialty names to provider
//! records. Built once at startup from a `TaxonomySource`; every read after
//! that is lock-free and side-effect free, so the catalog can be shared
//! across concurrent sessions behind an `Arc`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use super::matcher::best_match;

/// Similarity threshold a match must strictly exceed to be accepted.
const MATCH_THRESHOLD: f64 = 70.0;

/// The specialty used when no canonical name scores above the threshold.
pub const FALLBACK_SPECIALTY: &str = "Primary Care";

/// A medical provider record. Value type; equality by all fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    /// Provider display name.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Whether the provider currently accepts appointments.
    pub availability: bool,
    /// Canonical specialty this provider belongs to.
    pub specialty: String,
}

impl Provider {
    /// Creates a new provider record.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        availability: bool,
        specialty: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            availability,
            specialty: specialty.into(),
        }
    }
}

/// Errors raised while constructing a catalog snapshot.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Catalog contains no specialties")]
    Empty,

    #[error("Catalog is missing the fallback specialty '{0}'")]
    MissingFallback(String),

    #[error("Specialty name cannot be empty")]
    EmptySpecialtyName,
}

/// Immutable specialty -> providers snapshot.
///
/// Keys are kept in a `BTreeMap` so iteration order is the sorted canonical
/// name order, which makes tie-breaking during matching deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialtyCatalog {
    providers: BTreeMap<String, Vec<Provider>>,
}

impl SpecialtyCatalog {
    /// Builds a catalog from a specialty -> providers mapping.
    ///
    /// The mapping must be non-empty and must contain the fallback
    /// specialty, since unresolvable labels are routed there.
    pub fn new(providers: BTreeMap<String, Vec<Provider>>) -> Result<Self, CatalogError> {
        if providers.is_empty() {
            return Err(CatalogError::Empty);
        }
        if providers.keys().any(|name| name.trim().is_empty()) {
            return Err(CatalogError::EmptySpecialtyName);
        }
        if !providers.contains_key(FALLBACK_SPECIALTY) {
            return Err(CatalogError::MissingFallback(FALLBACK_SPECIALTY.to_string()));
        }

        Ok(Self { providers })
    }

    /// Canonical specialty names in sorted order.
    pub fn specialty_names(&self) -> impl Iterator<Item = &str> {
        self.providers.keys().map(String::as_str)
    }

    /// Number of specialties in the catalog.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// True if the catalog holds no specialties. Never true after `new`.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// True if `name` is a canonical specialty of this catalog.
    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    /// The designated fallback specialty name.
    pub fn fallback_specialty(&self) -> &str {
        FALLBACK_SPECIALTY
    }

    /// Resolves an arbitrary label to a canonical specialty name.
    ///
    /// Scores the label against every canonical name; the best score must
    /// strictly exceed 70 to win, otherwise the fallback specialty is
    /// returned. Ties resolve to the first name in sorted order. Always
    /// returns a member of the catalog.
    pub fn resolve(&self, label: &str) -> &str {
        match best_match(self.specialty_names(), label) {
            Some(candidate) if candidate.score > MATCH_THRESHOLD => candidate.specialty,
            _ => FALLBACK_SPECIALTY,
        }
    }

    /// Looks up the providers registered for a canonical specialty.
    ///
    /// Returns an empty slice when the specialty has no entries; callers
    /// treat that as a soft "not found", never as a fatal error.
    pub fn lookup(&self, specialty: &str) -> &[Provider] {
        self.providers
            .get(specialty)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// First provider for a specialty, if any is registered.
    pub fn first_provider(&self, specialty: &str) -> Option<&Provider> {
        self.lookup(specialty).first()
    }
}
