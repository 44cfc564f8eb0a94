//! Scheme catalog
//!
//! An ordered, read-only collection of schemes. The catalog checks its
//! entries once when it is built; after that it is never mutated, so the
//! engine can borrow from it freely.

pub mod builtin;
pub mod query;
pub mod source;

use std::path::Path;

use log::info;
use rustc_hash::FxHashSet;

use crate::error::{Result, SchemeError};
use crate::models::Scheme;

pub use query::SchemeQuery;
pub use source::{
    BuiltinSource, CatalogSource, JsonFileSource, load_catalog_async, load_with_fallback,
};

/// An ordered collection of schemes with unique ids
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemeCatalog {
    schemes: Vec<Scheme>,
}

impl SchemeCatalog {
    /// Build a catalog, validating every scheme and rejecting duplicate ids
    pub fn new(schemes: Vec<Scheme>) -> Result<Self> {
        let mut seen = FxHashSet::default();
        for scheme in &schemes {
            scheme.validate()?;
            if !seen.insert(scheme.id.as_str()) {
                return Err(SchemeError::DuplicateScheme(scheme.id.clone()));
            }
        }
        Ok(Self { schemes })
    }

    /// The bundled reference catalog
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            schemes: builtin::schemes(),
        }
    }

    /// Parse a catalog from a JSON array of schemes
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::new(serde_json::from_str(json)?)
    }

    /// Read a catalog from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let catalog = Self::from_json_str(&std::fs::read_to_string(path)?)?;
        info!("Loaded {} schemes from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// All schemes in catalog order
    #[must_use]
    pub fn schemes(&self) -> &[Scheme] {
        &self.schemes
    }

    /// Look up a scheme by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Scheme> {
        self.schemes.iter().find(|s| s.id == id)
    }

    /// Look up a scheme by id, failing if it is missing
    pub fn require(&self, id: &str) -> Result<&Scheme> {
        self.get(id)
            .ok_or_else(|| SchemeError::UnknownScheme(id.to_string()))
    }

    /// Number of schemes
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    /// Whether the catalog has no schemes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    /// Iterate over schemes in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, Scheme> {
        self.schemes.iter()
    }
}

impl<'a> IntoIterator for &'a SchemeCatalog {
    type Item = &'a Scheme;
    type IntoIter = std::slice::Iter<'a, Scheme>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
