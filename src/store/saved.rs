//! Saved (bookmarked) schemes

use log::debug;
use serde::{Deserialize, Serialize};

use crate::catalog::SchemeCatalog;
use crate::models::Scheme;

/// Scheme ids a citizen has saved, in the order they were saved
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedSchemes {
    ids: Vec<String>,
}

impl SavedSchemes {
    /// Create an empty list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a scheme; saving twice has no effect
    ///
    /// Returns whether the id was newly added.
    pub fn save(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.is_saved(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Remove a saved scheme; returns whether it was present
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|saved| saved != id);
        self.ids.len() != before
    }

    /// Whether the scheme is saved
    #[must_use]
    pub fn is_saved(&self, id: &str) -> bool {
        self.ids.iter().any(|saved| saved == id)
    }

    /// Saved ids in save order
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// The saved schemes present in the catalog, in catalog order
    #[must_use]
    pub fn resolve<'a>(&self, catalog: &'a SchemeCatalog) -> Vec<&'a Scheme> {
        for id in &self.ids {
            if catalog.get(id).is_none() {
                debug!("Saved scheme '{id}' is not in the catalog");
            }
        }
        catalog.iter().filter(|s| self.is_saved(&s.id)).collect()
    }
}
