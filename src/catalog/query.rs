//! Browse filtering over a catalog

use crate::catalog::SchemeCatalog;
use crate::engine::{Eligibility, EligibilityEngine, TaggedScheme};
use crate::models::{Profile, SchemeCategory};

/// Filters applied when browsing the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemeQuery {
    /// Case-insensitive text matched against name, description and ministry
    pub search: Option<String>,
    /// Only schemes carrying this category
    pub category: Option<SchemeCategory>,
    /// Only schemes the profile is eligible for; ignored without a profile
    pub eligible_only: bool,
}

impl SchemeQuery {
    /// Create a query that matches everything
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text
    #[must_use]
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Restrict to a category
    #[must_use]
    pub const fn category(mut self, category: SchemeCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Restrict to eligible schemes
    #[must_use]
    pub const fn eligible_only(mut self, eligible_only: bool) -> Self {
        self.eligible_only = eligible_only;
        self
    }

    /// Apply the query, tagging each surviving scheme
    ///
    /// Results keep catalog order.
    #[must_use]
    pub fn apply<'a>(
        &self,
        catalog: &'a SchemeCatalog,
        profile: Option<&Profile>,
        engine: &EligibilityEngine,
    ) -> Vec<TaggedScheme<'a>> {
        let needle = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        catalog
            .iter()
            .map(|scheme| engine.tag(profile, scheme))
            .filter(|tagged| {
                !(self.eligible_only && tagged.eligibility == Eligibility::NotEligible)
            })
            .filter(|tagged| {
                needle.as_deref().is_none_or(|needle| {
                    let scheme = tagged.scheme;
                    scheme.name.to_lowercase().contains(needle)
                        || scheme.description.to_lowercase().contains(needle)
                        || scheme.ministry.to_lowercase().contains(needle)
                })
            })
            .filter(|tagged| {
                self.category
                    .is_none_or(|category| tagged.scheme.has_category(category))
            })
            .collect()
    }
}
