//! Welfare scheme model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemeError};
use crate::models::types::{ApplicationMode, BeneficiaryGroup, SchemeCategory};
use crate::rules::EligibilityRules;

/// Date format used for application deadlines
pub const DEADLINE_FORMAT: &str = "%Y-%m-%d";

/// A government welfare scheme as published in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scheme {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Issuing ministry
    pub ministry: String,
    /// Short description
    #[serde(default)]
    pub description: String,
    /// Category tags
    #[serde(default)]
    pub category: Vec<SchemeCategory>,
    /// Beneficiary-group tags
    #[serde(default)]
    pub beneficiary_groups: Vec<BeneficiaryGroup>,
    /// Eligibility rule set in catalog form
    #[serde(default)]
    pub eligibility: EligibilityRules,
    /// Benefits, in display order
    #[serde(default)]
    pub benefits: Vec<String>,
    /// Documents required to apply, in display order
    #[serde(default)]
    pub documents_required: Vec<String>,
    /// How to apply
    pub application_mode: ApplicationMode,
    /// Official website
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official_url: Option<String>,
    /// Application deadline as `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_deadline: Option<String>,
}

impl Scheme {
    /// Whether the scheme carries the given category tag
    #[must_use]
    pub fn has_category(&self, category: SchemeCategory) -> bool {
        self.category.contains(&category)
    }

    /// Parse the application deadline, if any
    pub fn deadline(&self) -> Result<Option<NaiveDate>> {
        self.application_deadline
            .as_deref()
            .map(|raw| {
                NaiveDate::parse_from_str(raw.trim(), DEADLINE_FORMAT).map_err(|source| {
                    SchemeError::InvalidDate {
                        value: raw.to_string(),
                        source,
                    }
                })
            })
            .transpose()
    }

    /// Whether applications are still accepted on `date`
    ///
    /// A scheme without a deadline is always open; the deadline day itself
    /// is still open.
    pub fn is_open_on(&self, date: NaiveDate) -> Result<bool> {
        Ok(self.deadline()?.is_none_or(|deadline| date <= deadline))
    }

    /// Check the catalog-level invariants of a single scheme
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(SchemeError::validation("id", "is required"));
        }
        if self.name.trim().is_empty() {
            return Err(SchemeError::validation(
                "name",
                format!("scheme '{}' has no name", self.id),
            ));
        }
        self.eligibility.validate(&self.id)?;
        self.deadline()?;
        Ok(())
    }
}
