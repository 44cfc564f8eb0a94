//! Eligibility rules
//!
//! Catalogs describe eligibility as an object of optional fields
//! (`EligibilityRules`). Before evaluation that object is lowered into a
//! `RuleSet`: an ordered list of `Predicate` values in which every absent,
//! `"all"`, `false` or empty-set field has been dropped. An empty rule set
//! therefore matches every profile.

pub mod predicate;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemeError};
use crate::models::{Caste, GenderRequirement, MaritalStatus, Occupation, Profile};

pub use predicate::{FilterCriteria, Predicate, ProfileField, UnsetFieldPolicy};

/// Eligibility rules in catalog form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityRules {
    /// Minimum age (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_min: Option<u32>,
    /// Maximum age (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_max: Option<u32>,
    /// Maximum annual income (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income_max: Option<f64>,
    /// Gender restriction, `"all"` for none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<GenderRequirement>,
    /// Whether a disability is required
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disability: Option<bool>,
    /// Allowed social categories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caste: Option<Vec<Caste>>,
    /// Allowed occupations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<Vec<Occupation>>,
    /// Whether the applicant must be a student
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_student: Option<bool>,
    /// Required state; absent for national schemes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Required marital status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<MaritalStatus>,
}

impl EligibilityRules {
    /// Check that the bounds are usable
    ///
    /// `scheme_id` is only used to label errors.
    pub fn validate(&self, scheme_id: &str) -> Result<()> {
        if let (Some(min), Some(max)) = (self.age_min, self.age_max) {
            if min > max {
                return Err(SchemeError::validation(
                    "eligibility.ageMin",
                    format!("scheme '{scheme_id}' has ageMin {min} above ageMax {max}"),
                ));
            }
        }
        if let Some(max) = self.income_max {
            if !max.is_finite() || max < 0.0 {
                return Err(SchemeError::validation(
                    "eligibility.incomeMax",
                    format!("scheme '{scheme_id}' has an invalid income bound {max}"),
                ));
            }
        }
        Ok(())
    }
}

/// A conjunction of predicates
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    predicates: Vec<Predicate>,
}

impl RuleSet {
    /// Create a rule set from explicit predicates
    #[must_use]
    pub const fn new(predicates: Vec<Predicate>) -> Self {
        Self { predicates }
    }

    /// The rule set with no predicates, matching every profile
    #[must_use]
    pub const fn universal() -> Self {
        Self::new(Vec::new())
    }

    /// Lower catalog rules into predicates
    ///
    /// Predicates come out in a fixed order with the cheap scalar checks
    /// first; the order never changes the outcome.
    #[must_use]
    pub fn from_rules(rules: &EligibilityRules, marital_status_policy: UnsetFieldPolicy) -> Self {
        let mut predicates = Vec::new();

        if let Some(min) = rules.age_min {
            predicates.push(Predicate::AgeAtLeast(min));
        }
        if let Some(max) = rules.age_max {
            predicates.push(Predicate::AgeAtMost(max));
        }
        if let Some(gender) = rules.gender.and_then(GenderRequirement::required) {
            predicates.push(Predicate::GenderIs(gender));
        }
        if let Some(max) = rules.income_max {
            predicates.push(Predicate::IncomeAtMost(max));
        }
        if rules.is_student == Some(true) {
            predicates.push(Predicate::RequiresStudent);
        }
        if rules.disability == Some(true) {
            predicates.push(Predicate::RequiresDisability);
        }
        if let Some(castes) = rules.caste.as_ref().filter(|c| !c.is_empty()) {
            predicates.push(Predicate::CasteIn(castes.iter().copied().collect()));
        }
        if let Some(state) = rules.state.as_deref().filter(|s| !s.trim().is_empty()) {
            predicates.push(Predicate::StateIs(state.to_string()));
        }
        if let Some(occupations) = rules.occupation.as_ref().filter(|o| !o.is_empty()) {
            predicates.push(Predicate::OccupationIn(occupations.iter().copied().collect()));
        }
        if let Some(status) = rules.marital_status {
            predicates.push(Predicate::MaritalStatusIs {
                status,
                when_unset: marital_status_policy,
            });
        }

        Self { predicates }
    }

    /// The predicates in evaluation order
    #[must_use]
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Whether the rule set has no predicates
    #[must_use]
    pub fn is_universal(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Add a predicate at the end
    #[must_use]
    pub fn with(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Every predicate the profile fails, in evaluation order
    #[must_use]
    pub fn failed_predicates(&self, profile: &Profile) -> Vec<&Predicate> {
        self.predicates
            .iter()
            .filter(|p| !p.meets_criteria(profile))
            .collect()
    }

    /// The profile fields this rule set reads
    #[must_use]
    pub fn required_fields(&self) -> FxHashSet<ProfileField> {
        self.predicates.iter().map(Predicate::field).collect()
    }
}

impl FilterCriteria<Profile> for RuleSet {
    fn meets_criteria(&self, profile: &Profile) -> bool {
        self.predicates.iter().all(|p| p.meets_criteria(profile))
    }
}
