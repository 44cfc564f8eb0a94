//! Eligibility predicates
//!
//! Each predicate constrains a single profile dimension. A rule set is a
//! list of these, combined with a logical AND.

use std::fmt;

use itertools::Itertools;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::models::{Caste, Gender, MaritalStatus, Occupation, Profile};

/// Defines a criterion for filtering entities
pub trait FilterCriteria<T> {
    /// Determine if an entity meets the filter criteria
    fn meets_criteria(&self, entity: &T) -> bool;
}

/// How a predicate treats a profile whose corresponding field is unset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnsetFieldPolicy {
    /// Reject the profile
    #[default]
    FailClosed,
    /// Let the profile through
    FailOpen,
}

/// A profile attribute read by a predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProfileField {
    /// `Profile::age`
    Age,
    /// `Profile::gender`
    Gender,
    /// `Profile::income`
    Income,
    /// `Profile::occupation`
    Occupation,
    /// `Profile::disability`
    Disability,
    /// `Profile::caste`
    Caste,
    /// `Profile::state`
    State,
    /// `Profile::marital_status`
    MaritalStatus,
}

/// A single eligibility constraint
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Age at least the bound (inclusive)
    AgeAtLeast(u32),
    /// Age at most the bound (inclusive)
    AgeAtMost(u32),
    /// Gender equals the value
    GenderIs(Gender),
    /// Income at most the bound (inclusive)
    IncomeAtMost(f64),
    /// Occupation is student
    RequiresStudent,
    /// Profile has a disability
    RequiresDisability,
    /// Caste is one of the set
    CasteIn(FxHashSet<Caste>),
    /// State equals the value
    StateIs(String),
    /// Occupation is one of the set
    OccupationIn(FxHashSet<Occupation>),
    /// Marital status equals the value
    ///
    /// Marital status is the one optional profile field a rule can target,
    /// so the predicate carries an explicit policy for the unset case.
    MaritalStatusIs {
        /// Required status
        status: MaritalStatus,
        /// Outcome when the profile has no marital status
        when_unset: UnsetFieldPolicy,
    },
}

impl Predicate {
    /// The profile field this predicate reads
    #[must_use]
    pub const fn field(&self) -> ProfileField {
        match self {
            Self::AgeAtLeast(_) | Self::AgeAtMost(_) => ProfileField::Age,
            Self::GenderIs(_) => ProfileField::Gender,
            Self::IncomeAtMost(_) => ProfileField::Income,
            Self::RequiresStudent | Self::OccupationIn(_) => ProfileField::Occupation,
            Self::RequiresDisability => ProfileField::Disability,
            Self::CasteIn(_) => ProfileField::Caste,
            Self::StateIs(_) => ProfileField::State,
            Self::MaritalStatusIs { .. } => ProfileField::MaritalStatus,
        }
    }
}

impl FilterCriteria<Profile> for Predicate {
    fn meets_criteria(&self, profile: &Profile) -> bool {
        match self {
            Self::AgeAtLeast(min) => profile.age >= *min,
            Self::AgeAtMost(max) => profile.age <= *max,
            Self::GenderIs(gender) => profile.gender == *gender,
            Self::IncomeAtMost(max) => profile.income <= *max,
            Self::RequiresStudent => profile.is_student(),
            Self::RequiresDisability => profile.disability,
            Self::CasteIn(castes) => castes.contains(&profile.caste),
            Self::StateIs(state) => profile.state == *state,
            Self::OccupationIn(occupations) => occupations.contains(&profile.occupation),
            Self::MaritalStatusIs { status, when_unset } => match profile.marital_status {
                Some(actual) => actual == *status,
                None => *when_unset == UnsetFieldPolicy::FailOpen,
            },
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AgeAtLeast(min) => write!(f, "age >= {min}"),
            Self::AgeAtMost(max) => write!(f, "age <= {max}"),
            Self::GenderIs(gender) => write!(f, "gender = {gender}"),
            Self::IncomeAtMost(max) => write!(f, "income <= {max}"),
            Self::RequiresStudent => f.write_str("occupation = student"),
            Self::RequiresDisability => f.write_str("disability"),
            Self::CasteIn(castes) => {
                write!(f, "caste in [{}]", castes.iter().map(|c| c.as_str()).sorted().join(", "))
            }
            Self::StateIs(state) => write!(f, "state = {state}"),
            Self::OccupationIn(occupations) => write!(
                f,
                "occupation in [{}]",
                occupations.iter().map(|o| o.as_str()).sorted().join(", ")
            ),
            Self::MaritalStatusIs { status, when_unset } => match when_unset {
                UnsetFieldPolicy::FailClosed => write!(f, "marital status = {status}"),
                UnsetFieldPolicy::FailOpen => write!(f, "marital status = {status} (if given)"),
            },
        }
    }
}
