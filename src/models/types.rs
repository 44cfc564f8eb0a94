//! Common domain type definitions
//!
//! This module contains the enumerations shared by profiles, schemes and
//! eligibility rules. Every enum serializes in `snake_case`, matching the
//! values the catalog and profile stores emit, and parses leniently from
//! strings (case-insensitive, surrounding whitespace ignored).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SchemeError;

/// Generate `as_str`, `Display` and `FromStr` for a unit-only enum
macro_rules! string_enum {
    ($name:ident, $field:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            /// All variants in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The canonical wire representation
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = SchemeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
                match normalized.as_str() {
                    $($text => Ok(Self::$variant),)+
                    _ => Err(SchemeError::validation(
                        $field,
                        format!("unrecognised value '{}'", s.trim()),
                    )),
                }
            }
        }
    };
}

/// Gender of a citizen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Other or not disclosed
    Other,
}

string_enum!(Gender, "gender", {
    Male => "male",
    Female => "female",
    Other => "other",
});

/// Primary occupation of a citizen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occupation {
    /// Enrolled in school, college or university
    Student,
    /// Salaried employment
    Employed,
    /// Not currently working
    Unemployed,
    /// Self-employed or running a business
    SelfEmployed,
    /// Retired
    Retired,
    /// Farmer or agricultural worker
    Farmer,
}

string_enum!(Occupation, "occupation", {
    Student => "student",
    Employed => "employed",
    Unemployed => "unemployed",
    SelfEmployed => "self_employed",
    Retired => "retired",
    Farmer => "farmer",
});

/// Social category of a citizen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Caste {
    /// Scheduled Caste
    Sc,
    /// Scheduled Tribe
    St,
    /// Other Backward Class
    Obc,
    /// General category
    General,
}

string_enum!(Caste, "caste", {
    Sc => "sc",
    St => "st",
    Obc => "obc",
    General => "general",
});

/// Marital status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    /// Never married
    Single,
    /// Currently married
    Married,
    /// Widowed
    Widowed,
}

string_enum!(MaritalStatus, "maritalStatus", {
    Single => "single",
    Married => "married",
    Widowed => "widowed",
});

/// Category tag of a scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemeCategory {
    /// Education and scholarships
    Education,
    /// Health care and insurance
    Health,
    /// Financial assistance
    Finance,
    /// Agriculture and farming
    Agriculture,
    /// General social welfare
    SocialWelfare,
    /// Housing
    Housing,
    /// Employment and livelihood
    Employment,
}

string_enum!(SchemeCategory, "category", {
    Education => "education",
    Health => "health",
    Finance => "finance",
    Agriculture => "agriculture",
    SocialWelfare => "social_welfare",
    Housing => "housing",
    Employment => "employment",
});

/// Beneficiary-group tag of a scheme
///
/// Descriptive only; the evaluator never reads these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeneficiaryGroup {
    /// Children
    Child,
    /// Students
    Student,
    /// Youth
    Youth,
    /// Adults
    Adult,
    /// Women
    Woman,
    /// Senior citizens
    SeniorCitizen,
    /// Persons with disability
    Pwd,
}

string_enum!(BeneficiaryGroup, "beneficiaryGroups", {
    Child => "child",
    Student => "student",
    Youth => "youth",
    Adult => "adult",
    Woman => "woman",
    SeniorCitizen => "senior_citizen",
    Pwd => "pwd",
});

/// How an application to a scheme is submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationMode {
    /// Through an online portal
    Online,
    /// In person or by post
    Offline,
    /// Either way
    Both,
}

string_enum!(ApplicationMode, "applicationMode", {
    Online => "online",
    Offline => "offline",
    Both => "both",
});

/// Gender constraint carried by a rule set
///
/// Catalogs write `"all"` for an unconstrained rule; any other value names
/// the single gender the scheme is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenderRequirement {
    /// No constraint
    All,
    /// Male only
    Male,
    /// Female only
    Female,
}

impl GenderRequirement {
    /// The gender this requirement restricts to, if any
    #[must_use]
    pub const fn required(self) -> Option<Gender> {
        match self {
            Self::All => None,
            Self::Male => Some(Gender::Male),
            Self::Female => Some(Gender::Female),
        }
    }
}

string_enum!(GenderRequirement, "gender", {
    All => "all",
    Male => "male",
    Female => "female",
});
