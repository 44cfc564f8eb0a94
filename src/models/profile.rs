//! Citizen profile model
//!
//! A `Profile` is the fully resolved, numeric form of a citizen's
//! self-reported attributes and is the only shape the eligibility engine
//! accepts. Form input arrives as a `ProfileDraft`, where age and income may
//! still be blank or textual; `ProfileDraft::resolve` is the boundary that
//! turns one into the other.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchemeError};
use crate::models::types::{Caste, Gender, MaritalStatus, Occupation};

/// Occupation-conditional details
///
/// Informational only: none of these fields take part in eligibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupationDetails {
    /// Institute name, for students
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institute: Option<String>,
    /// Employer name, for employed citizens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Farm size as entered, for farmers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub farm_size: Option<String>,
}

/// A citizen's resolved socio-economic profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Display name
    pub name: String,
    /// Age in whole years
    pub age: u32,
    /// Gender
    pub gender: Gender,
    /// Annual income, currency-agnostic units
    pub income: f64,
    /// State or union territory of residence
    pub state: String,
    /// District of residence
    #[serde(default)]
    pub district: String,
    /// City of residence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Primary occupation
    pub occupation: Occupation,
    /// Whether the citizen has a disability
    #[serde(default)]
    pub disability: bool,
    /// Social category
    pub caste: Caste,
    /// Marital status, if the citizen provided one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<MaritalStatus>,
    /// Occupation-conditional details
    #[serde(flatten)]
    pub details: OccupationDetails,
}

impl Profile {
    /// Start building a profile from its required attributes
    #[must_use]
    pub fn builder(name: impl Into<String>, age: u32, income: f64) -> ProfileBuilder {
        ProfileBuilder::new(name, age, income)
    }

    /// Check the invariants a profile must hold before evaluation
    ///
    /// Profiles deserialized from a store go through this before use.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SchemeError::validation("name", "is required"));
        }
        if self.state.trim().is_empty() {
            return Err(SchemeError::validation("state", "is required"));
        }
        check_income(self.income)?;
        Ok(())
    }

    /// Whether the citizen is currently a student
    #[must_use]
    pub fn is_student(&self) -> bool {
        self.occupation == Occupation::Student
    }
}

fn check_income(income: f64) -> Result<()> {
    if !income.is_finite() {
        return Err(SchemeError::validation("income", "must be a finite number"));
    }
    if income < 0.0 {
        return Err(SchemeError::validation("income", "must not be negative"));
    }
    Ok(())
}

/// Builder for constructing a profile
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    profile: Profile,
}

impl ProfileBuilder {
    /// Create a builder with neutral defaults for the optional attributes
    #[must_use]
    pub fn new(name: impl Into<String>, age: u32, income: f64) -> Self {
        Self {
            profile: Profile {
                name: name.into(),
                age,
                gender: Gender::Other,
                income,
                state: String::new(),
                district: String::new(),
                city: None,
                occupation: Occupation::Unemployed,
                disability: false,
                caste: Caste::General,
                marital_status: None,
                details: OccupationDetails::default(),
            },
        }
    }

    /// Set the gender
    #[must_use]
    pub const fn gender(mut self, gender: Gender) -> Self {
        self.profile.gender = gender;
        self
    }

    /// Set the state of residence
    #[must_use]
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.profile.state = state.into();
        self
    }

    /// Set the district of residence
    #[must_use]
    pub fn district(mut self, district: impl Into<String>) -> Self {
        self.profile.district = district.into();
        self
    }

    /// Set the city of residence
    #[must_use]
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.profile.city = Some(city.into());
        self
    }

    /// Set the occupation
    #[must_use]
    pub const fn occupation(mut self, occupation: Occupation) -> Self {
        self.profile.occupation = occupation;
        self
    }

    /// Set the disability flag
    #[must_use]
    pub const fn disability(mut self, disability: bool) -> Self {
        self.profile.disability = disability;
        self
    }

    /// Set the social category
    #[must_use]
    pub const fn caste(mut self, caste: Caste) -> Self {
        self.profile.caste = caste;
        self
    }

    /// Set the marital status
    #[must_use]
    pub const fn marital_status(mut self, status: MaritalStatus) -> Self {
        self.profile.marital_status = Some(status);
        self
    }

    /// Set the occupation-conditional details
    #[must_use]
    pub fn details(mut self, details: OccupationDetails) -> Self {
        self.profile.details = details;
        self
    }

    /// Build the profile, checking its invariants
    pub fn build(self) -> Result<Profile> {
        self.profile.validate()?;
        Ok(self.profile)
    }
}

/// A numeric form field that may still be blank or textual
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    /// A JSON number
    Number(f64),
    /// Raw text, possibly blank
    Text(String),
}

impl NumericInput {
    fn resolve(&self, field: &str) -> Result<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Err(SchemeError::validation(field, "is required"));
                }
                trimmed.parse::<f64>().map_err(|_| {
                    SchemeError::validation(field, format!("'{trimmed}' is not a number"))
                })?
            }
        };
        if !value.is_finite() {
            return Err(SchemeError::validation(field, "must be a finite number"));
        }
        if value < 0.0 {
            return Err(SchemeError::validation(field, "must not be negative"));
        }
        Ok(value)
    }
}

impl Default for NumericInput {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

/// Form-shaped profile as submitted by the citizen
///
/// Age and income start out blank; everything else is already typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Age as entered
    #[serde(default)]
    pub age: NumericInput,
    /// Gender
    pub gender: Gender,
    /// Annual income as entered
    #[serde(default)]
    pub income: NumericInput,
    /// State of residence
    #[serde(default)]
    pub state: String,
    /// District of residence
    #[serde(default)]
    pub district: String,
    /// City of residence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Primary occupation
    pub occupation: Occupation,
    /// Disability flag
    #[serde(default)]
    pub disability: bool,
    /// Social category
    pub caste: Caste,
    /// Marital status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<MaritalStatus>,
    /// Occupation-conditional details
    #[serde(flatten)]
    pub details: OccupationDetails,
}

impl ProfileDraft {
    /// Resolve the draft into a numeric profile
    ///
    /// Blank, non-numeric, negative or non-finite age and income are
    /// rejected here so that the engine only ever sees resolved numbers.
    /// Ages must be whole years.
    pub fn resolve(self) -> Result<Profile> {
        let age = self.age.resolve("age")?;
        if age.fract() != 0.0 {
            return Err(SchemeError::validation("age", "must be a whole number of years"));
        }
        if age > f64::from(u32::MAX) {
            return Err(SchemeError::validation("age", "is out of range"));
        }
        let income = self.income.resolve("income")?;

        let profile = Profile {
            name: self.name.trim().to_string(),
            age: age as u32,
            gender: self.gender,
            income,
            state: self.state.trim().to_string(),
            district: self.district.trim().to_string(),
            city: self.city.filter(|c| !c.trim().is_empty()),
            occupation: self.occupation,
            disability: self.disability,
            caste: self.caste,
            marital_status: self.marital_status,
            details: self.details,
        };
        profile.validate()?;
        Ok(profile)
    }
}
