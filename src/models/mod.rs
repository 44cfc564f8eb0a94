//! Domain models
//!
//! This module contains the data shapes the eligibility engine consumes:
//! citizen profiles, welfare schemes and the enumerations they share.

pub mod profile;
pub mod scheme;
pub mod types;

pub use profile::{NumericInput, OccupationDetails, Profile, ProfileBuilder, ProfileDraft};
pub use scheme::Scheme;
pub use types::{
    ApplicationMode, BeneficiaryGroup, Caste, Gender, GenderRequirement, MaritalStatus,
    Occupation, SchemeCategory,
};
