//! Shared fixtures for integration tests

#![allow(dead_code)]

use scheme_match::models::{ApplicationMode, Caste, Gender, MaritalStatus, Occupation};
use scheme_match::{EligibilityRules, Profile, Scheme};

/// A fully eligible-looking baseline profile: 20-year-old OBC student in Delhi
#[must_use]
pub fn student_profile() -> Profile {
    Profile::builder("Asha", 20, 200_000.0)
        .gender(Gender::Female)
        .state("Delhi")
        .district("New Delhi")
        .occupation(Occupation::Student)
        .caste(Caste::Obc)
        .build()
        .expect("fixture profile is valid")
}

/// A set of profiles covering every enum value at least once
#[must_use]
pub fn profile_grid() -> Vec<Profile> {
    let mut profiles = Vec::new();
    for (i, occupation) in Occupation::ALL.iter().enumerate() {
        for caste in Caste::ALL {
            for gender in Gender::ALL {
                let mut builder = Profile::builder("Grid", 10 + 12 * i as u32, 50_000.0 * i as f64)
                    .gender(*gender)
                    .state(if i % 2 == 0 { "Delhi" } else { "Kerala" })
                    .occupation(*occupation)
                    .caste(*caste)
                    .disability(i % 3 == 0);
                if let Some(status) = MaritalStatus::ALL.get(i % 4) {
                    builder = builder.marital_status(*status);
                }
                profiles.push(builder.build().expect("grid profile is valid"));
            }
        }
    }
    profiles
}

/// A minimal scheme with the given rules
#[must_use]
pub fn scheme(id: &str, eligibility: EligibilityRules) -> Scheme {
    Scheme {
        id: id.to_string(),
        name: format!("Scheme {id}"),
        ministry: "Ministry of Testing".to_string(),
        description: String::new(),
        category: vec![],
        beneficiary_groups: vec![],
        eligibility,
        benefits: vec![],
        documents_required: vec![],
        application_mode: ApplicationMode::Online,
        official_url: None,
        application_deadline: None,
    }
}

/// Ids of the given schemes, in order
#[must_use]
pub fn ids(schemes: &[&Scheme]) -> Vec<String> {
    schemes.iter().map(|s| s.id.clone()).collect()
}
