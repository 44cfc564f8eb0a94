//! Bundled reference catalog
//!
//! Used when the catalog store is unreachable or empty.

use crate::models::{ApplicationMode, BeneficiaryGroup, Caste, GenderRequirement, Scheme, SchemeCategory};
use crate::rules::EligibilityRules;

struct Entry {
    id: &'static str,
    name: &'static str,
    ministry: &'static str,
    description: &'static str,
    category: &'static [SchemeCategory],
    groups: &'static [BeneficiaryGroup],
    benefits: &'static [&'static str],
    documents: &'static [&'static str],
    mode: ApplicationMode,
    url: Option<&'static str>,
}

impl Entry {
    fn into_scheme(self, eligibility: EligibilityRules) -> Scheme {
        Scheme {
            id: self.id.to_string(),
            name: self.name.to_string(),
            ministry: self.ministry.to_string(),
            description: self.description.to_string(),
            category: self.category.to_vec(),
            beneficiary_groups: self.groups.to_vec(),
            eligibility,
            benefits: self.benefits.iter().map(|s| (*s).to_string()).collect(),
            documents_required: self.documents.iter().map(|s| (*s).to_string()).collect(),
            application_mode: self.mode,
            official_url: self.url.map(str::to_string),
            application_deadline: None,
        }
    }
}

const SOCIAL_JUSTICE: &str = "Ministry of Social Justice and Empowerment";

/// The bundled schemes, in catalog order
#[must_use]
pub fn schemes() -> Vec<Scheme> {
    vec![
        Entry {
            id: "pm-poshan",
            name: "PM POSHAN (Mid-Day Meal)",
            ministry: "Ministry of Education",
            description: "Provides hot cooked meals to school children in government and government-aided schools.",
            category: &[SchemeCategory::Education, SchemeCategory::SocialWelfare],
            groups: &[BeneficiaryGroup::Child, BeneficiaryGroup::Student],
            benefits: &["Nutritious hot cooked meal every school day"],
            documents: &["School Admission Record"],
            mode: ApplicationMode::Offline,
            url: None,
        }
        .into_scheme(EligibilityRules {
            age_max: Some(14),
            is_student: Some(true),
            ..EligibilityRules::default()
        }),
        Entry {
            id: "pm-yasasvi",
            name: "PM-YASASVI Scholarship",
            ministry: SOCIAL_JUSTICE,
            description: "Scholarship for OBC, EBC and DNT students for Top Class School Education.",
            category: &[SchemeCategory::Education, SchemeCategory::Finance],
            groups: &[BeneficiaryGroup::Student, BeneficiaryGroup::Youth],
            benefits: &["Financial assistance for education up to Rs. 75,000 - 1,25,000 p.a."],
            documents: &["Income Certificate", "Caste Certificate", "Aadhaar Card"],
            mode: ApplicationMode::Online,
            url: Some("https://yet.nta.ac.in/"),
        }
        .into_scheme(EligibilityRules {
            caste: Some(vec![Caste::Obc]),
            income_max: Some(250_000.0),
            is_student: Some(true),
            ..EligibilityRules::default()
        }),
        Entry {
            id: "mgnrega",
            name: "MGNREGA",
            ministry: "Ministry of Rural Development",
            description: "Guarantees 100 days of wage employment in a financial year to a rural household whose adult members volunteer to do unskilled manual work.",
            category: &[SchemeCategory::Employment, SchemeCategory::SocialWelfare],
            groups: &[BeneficiaryGroup::Adult],
            benefits: &["100 days of guaranteed wage employment"],
            documents: &["Job Card", "Aadhaar Card", "Bank Account"],
            mode: ApplicationMode::Offline,
            url: None,
        }
        .into_scheme(EligibilityRules {
            age_min: Some(18),
            ..EligibilityRules::default()
        }),
        Entry {
            id: "pm-matru-vandana",
            name: "Pradhan Mantri Matru Vandana Yojana",
            ministry: "Ministry of Women and Child Development",
            description: "Maternity benefit program providing partial compensation for the wage loss in terms of cash incentives so that the woman can take adequate rest before and after delivery.",
            category: &[SchemeCategory::Health, SchemeCategory::SocialWelfare],
            groups: &[BeneficiaryGroup::Woman],
            benefits: &["Rs. 5000 in three installments"],
            documents: &["MCP Card", "Aadhaar Card", "Bank Account"],
            mode: ApplicationMode::Both,
            url: None,
        }
        .into_scheme(EligibilityRules {
            gender: Some(GenderRequirement::Female),
            age_min: Some(19),
            ..EligibilityRules::default()
        }),
        Entry {
            id: "pm-vayoshri",
            name: "Rashtriya Vayoshri Yojana",
            ministry: SOCIAL_JUSTICE,
            description: "Scheme for providing Physical Aids and Assisted-living Devices for Senior citizens belonging to BPL category.",
            category: &[SchemeCategory::SocialWelfare, SchemeCategory::Health],
            groups: &[BeneficiaryGroup::SeniorCitizen],
            benefits: &["Free assisted-living devices (walking sticks, hearing aids, etc.)"],
            documents: &["Aadhaar Card", "Income Certificate/BPL Card", "Medical Certificate"],
            mode: ApplicationMode::Offline,
            url: None,
        }
        .into_scheme(EligibilityRules {
            age_min: Some(60),
            // income bound stands in for BPL status
            income_max: Some(100_000.0),
            ..EligibilityRules::default()
        }),
        Entry {
            id: "adip-scheme",
            name: "ADIP Scheme",
            ministry: SOCIAL_JUSTICE,
            description: "Assistance to Disabled Persons for Purchase/Fitting of Aids and Appliances.",
            category: &[SchemeCategory::SocialWelfare, SchemeCategory::Health],
            groups: &[BeneficiaryGroup::Pwd],
            benefits: &["Free or subsidized aids and appliances"],
            documents: &["Disability Certificate (40%+)", "Income Certificate"],
            mode: ApplicationMode::Offline,
            url: None,
        }
        .into_scheme(EligibilityRules {
            disability: Some(true),
            ..EligibilityRules::default()
        }),
        Entry {
            id: "pmay-u",
            name: "Pradhan Mantri Awas Yojana (Urban)",
            ministry: "Ministry of Housing and Urban Affairs",
            description: "Housing for All in urban areas.",
            category: &[SchemeCategory::Housing],
            groups: &[BeneficiaryGroup::Adult, BeneficiaryGroup::SeniorCitizen],
            benefits: &["Interest subsidy on home loan up to Rs. 2.67 Lakh"],
            documents: &["Aadhaar Card", "Income Proof"],
            mode: ApplicationMode::Online,
            url: Some("https://pmaymis.gov.in/"),
        }
        .into_scheme(EligibilityRules {
            age_min: Some(18),
            income_max: Some(1_800_000.0),
            ..EligibilityRules::default()
        }),
        Entry {
            id: "ayushman-bharat",
            name: "Ayushman Bharat PM-JAY",
            ministry: "Ministry of Health and Family Welfare",
            description: "World's largest government funded healthcare program targeting more than 50 crore beneficiaries.",
            category: &[SchemeCategory::Health],
            groups: &[
                BeneficiaryGroup::Adult,
                BeneficiaryGroup::SeniorCitizen,
                BeneficiaryGroup::Child,
                BeneficiaryGroup::Woman,
                BeneficiaryGroup::Pwd,
            ],
            benefits: &["Health cover of Rs. 5 lakhs per family per year"],
            documents: &["Aadhaar Card", "Ration Card"],
            mode: ApplicationMode::Online,
            url: Some("https://pmjay.gov.in/"),
        }
        .into_scheme(EligibilityRules {
            income_max: Some(250_000.0),
            ..EligibilityRules::default()
        }),
    ]
}
