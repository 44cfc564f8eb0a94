//! Eligibility engine
//!
//! Maps a profile and a list of schemes to the schemes the profile
//! qualifies for. Evaluation is pure: no I/O, no shared state, nothing is
//! retained past the call, and the output keeps the input order.

pub mod near;

use log::{debug, info};
use rayon::prelude::*;
use serde::Serialize;

use crate::config::MatchConfig;
use crate::models::{Profile, Scheme};
use crate::rules::{FilterCriteria, Predicate, RuleSet};

pub use near::{NearEligibilityFinder, UnimplementedNearEligibility};

/// Eligibility of one scheme as shown to the citizen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Eligibility {
    /// The profile satisfies every rule
    Eligible,
    /// The profile fails at least one rule
    NotEligible,
    /// No profile is available yet
    Unknown,
}

impl Eligibility {
    /// Whether this is `Eligible`
    #[must_use]
    pub const fn is_eligible(self) -> bool {
        matches!(self, Self::Eligible)
    }
}

impl From<bool> for Eligibility {
    fn from(eligible: bool) -> Self {
        if eligible { Self::Eligible } else { Self::NotEligible }
    }
}

/// A scheme paired with its eligibility tag
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaggedScheme<'a> {
    /// The scheme
    pub scheme: &'a Scheme,
    /// Eligibility of the current profile
    pub eligibility: Eligibility,
}

/// Why a profile does or does not qualify for a scheme
#[derive(Debug, Clone, PartialEq)]
pub struct EligibilityReport {
    /// Scheme identifier
    pub scheme_id: String,
    /// Predicates the profile failed, in evaluation order
    pub failed: Vec<Predicate>,
}

impl EligibilityReport {
    /// Whether the profile qualifies
    #[must_use]
    pub fn is_eligible(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Rule evaluator over profiles and schemes
#[derive(Debug, Clone, Default)]
pub struct EligibilityEngine {
    config: MatchConfig,
}

impl EligibilityEngine {
    /// Create an engine with the given configuration
    #[must_use]
    pub const fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// The engine configuration
    #[must_use]
    pub const fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Lower a scheme's catalog rules with this engine's policies
    #[must_use]
    pub fn rule_set(&self, scheme: &Scheme) -> RuleSet {
        RuleSet::from_rules(&scheme.eligibility, self.config.marital_status_policy)
    }

    /// Whether the profile qualifies for a single scheme
    #[must_use]
    pub fn is_eligible(&self, profile: &Profile, scheme: &Scheme) -> bool {
        self.rule_set(scheme).meets_criteria(profile)
    }

    /// Explain the outcome for a single scheme
    #[must_use]
    pub fn explain(&self, profile: &Profile, scheme: &Scheme) -> EligibilityReport {
        let rules = self.rule_set(scheme);
        EligibilityReport {
            scheme_id: scheme.id.clone(),
            failed: rules.failed_predicates(profile).into_iter().cloned().collect(),
        }
    }

    /// Schemes the profile qualifies for, in input order
    ///
    /// Large catalogs are evaluated on the rayon pool when the configuration
    /// allows it; the result is identical either way.
    #[must_use]
    pub fn evaluate<'a>(&self, profile: &Profile, schemes: &'a [Scheme]) -> Vec<&'a Scheme> {
        let eligible: Vec<&Scheme> = if self.config.should_parallelize(schemes.len()) {
            debug!("Evaluating {} schemes in parallel", schemes.len());
            schemes
                .par_iter()
                .filter(|scheme| self.is_eligible(profile, scheme))
                .collect()
        } else {
            schemes
                .iter()
                .filter(|scheme| self.check_and_log(profile, scheme))
                .collect()
        };

        info!(
            "Profile '{}' is eligible for {} of {} schemes",
            profile.name,
            eligible.len(),
            schemes.len()
        );
        eligible
    }

    /// Tag every scheme with the profile's eligibility
    ///
    /// Without a profile every scheme is tagged `Unknown`, so callers can
    /// still show the full list.
    #[must_use]
    pub fn tag_schemes<'a>(
        &self,
        profile: Option<&Profile>,
        schemes: &'a [Scheme],
    ) -> Vec<TaggedScheme<'a>> {
        schemes
            .iter()
            .map(|scheme| self.tag(profile, scheme))
            .collect()
    }

    /// Tag a single scheme
    #[must_use]
    pub fn tag<'a>(&self, profile: Option<&Profile>, scheme: &'a Scheme) -> TaggedScheme<'a> {
        let eligibility = profile.map_or(Eligibility::Unknown, |p| {
            Eligibility::from(self.is_eligible(p, scheme))
        });
        TaggedScheme {
            scheme,
            eligibility,
        }
    }

    fn check_and_log(&self, profile: &Profile, scheme: &Scheme) -> bool {
        if !log::log_enabled!(log::Level::Debug) {
            return self.is_eligible(profile, scheme);
        }

        let report = self.explain(profile, scheme);
        if report.is_eligible() {
            debug!("Scheme '{}': eligible", scheme.id);
        } else {
            let reasons: Vec<String> = report.failed.iter().map(ToString::to_string).collect();
            debug!("Scheme '{}': failed {}", scheme.id, reasons.join("; "));
        }
        report.is_eligible()
    }
}

/// Schemes the profile qualifies for, using the default configuration
#[must_use]
pub fn find_eligible_schemes<'a>(profile: &Profile, schemes: &'a [Scheme]) -> Vec<&'a Scheme> {
    EligibilityEngine::default().evaluate(profile, schemes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ApplicationMode, Caste, Gender, Occupation};
    use crate::rules::EligibilityRules;

    fn scheme(id: &str, eligibility: EligibilityRules) -> Scheme {
        Scheme {
            id: id.to_string(),
            name: id.to_uppercase(),
            ministry: "Ministry".to_string(),
            description: String::new(),
            category: vec![],
            beneficiary_groups: vec![],
            eligibility,
            benefits: vec![],
            documents_required: vec![],
            application_mode: ApplicationMode::Both,
            official_url: None,
            application_deadline: None,
        }
    }

    fn profile() -> Profile {
        Profile::builder("Asha", 20, 200_000.0)
            .gender(Gender::Female)
            .state("Delhi")
            .occupation(Occupation::Student)
            .caste(Caste::Obc)
            .build()
            .unwrap()
    }

    #[test]
    fn test_evaluate_filters_in_order() {
        let schemes = vec![
            scheme("a", EligibilityRules::default()),
            scheme(
                "b",
                EligibilityRules {
                    age_min: Some(60),
                    ..EligibilityRules::default()
                },
            ),
            scheme(
                "c",
                EligibilityRules {
                    age_min: Some(18),
                    ..EligibilityRules::default()
                },
            ),
        ];
        let ids: Vec<&str> = EligibilityEngine::default()
            .evaluate(&profile(), &schemes)
            .into_iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let schemes: Vec<Scheme> = (0..40)
            .map(|i| {
                scheme(
                    &format!("s{i}"),
                    EligibilityRules {
                        age_min: Some(i),
                        ..EligibilityRules::default()
                    },
                )
            })
            .collect();

        let sequential = EligibilityEngine::new(MatchConfig::builder().use_parallel(false).build());
        let parallel = EligibilityEngine::new(MatchConfig::builder().parallel_threshold(1).build());
        assert_eq!(
            sequential.evaluate(&profile(), &schemes),
            parallel.evaluate(&profile(), &schemes)
        );
        assert_eq!(sequential.evaluate(&profile(), &schemes).len(), 21);
    }

    #[test]
    fn test_tag_without_profile_is_unknown() {
        let schemes = vec![scheme("a", EligibilityRules::default())];
        let tagged = EligibilityEngine::default().tag_schemes(None, &schemes);
        assert_eq!(tagged[0].eligibility, Eligibility::Unknown);
        assert!(!tagged[0].eligibility.is_eligible());
    }

    #[test]
    fn test_explain() {
        let s = scheme(
            "adip",
            EligibilityRules {
                disability: Some(true),
                ..EligibilityRules::default()
            },
        );
        let report = EligibilityEngine::default().explain(&profile(), &s);
        assert_eq!(report.scheme_id, "adip");
        assert_eq!(report.failed, vec![Predicate::RequiresDisability]);
        assert!(!report.is_eligible());
    }

    #[test]
    fn test_empty_catalog() {
        assert!(find_eligible_schemes(&profile(), &[]).is_empty());
    }
}
