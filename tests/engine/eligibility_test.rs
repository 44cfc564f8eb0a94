use scheme_match::models::{Caste, Gender, GenderRequirement, MaritalStatus, Occupation};
use scheme_match::{
    EligibilityEngine, EligibilityRules, MatchConfig, NearEligibilityFinder, SchemeCatalog,
    UnimplementedNearEligibility, UnsetFieldPolicy, find_eligible_schemes,
};

use crate::utils::{ids, profile_grid, scheme, student_profile};

/// A scheme with no rules matches every profile
#[test]
fn test_universal_scheme_matches_every_profile() {
    let schemes = vec![scheme("universal", EligibilityRules::default())];
    for profile in profile_grid() {
        assert_eq!(ids(&find_eligible_schemes(&profile, &schemes)), vec!["universal"]);
    }
}

/// Tightening any single rule past the profile excludes a previously eligible scheme
#[test]
fn test_tightening_one_rule_excludes() {
    let profile = student_profile();
    let base = EligibilityRules {
        age_min: Some(18),
        age_max: Some(25),
        income_max: Some(250_000.0),
        caste: Some(vec![Caste::Obc]),
        occupation: Some(vec![Occupation::Student]),
        state: Some("Delhi".to_string()),
        ..EligibilityRules::default()
    };
    let engine = EligibilityEngine::default();
    assert!(engine.is_eligible(&profile, &scheme("base", base.clone())));

    let tightened = [
        EligibilityRules { age_min: Some(21), ..base.clone() },
        EligibilityRules { age_max: Some(19), ..base.clone() },
        EligibilityRules { income_max: Some(199_999.0), ..base.clone() },
        EligibilityRules { caste: Some(vec![Caste::Sc]), ..base.clone() },
        EligibilityRules { occupation: Some(vec![Occupation::Farmer]), ..base.clone() },
        EligibilityRules { state: Some("Kerala".to_string()), ..base.clone() },
        EligibilityRules { gender: Some(GenderRequirement::Male), ..base.clone() },
        EligibilityRules { disability: Some(true), ..base.clone() },
        EligibilityRules { marital_status: Some(MaritalStatus::Married), ..base.clone() },
    ];
    for (i, rules) in tightened.into_iter().enumerate() {
        let s = scheme(&format!("tight-{i}"), rules);
        let report = engine.explain(&profile, &s);
        assert_eq!(report.failed.len(), 1, "rule set {i} should fail exactly once");
        assert!(!engine.is_eligible(&profile, &s));
    }
}

/// Output keeps the relative order of the input
#[test]
fn test_order_is_preserved() {
    let profile = student_profile();
    let schemes = vec![
        scheme("s3", EligibilityRules::default()),
        scheme("s1", EligibilityRules { age_min: Some(99), ..EligibilityRules::default() }),
        scheme("s2", EligibilityRules { state: Some("Delhi".into()), ..EligibilityRules::default() }),
        scheme("s0", EligibilityRules { is_student: Some(true), ..EligibilityRules::default() }),
    ];
    assert_eq!(ids(&find_eligible_schemes(&profile, &schemes)), vec!["s3", "s2", "s0"]);
}

/// Repeated evaluation gives identical results
#[test]
fn test_evaluation_is_idempotent() {
    let catalog = SchemeCatalog::builtin();
    let engine = EligibilityEngine::default();
    for profile in profile_grid() {
        let first = engine.evaluate(&profile, catalog.schemes());
        let second = engine.evaluate(&profile, catalog.schemes());
        assert_eq!(first, second);
    }
}

/// Marital status fails closed when the profile leaves it unset
#[test]
fn test_marital_status_fails_closed() {
    let profile = student_profile();
    assert_eq!(profile.marital_status, None);

    let schemes = vec![scheme(
        "singles",
        EligibilityRules {
            marital_status: Some(MaritalStatus::Single),
            ..EligibilityRules::default()
        },
    )];
    assert!(find_eligible_schemes(&profile, &schemes).is_empty());

    let mut single = profile.clone();
    single.marital_status = Some(MaritalStatus::Single);
    assert_eq!(ids(&find_eligible_schemes(&single, &schemes)), vec!["singles"]);

    let lenient = EligibilityEngine::new(
        MatchConfig::builder()
            .marital_status_policy(UnsetFieldPolicy::FailOpen)
            .build(),
    );
    assert_eq!(ids(&lenient.evaluate(&profile, &schemes)), vec!["singles"]);
}

/// OBC student under the income bound qualifies for PM-YASASVI
#[test]
fn test_pm_yasasvi_includes_obc_student() {
    let catalog = SchemeCatalog::builtin();
    let engine = EligibilityEngine::default();
    let yasasvi = catalog.get("pm-yasasvi").unwrap();
    assert!(engine.is_eligible(&student_profile(), yasasvi));
}

/// Anyone 18 or over qualifies for MGNREGA
#[test]
fn test_mgnrega_includes_adult() {
    let catalog = SchemeCatalog::builtin();
    let engine = EligibilityEngine::default();
    let mgnrega = catalog.get("mgnrega").unwrap();
    assert!(engine.is_eligible(&student_profile(), mgnrega));

    let mut minor = student_profile();
    minor.age = 15;
    assert!(!engine.is_eligible(&minor, mgnrega));
}

/// ADIP requires a disability
#[test]
fn test_adip_excludes_profile_without_disability() {
    let catalog = SchemeCatalog::builtin();
    let engine = EligibilityEngine::default();
    let adip = catalog.get("adip-scheme").unwrap();

    let mut profile = student_profile();
    profile.income = 300_000.0;
    assert!(!engine.is_eligible(&profile, adip));

    profile.disability = true;
    assert!(engine.is_eligible(&profile, adip));
}

/// Full builtin catalog against the baseline student
#[test]
fn test_builtin_catalog_for_student() {
    let catalog = SchemeCatalog::builtin();
    let eligible = find_eligible_schemes(&student_profile(), catalog.schemes());
    assert_eq!(
        ids(&eligible),
        vec!["pm-yasasvi", "mgnrega", "pm-matru-vandana", "pmay-u", "ayushman-bharat"]
    );
}

/// Near-eligibility is an extension point that returns nothing yet
#[test]
fn test_near_eligibility_stub() {
    let catalog = SchemeCatalog::builtin();
    let mut profile = student_profile();
    profile.income = 250_001.0;
    let near = UnimplementedNearEligibility.find_nearly_eligible(&profile, catalog.schemes());
    assert!(near.is_empty());
}

/// Zero upper bounds exclude everyone above zero instead of being ignored
#[test]
fn test_zero_bounds_are_enforced() {
    let profile = student_profile();
    let schemes = vec![
        scheme("no-income", EligibilityRules { income_max: Some(0.0), ..EligibilityRules::default() }),
        scheme("newborns", EligibilityRules { age_max: Some(0), ..EligibilityRules::default() }),
        scheme("open", EligibilityRules::default()),
    ];
    assert_eq!(ids(&find_eligible_schemes(&profile, &schemes)), vec!["open"]);

    let mut infant = profile;
    infant.age = 0;
    infant.income = 0.0;
    assert_eq!(
        ids(&find_eligible_schemes(&infant, &schemes)),
        vec!["no-income", "newborns", "open"]
    );
}

/// A profile of gender `other` never satisfies a gender-restricted scheme
#[test]
fn test_other_gender_excluded_from_female_scheme() {
    let engine = EligibilityEngine::default();
    let women_only = scheme(
        "women-only",
        EligibilityRules { gender: Some(GenderRequirement::Female), ..EligibilityRules::default() },
    );
    let everyone = scheme(
        "everyone",
        EligibilityRules { gender: Some(GenderRequirement::All), ..EligibilityRules::default() },
    );

    let mut profile = student_profile();
    profile.gender = Gender::Other;
    assert!(!engine.is_eligible(&profile, &women_only));
    assert!(engine.is_eligible(&profile, &everyone));
    assert_eq!(engine.explain(&profile, &women_only).failed.len(), 1);
}
