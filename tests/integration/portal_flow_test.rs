use std::io::Write;

use scheme_match::catalog::{JsonFileSource, load_catalog_async};
use scheme_match::models::SchemeCategory;
use chrono::NaiveDate;
use scheme_match::{
    ApplicationStatus, Applications, Eligibility, EligibilityEngine, JsonFileProfileStore,
    ProfileDraft, ProfileStore, SavedSchemes, SchemeCatalog, SchemeQuery, load_with_fallback,
};

use crate::utils::student_profile;

const FORM_JSON: &str = r#"{
    "name": "Lakshmi",
    "age": "67",
    "gender": "female",
    "income": "85000",
    "state": "Tamil Nadu",
    "district": "Madurai",
    "occupation": "retired",
    "disability": true,
    "caste": "sc",
    "maritalStatus": "widowed"
}"#;

/// Form submission through storage to a tagged browse listing
#[test]
fn test_form_to_listing() {
    let profile = serde_json::from_str::<ProfileDraft>(FORM_JSON)
        .unwrap()
        .resolve()
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileProfileStore::new(dir.path().join("profiles.json"));
    store.save("citizen-1", &profile).unwrap();
    let stored = store.load("citizen-1").unwrap().unwrap();
    assert_eq!(stored, profile);

    let catalog = SchemeCatalog::builtin();
    let engine = EligibilityEngine::default();
    let listing = SchemeQuery::new()
        .category(SchemeCategory::Health)
        .apply(&catalog, Some(&stored), &engine);

    let tags: Vec<(&str, Eligibility)> = listing
        .iter()
        .map(|t| (t.scheme.id.as_str(), t.eligibility))
        .collect();
    assert_eq!(
        tags,
        vec![
            ("pm-matru-vandana", Eligibility::Eligible),
            ("pm-vayoshri", Eligibility::Eligible),
            ("adip-scheme", Eligibility::Eligible),
            ("ayushman-bharat", Eligibility::Eligible),
        ]
    );
}

/// A blank age never reaches the engine
#[test]
fn test_incomplete_form_is_rejected() {
    let json = FORM_JSON.replace("\"67\"", "\"\"");
    let draft: ProfileDraft = serde_json::from_str(&json).unwrap();
    assert!(draft.resolve().is_err());
}

/// Saved schemes are tagged the same way as the browse listing
#[test]
fn test_saved_schemes_tagging() {
    let catalog = SchemeCatalog::builtin();
    let engine = EligibilityEngine::default();
    let profile = student_profile();

    let mut saved = SavedSchemes::new();
    saved.save("pm-vayoshri");
    saved.save("pm-yasasvi");

    let tags: Vec<(String, Eligibility)> = saved
        .resolve(&catalog)
        .into_iter()
        .map(|s| (s.id.clone(), engine.tag(Some(&profile), s).eligibility))
        .collect();
    assert_eq!(
        tags,
        vec![
            ("pm-yasasvi".to_string(), Eligibility::Eligible),
            ("pm-vayoshri".to_string(), Eligibility::NotEligible),
        ]
    );
}

/// A broken catalog file falls back to the bundled catalog
#[test]
fn test_broken_catalog_falls_back() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ not a catalog").unwrap();

    let catalog = load_with_fallback(&JsonFileSource::new(file.path()));
    assert_eq!(catalog, SchemeCatalog::builtin());
}

/// Catalog files round-trip through the async loader
#[tokio::test]
async fn test_async_catalog_load() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let json = serde_json::to_string_pretty(SchemeCatalog::builtin().schemes()).unwrap();
    write!(file, "{json}").unwrap();

    let catalog = load_catalog_async(file.path()).await.unwrap();
    assert_eq!(catalog.len(), 8);
    assert_eq!(catalog.get("pmay-u").unwrap().official_url.as_deref(), Some("https://pmaymis.gov.in/"));
}

/// Applying to every eligible scheme and tracking one through to approval
#[test]
fn test_apply_and_track() {
    let catalog = SchemeCatalog::builtin();
    let engine = EligibilityEngine::default();
    let profile = student_profile();
    let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

    let mut applications = Applications::new();
    for scheme in engine.evaluate(&profile, catalog.schemes()) {
        applications.add_application(&scheme.id, &scheme.name, today);
    }
    assert_eq!(applications.len(), 5);
    assert_eq!(applications.applications()[0].scheme_id, "ayushman-bharat");
    assert!(applications.application_for_scheme("pm-vayoshri").is_none());

    let id = applications.application_for_scheme("pm-yasasvi").unwrap().id.clone();
    applications.update_status(&id, ApplicationStatus::Verified, 3).unwrap();
    applications.update_status(&id, ApplicationStatus::Approved, 4).unwrap();
    let yasasvi = applications.application_for_scheme("pm-yasasvi").unwrap();
    assert_eq!(yasasvi.status, ApplicationStatus::Approved);
    assert_eq!(yasasvi.scheme_name, catalog.require("pm-yasasvi").unwrap().name);

    let stored = serde_json::to_string(&applications).unwrap();
    let mut reloaded: Applications = serde_json::from_str(&stored).unwrap();
    assert!(reloaded.remove_application(&id));
    assert_eq!(reloaded.len(), 4);
    assert!(reloaded.application_for_scheme("pm-yasasvi").is_none());
}
