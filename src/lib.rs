//! A Rust library for matching citizen profiles against a catalog of
//! government welfare schemes, with catalog loading, profile storage and
//! browse filtering around the eligibility engine.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod rules;
pub mod store;

// Re-export the most common types for easier use
// Core types
pub use config::MatchConfig;
pub use error::{Result, SchemeError};
pub use models::{Profile, ProfileDraft, Scheme};

// Evaluation
pub use engine::{
    Eligibility, EligibilityEngine, EligibilityReport, NearEligibilityFinder, TaggedScheme,
    UnimplementedNearEligibility, find_eligible_schemes,
};
pub use rules::{EligibilityRules, FilterCriteria, Predicate, RuleSet, UnsetFieldPolicy};

// Catalog and storage
pub use catalog::{SchemeCatalog, SchemeQuery, load_with_fallback};
pub use store::{
    Application, ApplicationStatus, Applications, InMemoryProfileStore, JsonFileProfileStore,
    ProfileStore, SavedSchemes,
};
