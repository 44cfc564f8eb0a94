//! Near-eligibility extension point
//!
//! A near-eligible scheme is one the profile misses by a single predicate,
//! such as an income slightly over the bound. Finding and ranking those is
//! not implemented; the trait fixes the interface so an implementation can
//! be slotted in without touching `EligibilityEngine::evaluate`.

use log::debug;

use crate::models::{Profile, Scheme};

/// Finds schemes a profile almost qualifies for
pub trait NearEligibilityFinder {
    /// Schemes the profile nearly qualifies for, in input order
    fn find_nearly_eligible<'a>(&self, profile: &Profile, schemes: &'a [Scheme])
    -> Vec<&'a Scheme>;
}

/// Placeholder finder that never reports any scheme
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedNearEligibility;

impl NearEligibilityFinder for UnimplementedNearEligibility {
    fn find_nearly_eligible<'a>(
        &self,
        profile: &Profile,
        schemes: &'a [Scheme],
    ) -> Vec<&'a Scheme> {
        debug!(
            "Near-eligibility is not implemented; skipping {} schemes for '{}'",
            schemes.len(),
            profile.name
        );
        Vec::new()
    }
}
