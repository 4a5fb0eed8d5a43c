use crate::core::catalog::Catalog;
use crate::core::rules::evaluate;
use crate::models::{EligibilityPolicy, Profile, Program};

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult<'a> {
    /// Admitted programs, in catalog order
    pub eligible: Vec<&'a Program>,
    pub total_programs: usize,
}

impl MatchResult<'_> {
    pub fn names(&self) -> Vec<&str> {
        self.eligible.iter().map(|p| p.name.as_str()).collect()
    }
}

/// Main matching orchestrator
///
/// # Pipeline Stages (per program)
/// 1. Declared requirements, or the category fallback when none are declared
/// 2. Income guard
/// 3. Education level check
///
/// The matcher holds no mutable state; one instance can serve any number of
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct Matcher {
    policy: EligibilityPolicy,
}

impl Matcher {
    pub fn new(policy: EligibilityPolicy) -> Self {
        Self { policy }
    }

    pub fn with_default_policy() -> Self {
        Self {
            policy: EligibilityPolicy::default(),
        }
    }

    pub fn policy(&self) -> &EligibilityPolicy {
        &self.policy
    }

    /// Find the programs a profile is eligible for
    ///
    /// # Arguments
    /// * `catalog` - Prepared catalog snapshot
    /// * `profile` - Normalized applicant profile
    ///
    /// # Returns
    /// MatchResult holding the order-preserving subsequence of admitted programs
    pub fn find_eligible<'a>(&self, catalog: &'a Catalog, profile: &Profile) -> MatchResult<'a> {
        let eligible: Vec<&Program> = catalog
            .entries()
            .iter()
            .filter(|entry| match evaluate(entry, profile, &self.policy) {
                Ok(()) => true,
                Err(reason) => {
                    tracing::trace!("{} - rejected: {:?}", entry.program.name, reason);
                    false
                }
            })
            .map(|entry| &entry.program)
            .collect();

        MatchResult {
            eligible,
            total_programs: catalog.len(),
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_policy()
    }
}
