//! Scholar Match - eligibility matching for the scholarship finder
//!
//! This library provides the matching engine that decides which financial-aid
//! programs an applicant qualifies for, plus the catalog provider and HTTP
//! routes that serve it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{Catalog, Matcher, MatchResult, BrowseFilter, ValidationError, normalize_value};
pub use models::{Profile, Program, Requirements, RawProfile, EligibilityPolicy};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let catalog = Catalog::new(vec![Program::new("Open", "All", "All")]);
        let profile = normalize_value(&serde_json::json!({
            "gender": "other",
            "currentClass": "PhD",
            "familyIncome": 0
        }))
        .unwrap();

        let result = Matcher::default().find_eligible(&catalog, &profile);
        assert_eq!(result.names(), vec!["Open"]);
    }
}
