use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::core::browse::BrowseFilter;

/// Raw applicant fields as submitted by the eligibility form.
///
/// Mandatory fields are still optional here so the normalizer can report
/// which one is missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RawProfile {
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub caste: Option<String>,
    #[serde(default)]
    pub religion: Option<String>,
    #[serde(alias = "current_class", rename = "currentClass", default)]
    pub current_class: Option<String>,
    #[validate(range(min = 0, max = 100))]
    #[serde(default)]
    pub percentage: Option<i64>,
    #[validate(range(min = 0))]
    #[serde(alias = "family_income", rename = "familyIncome", default)]
    pub family_income: Option<i64>,
    #[serde(alias = "has_disability", rename = "hasDisability", default)]
    pub has_disability: Option<bool>,
    #[validate(range(min = 0, max = 100))]
    #[serde(alias = "disability_percentage", rename = "disabilityPercentage", default)]
    pub disability_percentage: Option<i64>,
    #[serde(alias = "course_type", rename = "courseType", default)]
    pub course_type: Option<String>,
    #[serde(alias = "family_status", rename = "familyStatus", default)]
    pub family_status: Option<String>,
    #[validate(range(min = 0, max = 150))]
    #[serde(default)]
    pub age: Option<i64>,
}

/// Request to match a profile against the catalog
///
/// The profile is kept as raw JSON so that type errors in individual fields
/// surface as validation errors rather than a generic payload error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    pub profile: serde_json::Value,
    #[serde(default)]
    pub filter: BrowseFilter,
}
