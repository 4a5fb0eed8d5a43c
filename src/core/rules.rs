use crate::core::catalog::{Category, CatalogEntry};
use crate::core::criteria::{first_unmet, ClassRule, Criterion};
use crate::core::level::resolve_level;
use crate::models::{EligibilityPolicy, Profile, Requirements};

/// Why a program was not admitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// A declared requirement was not met
    Requirement(Criterion),
    /// The category-implied demographic rule was not met
    Category,
    /// High-income applicant on a non-exempt program without an income ceiling
    IncomeGuard,
    /// Education level mismatch
    Level,
}

/// How the demographic part of a program is evaluated.
///
/// Programs that declare requirements are judged on those alone; programs
/// without any fall back to the rule implied by their category.
#[derive(Debug, Clone, Copy)]
pub enum DemographicRule<'a> {
    Declared {
        requirements: &'a Requirements,
        class_rule: Option<&'a ClassRule>,
    },
    CategoryFallback(&'a Category),
}

impl<'a> DemographicRule<'a> {
    pub fn for_entry(entry: &'a CatalogEntry) -> Self {
        match &entry.program.requirements {
            Some(requirements) => DemographicRule::Declared {
                requirements,
                class_rule: entry.class_rule.as_ref(),
            },
            None => DemographicRule::CategoryFallback(&entry.category),
        }
    }

    pub fn check(&self, profile: &Profile, policy: &EligibilityPolicy) -> Result<(), Rejection> {
        match self {
            DemographicRule::Declared { requirements, class_rule } => {
                match first_unmet(requirements, *class_rule, profile) {
                    Some(criterion) => Err(Rejection::Requirement(criterion)),
                    None => Ok(()),
                }
            }
            DemographicRule::CategoryFallback(category) => {
                if category_admits(category, profile, policy) {
                    Ok(())
                } else {
                    Err(Rejection::Category)
                }
            }
        }
    }

    /// Whether an explicit income ceiling governs income for this program
    fn declares_income(&self) -> bool {
        match self {
            DemographicRule::Declared { requirements, .. } => requirements.declares_income(),
            DemographicRule::CategoryFallback(_) => false,
        }
    }
}

/// Demographic rule implied by a category tag
pub fn category_admits(category: &Category, profile: &Profile, policy: &EligibilityPolicy) -> bool {
    match category {
        Category::Open(_) => true,
        Category::Women => profile.gender == "female",
        Category::Caste(tag) => profile.caste.as_deref() == Some(tag.as_str()),
        Category::ReservedCastes => matches!(profile.caste.as_deref(), Some("SC" | "ST" | "OBC")),
        Category::Minority => profile
            .religion
            .as_deref()
            .map_or(false, |religion| policy.is_minority(religion)),
        // Unrecognised tags carry no demographic constraint of their own
        Category::Other(_) => true,
    }
}

/// Implicit high-income exclusion
fn passes_income_guard(
    rule: &DemographicRule<'_>,
    category_tag: &str,
    profile: &Profile,
    policy: &EligibilityPolicy,
) -> bool {
    if rule.declares_income() {
        return true;
    }
    profile.family_income <= policy.high_income_threshold || policy.is_guard_exempt(category_tag)
}

/// Decide admission of one catalog entry.
///
/// Admission requires the demographic rule, the income guard and the level
/// check to all hold.
pub fn evaluate(
    entry: &CatalogEntry,
    profile: &Profile,
    policy: &EligibilityPolicy,
) -> Result<(), Rejection> {
    let rule = DemographicRule::for_entry(entry);
    rule.check(profile, policy)?;

    // Same trimmed tag the category fallback parsed
    if !passes_income_guard(&rule, entry.program.category.trim(), profile, policy) {
        return Err(Rejection::IncomeGuard);
    }

    let admitted = resolve_level(&profile.current_class).map_or(false, |level| entry.levels.admits(level));
    if !admitted {
        return Err(Rejection::Level);
    }

    Ok(())
}
