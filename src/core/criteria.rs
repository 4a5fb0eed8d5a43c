use crate::models::{Declared, OneOrMany, Profile, Requirements};

/// Parsed `class` requirement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassRule {
    /// "X-Y" with numeric bounds and/or named level tokens, e.g. "9-10", "12-UG"
    Range {
        min: Option<u8>,
        max: Option<u8>,
        tokens: Vec<String>,
    },
    /// "N+"
    AtLeast(u8),
    /// A single label such as "8" or "UG"
    Exact(String),
    /// Unparsable; never matches
    Malformed(String),
}

impl ClassRule {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return ClassRule::Malformed(raw.to_string());
        }

        if let Some(floor) = raw.strip_suffix('+') {
            return match floor.trim().parse::<u8>() {
                Ok(n) => ClassRule::AtLeast(n),
                Err(_) => ClassRule::Malformed(raw.to_string()),
            };
        }

        if !raw.contains('-') {
            return ClassRule::Exact(raw.to_string());
        }

        let parts: Vec<&str> = raw.split('-').map(str::trim).collect();
        if parts.len() != 2 || parts.iter().any(|p| p.is_empty()) {
            return ClassRule::Malformed(raw.to_string());
        }

        let (lo, hi) = (parts[0].parse::<u8>().ok(), parts[1].parse::<u8>().ok());
        let tokens: Vec<String> = parts
            .iter()
            .filter(|p| p.parse::<u8>().is_err())
            .map(|p| p.to_string())
            .collect();

        match (lo, hi) {
            (Some(lo), Some(hi)) if lo > hi => ClassRule::Malformed(raw.to_string()),
            (Some(lo), Some(hi)) => ClassRule::Range { min: Some(lo), max: Some(hi), tokens },
            // "12-UG": from class 12 upward through the named level
            (Some(lo), None) => ClassRule::Range { min: Some(lo), max: None, tokens },
            (None, Some(_)) => ClassRule::Malformed(raw.to_string()),
            (None, None) => ClassRule::Range { min: None, max: None, tokens },
        }
    }

    /// Check the rule against a profile's class label
    #[inline]
    pub fn admits(&self, current_class: &str) -> bool {
        let numeric = current_class.parse::<u8>().ok();
        match self {
            ClassRule::Range { min, max, tokens } => {
                if tokens.iter().any(|t| t == current_class) {
                    return true;
                }
                match (numeric, min) {
                    (Some(n), Some(lo)) => n >= *lo && max.map_or(true, |hi| n <= hi),
                    _ => false,
                }
            }
            ClassRule::AtLeast(floor) => class_rank(current_class).map_or(false, |r| r >= *floor),
            ClassRule::Exact(label) => label == current_class,
            ClassRule::Malformed(_) => false,
        }
    }
}

/// Ordinal position of a class label; higher education ranks above class 12
fn class_rank(current_class: &str) -> Option<u8> {
    match current_class {
        "UG" => Some(13),
        "PG" => Some(14),
        "PhD" => Some(15),
        other => other.parse::<u8>().ok(),
    }
}

/// Requirement dimension, used for tracing which check rejected a program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    Gender,
    Caste,
    Religion,
    Income,
    Percentage,
    Age,
    Disability,
    FamilyStatus,
    CourseType,
    Class,
}

#[inline]
fn equals(required: &Declared<String>, actual: Option<&str>) -> bool {
    match (required.valid(), actual) {
        (Some(expected), Some(actual)) => expected == actual,
        _ => false,
    }
}

#[inline]
fn member_of(required: &Declared<OneOrMany>, actual: Option<&str>) -> bool {
    match (required.valid(), actual) {
        (Some(allowed), Some(actual)) => allowed.contains(actual),
        _ => false,
    }
}

pub fn matches_gender(required: &Declared<String>, profile: &Profile) -> bool {
    equals(required, Some(profile.gender.as_str()))
}

pub fn matches_caste(required: &Declared<OneOrMany>, profile: &Profile) -> bool {
    member_of(required, profile.caste.as_deref())
}

pub fn matches_religion(required: &Declared<OneOrMany>, profile: &Profile) -> bool {
    member_of(required, profile.religion.as_deref())
}

pub fn matches_family_status(required: &Declared<String>, profile: &Profile) -> bool {
    equals(required, profile.family_status.as_deref())
}

pub fn matches_course_type(required: &Declared<String>, profile: &Profile) -> bool {
    equals(required, profile.course_type.as_deref())
}

/// Income ceiling
pub fn matches_income(required: &Declared<u64>, profile: &Profile) -> bool {
    required.valid().map_or(false, |ceiling| profile.family_income <= *ceiling)
}

/// Percentage floor
pub fn matches_percentage(required: &Declared<u32>, profile: &Profile) -> bool {
    required
        .valid()
        .map_or(false, |floor| u32::from(profile.percentage) >= *floor)
}

/// Age ceiling
pub fn matches_age(required: &Declared<u32>, profile: &Profile) -> bool {
    required.valid().map_or(false, |ceiling| profile.age <= *ceiling)
}

/// Minimum disability percentage; the applicant must also declare a disability
pub fn matches_disability(required: &Declared<u32>, profile: &Profile) -> bool {
    profile.has_disability
        && required
            .valid()
            .map_or(false, |min| u32::from(profile.disability_percentage) >= *min)
}

/// Run every declared requirement against the profile.
///
/// `class_rule` is the pre-parsed form of `requirements.class`. Returns the
/// first failing criterion, or `None` when all declared requirements hold.
pub fn first_unmet(
    requirements: &Requirements,
    class_rule: Option<&ClassRule>,
    profile: &Profile,
) -> Option<Criterion> {
    if let Some(req) = &requirements.gender {
        if !matches_gender(req, profile) {
            return Some(Criterion::Gender);
        }
    }
    if let Some(req) = &requirements.caste {
        if !matches_caste(req, profile) {
            return Some(Criterion::Caste);
        }
    }
    if let Some(req) = &requirements.religion {
        if !matches_religion(req, profile) {
            return Some(Criterion::Religion);
        }
    }
    if let Some(req) = &requirements.income {
        if !matches_income(req, profile) {
            return Some(Criterion::Income);
        }
    }
    if let Some(req) = &requirements.percentage {
        if !matches_percentage(req, profile) {
            return Some(Criterion::Percentage);
        }
    }
    if let Some(req) = &requirements.age {
        if !matches_age(req, profile) {
            return Some(Criterion::Age);
        }
    }
    if let Some(req) = &requirements.disability {
        if !matches_disability(req, profile) {
            return Some(Criterion::Disability);
        }
    }
    if let Some(req) = &requirements.family_status {
        if !matches_family_status(req, profile) {
            return Some(Criterion::FamilyStatus);
        }
    }
    if let Some(req) = &requirements.course_type {
        if !matches_course_type(req, profile) {
            return Some(Criterion::CourseType);
        }
    }
    if requirements.class.is_some() {
        let admitted = class_rule.map_or(false, |rule| rule.admits(&profile.current_class));
        if !admitted {
            return Some(Criterion::Class);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_profile() -> Profile {
        Profile {
            gender: "female".to_string(),
            caste: Some("SC".to_string()),
            religion: Some("Sikh".to_string()),
            current_class: "10".to_string(),
            percentage: 72,
            family_income: 200_000,
            has_disability: false,
            disability_percentage: 0,
            course_type: Some("technical".to_string()),
            family_status: Some("single_girl_child".to_string()),
            age: 16,
        }
    }

    #[test]
    fn test_parse_class_rules() {
        assert_eq!(
            ClassRule::parse("9-10"),
            ClassRule::Range { min: Some(9), max: Some(10), tokens: vec![] }
        );
        assert_eq!(ClassRule::parse("11+"), ClassRule::AtLeast(11));
        assert_eq!(ClassRule::parse("UG"), ClassRule::Exact("UG".to_string()));
        assert_eq!(
            ClassRule::parse("12-UG"),
            ClassRule::Range { min: Some(12), max: None, tokens: vec!["UG".to_string()] }
        );
        assert!(matches!(ClassRule::parse("10-9"), ClassRule::Malformed(_)));
        assert!(matches!(ClassRule::parse("x+"), ClassRule::Malformed(_)));
        assert!(matches!(ClassRule::parse("1-2-3"), ClassRule::Malformed(_)));
        assert!(matches!(ClassRule::parse("-10"), ClassRule::Malformed(_)));
    }

    #[test]
    fn test_class_range() {
        let rule = ClassRule::parse("9-10");
        assert!(rule.admits("9"));
        assert!(rule.admits("10"));
        assert!(!rule.admits("8"));
        assert!(!rule.admits("11"));
        assert!(!rule.admits("UG"));
    }

    #[test]
    fn test_class_range_with_token() {
        let rule = ClassRule::parse("12-UG");
        assert!(rule.admits("12"));
        assert!(rule.admits("UG"));
        assert!(!rule.admits("11"));
        assert!(!rule.admits("PG"));
    }

    #[test]
    fn test_class_open_ended() {
        let rule = ClassRule::parse("11+");
        assert!(rule.admits("11"));
        assert!(rule.admits("12"));
        assert!(rule.admits("UG"));
        assert!(!rule.admits("10"));
    }

    #[test]
    fn test_class_exact_and_malformed() {
        assert!(ClassRule::parse("8").admits("8"));
        assert!(!ClassRule::parse("8").admits("9"));
        assert!(!ClassRule::parse("abc-").admits("8"));
    }

    #[test]
    fn test_scalar_and_set_membership() {
        let profile = create_test_profile();
        assert!(matches_caste(&Declared::Valid(OneOrMany::One("SC".into())), &profile));
        assert!(!matches_caste(&Declared::Valid(OneOrMany::One("ST".into())), &profile));

        let set = OneOrMany::Many(vec!["Muslim".into(), "Sikh".into()]);
        assert!(matches_religion(&Declared::Valid(set), &profile));

        let mut no_religion = profile.clone();
        no_religion.religion = None;
        let set = OneOrMany::Many(vec!["Muslim".into(), "Sikh".into()]);
        assert!(!matches_religion(&Declared::Valid(set), &no_religion));
    }

    #[test]
    fn test_numeric_thresholds() {
        let profile = create_test_profile();
        assert!(matches_income(&Declared::Valid(200_000), &profile));
        assert!(!matches_income(&Declared::Valid(199_999), &profile));
        assert!(matches_percentage(&Declared::Valid(72), &profile));
        assert!(!matches_percentage(&Declared::Valid(73), &profile));
        assert!(matches_age(&Declared::Valid(16), &profile));
        assert!(!matches_age(&Declared::Valid(15), &profile));
    }

    #[test]
    fn test_disability_requires_flag() {
        let mut profile = create_test_profile();
        profile.disability_percentage = 60;
        assert!(!matches_disability(&Declared::Valid(40), &profile));

        profile.has_disability = true;
        assert!(matches_disability(&Declared::Valid(40), &profile));
        assert!(!matches_disability(&Declared::Valid(61), &profile));
    }

    #[test]
    fn test_malformed_fails_closed() {
        let profile = create_test_profile();
        let bad: Declared<u64> = Declared::Malformed(json!("cheap"));
        assert!(!matches_income(&bad, &profile));

        let bad: Declared<String> = Declared::Malformed(json!(1));
        assert!(!matches_gender(&bad, &profile));
    }

    #[test]
    fn test_first_unmet() {
        let profile = create_test_profile();
        let requirements: Requirements = serde_json::from_value(json!({
            "gender": "female",
            "caste": "SC",
            "class": "9-10",
            "income": 250000
        }))
        .unwrap();
        let rule = ClassRule::parse("9-10");
        assert_eq!(first_unmet(&requirements, Some(&rule), &profile), None);

        let requirements: Requirements = serde_json::from_value(json!({
            "gender": "female",
            "percentage": 80
        }))
        .unwrap();
        assert_eq!(first_unmet(&requirements, None, &profile), Some(Criterion::Percentage));
    }

    #[test]
    fn test_empty_requirements_admit() {
        let profile = create_test_profile();
        assert_eq!(first_unmet(&Requirements::default(), None, &profile), None);
    }
}
