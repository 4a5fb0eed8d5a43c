use crate::core::level::CLASS_LABELS;
use crate::models::{Profile, RawProfile};
use thiserror::Error;
use validator::Validate;

/// Errors raised while turning raw applicant input into a Profile
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid value for {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Malformed profile: {0}")]
    Malformed(String),
}

/// Decode and normalize a raw JSON profile.
///
/// Type errors in any field (e.g. `familyIncome: "lots"`) are reported as
/// `ValidationError::Malformed`.
pub fn normalize_value(value: &serde_json::Value) -> Result<Profile, ValidationError> {
    if !value.is_object() {
        return Err(ValidationError::Malformed("profile must be a JSON object".to_string()));
    }
    let raw: RawProfile = serde_json::from_value(value.clone())
        .map_err(|e| ValidationError::Malformed(e.to_string()))?;
    normalize(raw)
}

/// Treat empty strings from unset form selects as absent
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Reported field per validated input, in declaration order. Keys follow
/// the serde rename when one is present.
const RANGE_FIELDS: [(&str, &str, &str); 4] = [
    ("percentage", "percentage", "percentage"),
    ("family_income", "familyIncome", "familyIncome"),
    ("disability_percentage", "disabilityPercentage", "disabilityPercentage"),
    ("age", "age", "age"),
];

fn range_error(errors: &validator::ValidationErrors) -> ValidationError {
    let failed = errors.field_errors();
    let field = RANGE_FIELDS
        .iter()
        .find(|(snake, camel, _)| failed.keys().any(|k| k == snake || k == camel))
        .map_or("profile", |(_, _, name)| *name);

    ValidationError::InvalidField {
        field,
        reason: errors.to_string(),
    }
}

/// Validate a raw profile and apply defaults
pub fn normalize(raw: RawProfile) -> Result<Profile, ValidationError> {
    raw.validate().map_err(|e| range_error(&e))?;

    let gender = non_empty(raw.gender).ok_or(ValidationError::MissingField("gender"))?;

    let current_class =
        non_empty(raw.current_class).ok_or(ValidationError::MissingField("currentClass"))?;
    if !CLASS_LABELS.contains(&current_class.as_str()) {
        return Err(ValidationError::InvalidField {
            field: "currentClass",
            reason: format!("expected one of {}, got {:?}", CLASS_LABELS.join(", "), current_class),
        });
    }

    let family_income = raw
        .family_income
        .ok_or(ValidationError::MissingField("familyIncome"))?;

    // Narrowing after the range checks above
    let to_u8 = |field: &'static str, v: i64| {
        u8::try_from(v).map_err(|_| ValidationError::InvalidField {
            field,
            reason: format!("{} out of range", v),
        })
    };

    Ok(Profile {
        gender,
        caste: non_empty(raw.caste),
        religion: non_empty(raw.religion),
        current_class,
        percentage: to_u8("percentage", raw.percentage.unwrap_or(0))?,
        family_income: u64::try_from(family_income).map_err(|_| ValidationError::InvalidField {
            field: "familyIncome",
            reason: format!("{} is negative", family_income),
        })?,
        has_disability: raw.has_disability.unwrap_or(false),
        disability_percentage: to_u8("disabilityPercentage", raw.disability_percentage.unwrap_or(0))?,
        course_type: non_empty(raw.course_type),
        family_status: non_empty(raw.family_status),
        age: u32::try_from(raw.age.unwrap_or(0)).map_err(|_| ValidationError::InvalidField {
            field: "age",
            reason: "age is negative".to_string(),
        })?,
    })
}
