use serde::{Deserialize, Serialize};

/// Normalized applicant attributes used as the input to matching
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub gender: String,
    #[serde(default)]
    pub caste: Option<String>,
    #[serde(default)]
    pub religion: Option<String>,
    #[serde(rename = "currentClass")]
    pub current_class: String,
    #[serde(default)]
    pub percentage: u8,
    #[serde(rename = "familyIncome", default)]
    pub family_income: u64,
    #[serde(rename = "hasDisability", default)]
    pub has_disability: bool,
    #[serde(rename = "disabilityPercentage", default)]
    pub disability_percentage: u8,
    #[serde(rename = "courseType", default)]
    pub course_type: Option<String>,
    #[serde(rename = "familyStatus", default)]
    pub family_status: Option<String>,
    #[serde(default)]
    pub age: u32,
}

/// One catalog entry representing a financial-aid opportunity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub name: String,
    pub category: String,
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Requirements>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eligibility: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official_website: Option<String>,
}

impl Program {
    /// Minimal program with no descriptive fields and no requirements
    pub fn new(name: impl Into<String>, category: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            level: level.into(),
            requirements: None,
            provider: None,
            description: None,
            eligibility: None,
            amount: None,
            application_deadline: None,
            official_website: None,
        }
    }

    pub fn with_requirements(mut self, requirements: Requirements) -> Self {
        self.requirements = Some(requirements);
        self
    }
}

/// A declared requirement value as it appears in catalog data.
///
/// Values of the wrong shape are kept as `Malformed` instead of failing the
/// whole record, so the matching evaluator can reject just that program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Declared<T> {
    Valid(T),
    Malformed(serde_json::Value),
}

impl<T> Declared<T> {
    pub fn valid(&self) -> Option<&T> {
        match self {
            Declared::Valid(value) => Some(value),
            Declared::Malformed(_) => None,
        }
    }
}

impl<T> From<T> for Declared<T> {
    fn from(value: T) -> Self {
        Declared::Valid(value)
    }
}

/// Scalar or set requirement (caste, religion)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    pub fn contains(&self, value: &str) -> bool {
        match self {
            OneOrMany::One(expected) => expected == value,
            OneOrMany::Many(allowed) => allowed.iter().any(|v| v == value),
        }
    }
}

/// Structured per-program requirements.
///
/// Every field is optional; an absent field places no constraint on that
/// dimension. Keys not listed here (e.g. `stream`, `school_type`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Requirements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Declared<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caste: Option<Declared<OneOrMany>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub religion: Option<Declared<OneOrMany>>,
    /// Family income ceiling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income: Option<Declared<u64>>,
    /// Academic percentage floor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<Declared<u32>>,
    /// Age ceiling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<Declared<u32>>,
    /// Minimum disability percentage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disability: Option<Declared<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_status: Option<Declared<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_type: Option<Declared<String>>,
    /// Class label, closed range "X-Y" or open range "N+"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<Declared<String>>,
}

impl Requirements {
    /// True when an income ceiling is declared, well-formed or not
    pub fn declares_income(&self) -> bool {
        self.income.is_some()
    }
}

/// Income-guard and fallback configuration for the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibilityPolicy {
    pub high_income_threshold: u64,
    pub income_guard_exempt_categories: Vec<String>,
    pub minority_religions: Vec<String>,
}

impl EligibilityPolicy {
    pub fn is_guard_exempt(&self, category: &str) -> bool {
        self.income_guard_exempt_categories
            .iter()
            .any(|c| c == category)
    }

    pub fn is_minority(&self, religion: &str) -> bool {
        self.minority_religions.iter().any(|r| r == religion)
    }
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        Self {
            high_income_threshold: 800_000,
            income_guard_exempt_categories: vec!["General".to_string(), "All".to_string()],
            minority_religions: ["Muslim", "Christian", "Sikh", "Buddhist", "Parsi", "Jain"]
                .iter()
                .map(|r| r.to_string())
                .collect(),
        }
    }
}
