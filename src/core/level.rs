use std::fmt;

/// Coarse education level of an applicant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EducationLevel {
    School,
    UG,
    PG,
    PhD,
}

impl EducationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::School => "School",
            EducationLevel::UG => "UG",
            EducationLevel::PG => "PG",
            EducationLevel::PhD => "PhD",
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Class labels accepted on a profile
pub const CLASS_LABELS: [&str; 8] = ["8", "9", "10", "11", "12", "UG", "PG", "PhD"];

/// Map a raw class label to its coarse education level
pub fn resolve_level(current_class: &str) -> Option<EducationLevel> {
    match current_class {
        "8" | "9" | "10" | "11" | "12" => Some(EducationLevel::School),
        "UG" => Some(EducationLevel::UG),
        "PG" => Some(EducationLevel::PG),
        "PhD" => Some(EducationLevel::PhD),
        _ => None,
    }
}

/// Strip a parenthesised qualifier, e.g. "UG (Technical)" -> "UG"
fn strip_qualifier(token: &str) -> &str {
    match token.find('(') {
        Some(idx) => token[..idx].trim(),
        None => token.trim(),
    }
}

/// Parsed form of a program's level string, computed once per catalog load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelSet {
    All,
    Tokens(Vec<String>),
}

impl LevelSet {
    pub fn parse(level: &str) -> Self {
        if strip_qualifier(level) == "All" {
            return LevelSet::All;
        }

        let tokens = level
            .split('/')
            .map(strip_qualifier)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();

        LevelSet::Tokens(tokens)
    }

    /// Check whether an applicant at `level` may apply
    #[inline]
    pub fn admits(&self, level: EducationLevel) -> bool {
        match self {
            LevelSet::All => true,
            LevelSet::Tokens(tokens) => tokens.iter().any(|t| t == level.as_str()),
        }
    }
}
