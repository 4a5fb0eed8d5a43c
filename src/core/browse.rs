use serde::{Deserialize, Serialize};
use crate::models::Program;

/// Catalog listing filter (search box, category and level dropdowns)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseFilter {
    /// Case-insensitive text matched against name, provider and description
    #[serde(default)]
    pub search: Option<String>,
    /// Category tag, compared case-insensitively
    #[serde(default)]
    pub category: Option<String>,
    /// Case-insensitive substring of the level string
    #[serde(default)]
    pub level: Option<String>,
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl BrowseFilter {
    pub fn is_empty(&self) -> bool {
        present(&self.search).is_none()
            && present(&self.category).is_none()
            && present(&self.level).is_none()
    }

    #[inline]
    pub fn matches(&self, program: &Program) -> bool {
        if let Some(search) = present(&self.search) {
            let needle = search.to_lowercase();
            let hit = contains_ci(&program.name, &needle)
                || program.provider.as_deref().map_or(false, |p| contains_ci(p, &needle))
                || program.description.as_deref().map_or(false, |d| contains_ci(d, &needle));
            if !hit {
                return false;
            }
        }

        if let Some(category) = present(&self.category) {
            if !program.category.trim().eq_ignore_ascii_case(category) {
                return false;
            }
        }

        if let Some(level) = present(&self.level) {
            if !contains_ci(&program.level, &level.to_lowercase()) {
                return false;
            }
        }

        true
    }

    /// Keep matching programs, preserving order
    pub fn apply<'a, I>(&self, programs: I) -> Vec<&'a Program>
    where
        I: IntoIterator<Item = &'a Program>,
    {
        programs.into_iter().filter(|p| self.matches(p)).collect()
    }
}
