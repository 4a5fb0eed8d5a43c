use crate::core::criteria::ClassRule;
use crate::core::level::LevelSet;
use crate::models::{Declared, Program};

/// Program category tag, parsed once at catalog load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    /// "General" or "All": no demographic constraint
    Open(String),
    Women,
    /// A single reserved caste: "SC", "ST" or "OBC"
    Caste(String),
    /// "SC/ST/OBC"
    ReservedCastes,
    Minority,
    Other(String),
}

impl Category {
    pub fn parse(tag: &str) -> Self {
        match tag.trim() {
            "General" | "All" => Category::Open(tag.trim().to_string()),
            "Women" => Category::Women,
            "SC" | "ST" | "OBC" => Category::Caste(tag.trim().to_string()),
            "SC/ST/OBC" => Category::ReservedCastes,
            "Minority" => Category::Minority,
            other => Category::Other(other.to_string()),
        }
    }
}

/// A program together with everything the engine derives from it up front
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub program: Program,
    pub category: Category,
    pub levels: LevelSet,
    /// Parsed `requirements.class`, if declared. A malformed declaration
    /// parses to `ClassRule::Malformed` so it fails closed.
    pub class_rule: Option<ClassRule>,
}

impl CatalogEntry {
    pub fn new(program: Program) -> Self {
        let class_rule = program
            .requirements
            .as_ref()
            .and_then(|r| r.class.as_ref())
            .map(|declared| match declared {
                Declared::Valid(raw) => ClassRule::parse(raw),
                Declared::Malformed(value) => ClassRule::Malformed(value.to_string()),
            });

        Self {
            category: Category::parse(&program.category),
            levels: LevelSet::parse(&program.level),
            class_rule,
            program,
        }
    }
}

/// Immutable, ordered catalog snapshot handed to the matcher
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(programs: Vec<Program>) -> Self {
        Self {
            entries: programs.into_iter().map(CatalogEntry::new).collect(),
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn programs(&self) -> impl Iterator<Item = &Program> {
        self.entries.iter().map(|e| &e.program)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<Program>> for Catalog {
    fn from(programs: Vec<Program>) -> Self {
        Self::new(programs)
    }
}
