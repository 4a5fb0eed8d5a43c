// Core algorithm exports
pub mod browse;
pub mod catalog;
pub mod criteria;
pub mod level;
pub mod matcher;
pub mod normalize;
pub mod rules;

pub use browse::BrowseFilter;
pub use catalog::{Catalog, CatalogEntry, Category};
pub use criteria::{ClassRule, Criterion};
pub use level::{resolve_level, EducationLevel, LevelSet};
pub use matcher::{Matcher, MatchResult};
pub use normalize::{normalize, normalize_value, ValidationError};
pub use rules::{evaluate, DemographicRule, Rejection};
