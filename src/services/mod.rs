// Service exports
pub mod catalog;

pub use catalog::{CatalogStore, CatalogError, load_catalog, parse_json, parse_toml};
