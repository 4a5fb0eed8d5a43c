use crate::core::Catalog;
use crate::models::Program;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors that can occur while loading a catalog file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),
}

#[derive(Debug, Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    programs: Vec<toml::Value>,
}

/// Decode records one by one so a bad record only drops itself
fn decode_records<V, E, F>(records: Vec<V>, decode: F) -> Vec<Program>
where
    E: std::fmt::Display,
    F: Fn(V) -> Result<Program, E>,
{
    let total = records.len();
    let programs: Vec<Program> = records
        .into_iter()
        .enumerate()
        .filter_map(|(idx, record)| match decode(record) {
            Ok(program) => Some(program),
            Err(e) => {
                tracing::warn!("Skipping catalog record #{}: {}", idx, e);
                None
            }
        })
        .collect();

    if programs.len() < total {
        tracing::warn!("Loaded {} of {} catalog records", programs.len(), total);
    }
    programs
}

/// Parse a JSON catalog: a top-level array of program records
pub fn parse_json(source: &str) -> Result<Vec<Program>, CatalogError> {
    let records: Vec<serde_json::Value> = serde_json::from_str(source)?;
    Ok(decode_records(records, serde_json::from_value::<Program>))
}

/// Parse a TOML catalog made of `[[programs]]` tables
pub fn parse_toml(source: &str) -> Result<Vec<Program>, CatalogError> {
    let file: TomlCatalog = toml::from_str(source)?;
    Ok(decode_records(file.programs, Program::deserialize))
}

/// Load and prepare a catalog file, choosing the format by extension
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)?;

    let programs = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => parse_json(&source)?,
        Some("toml") => parse_toml(&source)?,
        other => {
            return Err(CatalogError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            ))
        }
    };

    Ok(Catalog::new(programs))
}

/// Holder of the current catalog snapshot.
///
/// Readers get an `Arc` to an immutable catalog; a reload swaps the pointer
/// and leaves snapshots already handed out untouched.
pub struct CatalogStore {
    path: PathBuf,
    current: RwLock<Arc<Catalog>>,
}

impl CatalogStore {
    /// Load the catalog at `path` and wrap it in a store
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Self, CatalogError> {
        let path = path.into();
        let catalog = load_catalog(&path)?;
        tracing::info!("Loaded {} programs from {}", catalog.len(), path.display());

        Ok(Self {
            path,
            current: RwLock::new(Arc::new(catalog)),
        })
    }

    /// Wrap an already prepared catalog; reloads read from `path`
    pub fn with_catalog<P: Into<PathBuf>>(path: P, catalog: Catalog) -> Self {
        Self {
            path: path.into(),
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    /// Current snapshot
    pub async fn snapshot(&self) -> Arc<Catalog> {
        self.current.read().await.clone()
    }

    /// Re-read the catalog file and swap it in. On failure the previous
    /// snapshot stays in place.
    pub async fn reload(&self) -> Result<usize, CatalogError> {
        let path = self.path.clone();
        let catalog = tokio::task::spawn_blocking(move || load_catalog(path))
            .await
            .map_err(|e| CatalogError::IoError(std::io::Error::new(std::io::ErrorKind::Other, e)))??;

        let count = catalog.len();
        *self.current.write().await = Arc::new(catalog);
        tracing::info!("Catalog reloaded: {} programs", count);
        Ok(count)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(extension: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("catalog-{}.{}", uuid::Uuid::new_v4(), extension));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_parse_json_skips_bad_records() {
        let programs = parse_json(
            r#"[
                {"name": "A", "category": "Women", "level": "UG"},
                {"name": "no category", "level": "UG"},
                {"name": "C", "category": "SC", "level": "School", "requirements": {"caste": "SC", "income": 250000}}
            ]"#,
        )
        .unwrap();

        let names: Vec<&str> = programs.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_parse_json_rejects_non_array() {
        assert!(matches!(parse_json(r#"{"name": "A"}"#), Err(CatalogError::JsonError(_))));
    }

    #[test]
    fn test_parse_toml() {
        let programs = parse_toml(
            r#"
            [[programs]]
            name = "Minority Pre-Matric"
            category = "Minority"
            level = "School"

            [programs.requirements]
            religion = ["Muslim", "Sikh"]
            class = "1-10"
            income = 200000

            [[programs]]
            name = "Open"
            category = "All"
            level = "All"
            "#,
        )
        .unwrap();

        assert_eq!(programs.len(), 2);
        let requirements = programs[0].requirements.as_ref().unwrap();
        assert!(requirements.religion.as_ref().unwrap().valid().unwrap().contains("Sikh"));
        assert_eq!(requirements.income.as_ref().unwrap().valid(), Some(&200000));
    }

    #[test]
    fn test_unsupported_extension() {
        let path = temp_file("yaml", "[]");
        assert!(matches!(load_catalog(&path), Err(CatalogError::UnsupportedFormat(_))));
        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_reload_swaps_snapshot() {
        let path = temp_file("json", r#"[{"name": "A", "category": "All", "level": "All"}]"#);
        let store = CatalogStore::open(&path).unwrap();

        let before = store.snapshot().await;
        assert_eq!(before.len(), 1);

        std::fs::write(
            &path,
            r#"[{"name": "A", "category": "All", "level": "All"}, {"name": "B", "category": "All", "level": "All"}]"#,
        )
        .unwrap();
        assert_eq!(store.reload().await.unwrap(), 2);

        // Snapshots taken earlier are unaffected
        assert_eq!(before.len(), 1);
        assert_eq!(store.snapshot().await.len(), 2);

        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_previous() {
        let path = temp_file("json", r#"[{"name": "A", "category": "All", "level": "All"}]"#);
        let store = CatalogStore::open(&path).unwrap();

        std::fs::write(&path, "not json").unwrap();
        assert!(store.reload().await.is_err());
        assert_eq!(store.snapshot().await.len(), 1);

        std::fs::remove_file(path).ok();
    }
}
