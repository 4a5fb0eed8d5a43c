use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::models::EligibilityPolicy;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub eligibility: EligibilitySettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EligibilitySettings {
    #[serde(default = "default_high_income_threshold")]
    pub high_income_threshold: u64,
    #[serde(default = "default_exempt_categories")]
    pub income_guard_exempt_categories: Vec<String>,
    #[serde(default = "default_minority_religions")]
    pub minority_religions: Vec<String>,
}

impl Default for EligibilitySettings {
    fn default() -> Self {
        Self {
            high_income_threshold: default_high_income_threshold(),
            income_guard_exempt_categories: default_exempt_categories(),
            minority_religions: default_minority_religions(),
        }
    }
}

impl From<EligibilitySettings> for EligibilityPolicy {
    fn from(settings: EligibilitySettings) -> Self {
        Self {
            high_income_threshold: settings.high_income_threshold,
            income_guard_exempt_categories: settings.income_guard_exempt_categories,
            minority_religions: settings.minority_religions,
        }
    }
}

fn default_high_income_threshold() -> u64 { EligibilityPolicy::default().high_income_threshold }
fn default_exempt_categories() -> Vec<String> { EligibilityPolicy::default().income_guard_exempt_categories }
fn default_minority_religions() -> Vec<String> { EligibilityPolicy::default().minority_religions }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SCHOLAR_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("catalog.path", "data/programs.json")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SCHOLAR__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("SCHOLAR")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("eligibility.income_guard_exempt_categories")
                    .with_list_parse_key("eligibility.minority_religions")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("SCHOLAR")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn policy(&self) -> EligibilityPolicy {
        self.eligibility.clone().into()
    }
}
