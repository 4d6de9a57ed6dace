use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub database: DatabaseSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub recommendations: RecommendationSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 3003 }

/// Which catalog store backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    #[serde(default = "default_backend")]
    pub backend: StoreBackend,
    #[serde(default)]
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    pub acquire_timeout_secs: Option<u64>,
    pub idle_timeout_secs: Option<u64>,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            url: String::new(),
            max_connections: None,
            min_connections: None,
            acquire_timeout_secs: None,
            idle_timeout_secs: None,
        }
    }
}

fn default_backend() -> StoreBackend { StoreBackend::Memory }

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    /// JSON file used for seeding; seeding is disabled when unset
    pub seed_path: Option<PathBuf>,
    #[serde(default = "default_true")]
    pub seed_on_empty: bool,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            seed_path: None,
            seed_on_empty: true,
        }
    }
}

fn default_true() -> bool { true }

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    pub ttl_secs: Option<u64>,
    pub capacity: Option<u64>,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl_secs: Some(300),
            capacity: Some(16),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationSettings {
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_limit() -> u16 { 3 }
fn default_max_limit() -> u16 { 50 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_category_weight")]
    pub category: f64,
    #[serde(default = "default_milk_source_weight")]
    pub milk_source: f64,
    #[serde(default = "default_flavor_note_weight")]
    pub flavor_note: f64,
    #[serde(default = "default_intensity_step_weight")]
    pub intensity_step: f64,
    #[serde(default = "default_domestic_weight")]
    pub domestic: f64,
    #[serde(default = "default_normalization")]
    pub normalization: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            category: default_category_weight(),
            milk_source: default_milk_source_weight(),
            flavor_note: default_flavor_note_weight(),
            intensity_step: default_intensity_step_weight(),
            domestic: default_domestic_weight(),
            normalization: default_normalization(),
        }
    }
}

impl WeightsConfig {
    /// Reject weights that would break score bounds or monotonicity
    pub fn validate(&self) -> Result<(), ConfigError> {
        let components = [
            ("category", self.category),
            ("milk_source", self.milk_source),
            ("flavor_note", self.flavor_note),
            ("intensity_step", self.intensity_step),
            ("domestic", self.domestic),
        ];

        for (name, value) in components {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Message(format!(
                    "scoring.weights.{} must be a finite non-negative number, got {}",
                    name, value
                )));
            }
        }

        if !self.normalization.is_finite() || self.normalization <= 0.0 {
            return Err(ConfigError::Message(format!(
                "scoring.weights.normalization must be a finite positive number, got {}",
                self.normalization
            )));
        }

        Ok(())
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            category: config.category,
            milk_source: config.milk_source,
            flavor_note: config.flavor_note,
            intensity_step: config.intensity_step,
            domestic: config.domestic,
            normalization: config.normalization,
        }
    }
}

fn default_category_weight() -> f64 { 40.0 }
fn default_milk_source_weight() -> f64 { 35.0 }
fn default_flavor_note_weight() -> f64 { 25.0 }
fn default_intensity_step_weight() -> f64 { 10.0 }
fn default_domestic_weight() -> f64 { 15.0 }
fn default_normalization() -> f64 { 200.0 }

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
fn default_log_format() -> String { "full".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with FROMAGER__)
    /// 5. DATABASE_URL, when set
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., FROMAGER__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("FROMAGER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_database_url(settings)?;

        Self::checked(settings.try_deserialize()?)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("FROMAGER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Self::checked(settings.try_deserialize()?)
    }

    fn checked(settings: Self) -> Result<Self, ConfigError> {
        settings.scoring.weights.validate()?;
        Ok(settings)
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }
}

/// Let the conventional DATABASE_URL win over the config file
fn apply_database_url(settings: Config) -> Result<Config, ConfigError> {
    match std::env::var("DATABASE_URL") {
        Ok(url) if !url.is_empty() => Config::builder()
            .add_source(settings)
            .set_override("database.url", url)?
            .build(),
        _ => Ok(settings),
    }
}
