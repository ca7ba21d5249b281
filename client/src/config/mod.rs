//! Configuration management for the Calorie Tracker client
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: CT__)

use anyhow::Result;
use calorie_tracker_shared::catalog::{
    DEFAULT_FRUIT_KEYWORDS, DEFAULT_STAPLE_KEYWORDS, SUGGESTION_MIN_DEFICIT,
};
use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub suggestions: SuggestionConfig,
}

/// Which key-value store backs the repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    File,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Directory holding one `<key>.json` per stored key
    pub data_dir: String,
}

/// Food catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub path: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// JSON lines instead of pretty output
    pub json: bool,
    /// Filter used when RUST_LOG is not set
    pub filter: String,
}

/// Dashboard food suggestion configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionConfig {
    pub staple_keywords: Vec<String>,
    pub fruit_keywords: Vec<String>,
    /// Remaining kcal that must be exceeded before suggesting
    pub min_deficit: i32,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            staple_keywords: DEFAULT_STAPLE_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            fruit_keywords: DEFAULT_FRUIT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            min_deficit: SUGGESTION_MIN_DEFICIT,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let production = AppConfig::is_production();
        Self {
            storage: StorageConfig {
                backend: StorageBackend::File,
                data_dir: "data/store".to_string(),
            },
            catalog: CatalogConfig {
                path: "data/foodData.json".to_string(),
            },
            logging: LoggingConfig {
                json: production,
                filter: if production {
                    "calorie_tracker_client=info".to_string()
                } else {
                    "calorie_tracker_client=debug".to_string()
                },
            },
            suggestions: SuggestionConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with CT__ prefix
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = Self::builder()?
            // Load from environment-specific config file
            .add_source(config::File::with_name(&config_file).required(false))
            // Override with environment variables (CT__ prefix)
            // e.g., CT__STORAGE__DATA_DIR=/tmp/ct sets storage.data_dir
            .add_source(config::Environment::with_prefix("CT").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Defaults overridden by an inline TOML document
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let config = Self::builder()?
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>> {
        Ok(config::Config::builder().add_source(config::Config::try_from(&AppConfig::default())?))
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}
