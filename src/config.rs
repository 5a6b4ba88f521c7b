use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub facts: FactsConfig,
    pub solver: SolverConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// JSON array of recipe records
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FactsConfig {
    pub snapshot: String,
    pub enabled: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SolverConfig {
    /// Values tried on lunch and dinner slots before giving up, 0 for no limit
    pub max_nodes: u64,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (WEEKMENU__SOLVER__MAX_NODES, etc.)
    /// 2. Config file specified by path, CONFIG_PATH or config/default.toml
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("catalog.path", "recipes.json")?
            .set_default("facts.snapshot", "facts.bin")?
            .set_default("facts.enabled", true)?
            .set_default("solver.max_nodes", 2_000_000_i64)?
            .set_default("logging.level", "info")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // The file is optional.
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("WEEKMENU")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.catalog.path.trim().is_empty() {
            return Err("Catalog path must not be empty".to_string());
        }
        if self.facts.enabled && self.facts.snapshot.trim().is_empty() {
            return Err("Fact snapshot path must not be empty when snapshots are enabled".to_string());
        }
        Ok(())
    }
}
