use std::env;
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use self::generator::GeneratorConfig;
use self::logging::LoggingConfig;
use self::store::StoreConfig;

pub mod generator;
pub mod logging;
pub mod store;

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Defaults overridden by environment variables
    pub fn new() -> Self {
        Config {
            generator: GeneratorConfig::new(),
            store: StoreConfig::new(),
            logging: LoggingConfig::new(),
        }
    }

    /// Read a JSON config file, or fall back to [`Config::new`] when there is none.
    ///
    /// The API key is never required in the file: an empty key is filled from
    /// `GEMINI_API_KEY`.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path.filter(|p| p.exists()) else {
            return Ok(Self::new());
        };

        tracing::info!("Loading config from {}", path.display());
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let mut config: Config = serde_json::from_str(&data)
            .with_context(|| format!("Invalid config {}", path.display()))?;

        if config.generator.api_key.is_empty()
            && let Ok(key) = env::var("GEMINI_API_KEY")
        {
            config.generator.api_key = key;
        }

        Ok(config)
    }
}
