use std::env;

use serde::{Deserialize, Serialize};

fn default_provider() -> String {
    "gemini".to_string()
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_api_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta/models".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct GeneratorConfig {
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            api_key: String::new(),
            api_url: default_api_url(),
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        let defaults = Self::default();

        Self {
            model: env::var("GEMINI_MODEL").unwrap_or(defaults.model),
            api_key: env::var("GEMINI_API_KEY").unwrap_or(defaults.api_key),
            api_url: env::var("GEMINI_API_URL").unwrap_or(defaults.api_url),
            ..defaults
        }
    }

    /// Generation needs a key, there is no anonymous tier
    pub fn enabled(&self) -> bool {
        !self.api_key.is_empty()
    }
}
