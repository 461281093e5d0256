use std::path::PathBuf;

use koto_config::Config;
use koto_config::generator::GeneratorConfig;
use tokio::sync::RwLock;

/// Shared runtime state, the config can be swapped while commands run
#[derive(Default)]
pub struct AppState {
    pub config: RwLock<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: RwLock::new(config),
        }
    }

    pub async fn store_path(&self) -> PathBuf {
        self.config.read().await.store.path.clone()
    }

    pub async fn generator_config(&self) -> GeneratorConfig {
        self.config.read().await.generator.clone()
    }

    /// Point subsequent commands at another store file
    pub async fn set_store_path(&self, path: PathBuf) {
        self.config.write().await.store.path = path;
    }
}
