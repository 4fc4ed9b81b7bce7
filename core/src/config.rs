//! Configuration
//!
//! TOML file under the platform config dir. The binary merges CLI flags
//! over these values; the library never reads the environment on its own.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub loading: LoadingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.paydash.app/v1".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Directory for the friends cache file. Platform data dir when unset.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadingConfig {
    /// Remote attempts beyond the first.
    #[serde(default = "default_retries")]
    pub retries: u32,
    /// Premium accounts fall back to the friends cache.
    #[serde(default)]
    pub premium: bool,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            retries: default_retries(),
            premium: false,
        }
    }
}

fn default_retries() -> u32 {
    2
}

impl Config {
    /// Load configuration from file
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("paydash").join("config.toml"))
    }

    /// Load from the default location, falling back to defaults.
    pub fn load_or_default() -> Self {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                if let Ok(config) = Self::load(&path) {
                    return config;
                }
            }
        }
        Self::default()
    }
}
