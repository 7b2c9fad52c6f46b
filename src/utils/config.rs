//! Configuration loading and management.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Output rendering configuration.
    pub output: OutputConfig,
}

/// Output rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format ("text" or "json").
    pub format: String,
    /// Pretty-print JSON output.
    pub pretty: bool,
    /// Key the assessment is nested under when emitting JSON for the
    /// orchestration layer to merge into its shared state object.
    pub state_key: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            pretty: true,
            state_key: "risk_assessment_data".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Create a sample configuration file.
    pub fn create_sample_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Config::default();
        config.save_to_file(path)
    }
}

/// Load configuration from file or create default.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    if path.as_ref().exists() {
        Config::from_file(path)
    } else {
        Ok(Config::default())
    }
}
