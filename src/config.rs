use crate::scrapers::types::ScrapeSettings;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_CONFIG_PATH: &str = "data/config.yaml";
pub const DEFAULT_OUTPUT_PATH: &str = "idealista_data.json";

/// Contents of the YAML config file. Only `url` is expected to be set.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    /// Seed search-results URL; empty when not configured
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_delay_secs")]
    pub delay_secs: u64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_output() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

fn default_delay_secs() -> u64 {
    1
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: String::new(),
            output: default_output(),
            delay_secs: default_delay_secs(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).context("Failed to parse config YAML")
    }

    /// Read the config file; a missing file means an empty config
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !tokio::fs::try_exists(path).await.unwrap_or(false) {
            warn!("Config file {} not found", path.display());
            return Ok(Self::default());
        }

        let yaml = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&yaml)
    }

    pub fn settings(&self) -> ScrapeSettings {
        ScrapeSettings {
            detail_delay: Duration::from_secs(self.delay_secs),
            timeout: Duration::from_secs(self.timeout_secs),
            ..ScrapeSettings::default()
        }
    }
}
