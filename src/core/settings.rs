use crate::core::models::PollConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_key: String,
    /// Seconds to wait for the RescueTime API.
    pub request_timeout: u64,
    /// Seconds before retrying after a failed request.
    pub retry_timeout: u64,
    /// Seconds between successful refreshes.
    pub refresh_interval: u64,
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            request_timeout: 10,
            retry_timeout: 60,
            refresh_interval: 600,
            debug: false,
        }
    }
}

impl Settings {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("rescue-bar").join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path().context("Could not determine config directory")?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!(?path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::info!(?path, "Loaded config");
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            anyhow::bail!("api_key is not set; add it to the config file or pass --api-key");
        }

        for (name, value) in [
            ("request_timeout", self.request_timeout),
            ("retry_timeout", self.retry_timeout),
            ("refresh_interval", self.refresh_interval),
        ] {
            if value == 0 {
                anyhow::bail!("{} must be greater than 0", name);
            }
        }

        if self.retry_timeout > self.refresh_interval {
            anyhow::bail!(
                "retry_timeout ({}) must not exceed refresh_interval ({})",
                self.retry_timeout,
                self.refresh_interval
            );
        }

        Ok(())
    }

    pub fn poll_config(&self) -> PollConfig {
        PollConfig {
            api_key: self.api_key.clone(),
            request_timeout: Duration::from_secs(self.request_timeout),
            retry_interval: Duration::from_secs(self.retry_timeout),
            refresh_interval: Duration::from_secs(self.refresh_interval),
        }
    }
}
