//! Global calstore configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Configuration at ~/.config/calstore/config.toml
///
/// Only one setting so far: where the state files live. Absent file means
/// all defaults.
#[derive(Debug, Deserialize, Default)]
pub struct GlobalConfig {
    pub data_dir: Option<PathBuf>,
}

impl GlobalConfig {
    pub fn load() -> Result<GlobalConfig> {
        let Some(path) = Self::config_path() else {
            return Ok(GlobalConfig::default());
        };

        if !path.exists() {
            return Ok(GlobalConfig::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Invalid config at {}", path.display()))?;
        Ok(config)
    }

    fn config_path() -> Option<PathBuf> {
        Some(dirs::config_dir()?.join("calstore").join("config.toml"))
    }
}
