//! Global configuration for rentmap (stored in ~/.config/rentmap/config.toml)

use std::fs;
use std::path::PathBuf;

use crate::error::{RentmapError, Result};

const CONFIG_DIR: &str = "rentmap";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "RENTMAP_CONFIG_DIR";

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Default, PartialEq)]
pub struct GlobalConfig {
    /// Data file used when neither `--data` nor a local config names one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_data_path: Option<PathBuf>,
}

impl GlobalConfig {
    fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    RentmapError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| RentmapError::io_operation("read global config", path.display(), e))?;

        toml::from_str(&content).map_err(|e| {
            RentmapError::Other(format!(
                "failed to parse global config from {}: {}",
                path.display(),
                e
            ))
        })
    }
}
