//! Viewer configuration for rentmap
//!
//! Configuration lives in `rentmap.toml`, usually next to the data file.
//! Every key is optional; a missing file means all defaults.

pub mod global;
pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RentmapError, Result};

pub use global::GlobalConfig;
pub use types::{FilterConfig, MapConfig, NotificationConfig, ViewerConfig};

/// File name looked up next to the data file
pub const CONFIG_FILE_NAME: &str = "rentmap.toml";

impl ViewerConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| RentmapError::io_operation("read config", path.display(), e))?;
        let config: ViewerConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `rentmap.toml` from `dir` if present, defaults otherwise
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RentmapError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the configured data path against the config file's directory
    pub fn resolve_data_path(&self, base_dir: &Path) -> Option<PathBuf> {
        self.data_path.as_ref().map(|p| {
            let p = Path::new(p);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                base_dir.join(p)
            }
        })
    }

    fn validate(&self) -> Result<()> {
        if !(self.filter.price_unit.is_finite() && self.filter.price_unit > 0.0) {
            return Err(RentmapError::invalid_value(
                "filter.price_unit",
                self.filter.price_unit,
            ));
        }
        if self.filter.unrestricted_gender.trim().is_empty() {
            return Err(RentmapError::invalid_value(
                "filter.unrestricted_gender",
                "(empty)",
            ));
        }
        Ok(())
    }
}
