//! Path resolution for the data file and viewer configuration
//!
//! Data file, first match wins:
//! 1. `--data` (or `RENTMAP_DATA`)
//! 2. `data_path` in the viewer config, relative to the config's directory
//! 3. `default_data_path` in the global config
//! 4. `data/properties.json` under the working directory
//!
//! Viewer config: `--config`, else `rentmap.toml` next to an explicit data
//! file, else `rentmap.toml` in the working directory.

use std::env;
use std::path::{Path, PathBuf};

use rentmap_core::config::{GlobalConfig, ViewerConfig};
use rentmap_core::error::Result;
use tracing::debug;

pub const DEFAULT_DATA_PATH: &str = "data/properties.json";

/// Resolve the root path for relative lookups.
///
/// Falls back to the current working directory, or "." if that cannot be
/// determined.
pub fn resolve_root_path(root: Option<PathBuf>) -> PathBuf {
    root.unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn absolutize(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Load the viewer configuration
pub fn load_viewer_config(
    root: &Path,
    config: Option<&Path>,
    data: Option<&Path>,
) -> Result<(ViewerConfig, PathBuf)> {
    if let Some(path) = config {
        let path = absolutize(root, path);
        let base = path.parent().map_or_else(|| root.to_path_buf(), Path::to_path_buf);
        return Ok((ViewerConfig::load(&path)?, base));
    }

    let dir = data
        .map(|d| absolutize(root, d))
        .and_then(|d| d.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| root.to_path_buf());
    Ok((ViewerConfig::discover(&dir)?, dir))
}

/// Resolve the data file path
pub fn resolve_data_path(
    root: &Path,
    data: Option<&Path>,
    config: &ViewerConfig,
    config_dir: &Path,
) -> Result<PathBuf> {
    if let Some(path) = data {
        return Ok(absolutize(root, path));
    }
    if let Some(path) = config.resolve_data_path(config_dir) {
        debug!(path = %path.display(), "data path from viewer config");
        return Ok(path);
    }
    if let Some(path) = GlobalConfig::load()?.default_data_path {
        debug!(path = %path.display(), "data path from global config");
        return Ok(absolutize(root, &path));
    }
    Ok(root.join(DEFAULT_DATA_PATH))
}
