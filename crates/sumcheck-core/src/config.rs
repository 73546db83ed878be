use crate::checksum::{Algorithm, DEFAULT_CHUNK_SIZE};
use crate::manifest::DEFAULT_MANIFEST_NAME;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/sumcheck/config.toml`.
/// Missing keys fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SumcheckConfig {
    /// Manifest file looked up inside the verified directory.
    pub manifest_name: String,
    /// Checksum algorithm the manifest was written with.
    pub algorithm: Algorithm,
    /// Bytes read per chunk while hashing.
    pub chunk_size: usize,
}

impl Default for SumcheckConfig {
    fn default() -> Self {
        Self {
            manifest_name: DEFAULT_MANIFEST_NAME.to_string(),
            algorithm: Algorithm::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sumcheck")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SumcheckConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SumcheckConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<SumcheckConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: SumcheckConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
