use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::fingerprint::{DEFAULT_FINGERPRINT_LEN, MAX_FINGERPRINT_LEN, MIN_FINGERPRINT_LEN};
use crate::resolver::ResolveOptions;

/// Global configuration loaded from `~/.config/flist/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlistConfig {
    /// Prepended to every file name a `*` or `&` placeholder resolves to.
    pub prefix: String,
    /// Hex width of generated `&` names, `MIN_FINGERPRINT_LEN..=MAX_FINGERPRINT_LEN`.
    pub fingerprint_length: usize,
}

impl Default for FlistConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            fingerprint_length: DEFAULT_FINGERPRINT_LEN,
        }
    }
}

impl FlistConfig {
    /// Rejects values a resolution pass cannot honor.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_FINGERPRINT_LEN..=MAX_FINGERPRINT_LEN).contains(&self.fingerprint_length) {
            anyhow::bail!(
                "fingerprint_length must be between {} and {}, got {}",
                MIN_FINGERPRINT_LEN,
                MAX_FINGERPRINT_LEN,
                self.fingerprint_length
            );
        }
        Ok(())
    }

    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            prefix: self.prefix.clone(),
            fingerprint_length: self.fingerprint_length,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("flist")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FlistConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FlistConfig::default();
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

/// Load configuration from an explicit path; the file must exist.
pub fn load_from(path: &Path) -> Result<FlistConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: FlistConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.validate().with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
