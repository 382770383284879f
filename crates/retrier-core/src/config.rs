use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::retry::DEFAULT_MAX_RETRIES;

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

/// Configuration loaded from `~/.config/retrier/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrierConfig {
    /// Maximum number of attempts per run (including the first).
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl Default for RetrierConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("retrier")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RetrierConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RetrierConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from a specific file. Missing keys take their defaults.
pub fn load_from(path: &Path) -> Result<RetrierConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: RetrierConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        assert_eq!(RetrierConfig::default().max_retries, 10);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = RetrierConfig { max_retries: 3 };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: RetrierConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let cfg: RetrierConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.max_retries, DEFAULT_MAX_RETRIES);
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "max_retries = 20\n").unwrap();
        let cfg = load_from(&path).unwrap();
        assert_eq!(cfg.max_retries, 20);
    }

    #[test]
    fn load_from_rejects_bad_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "max_retries = -1\n").unwrap();
        let err = load_from(&path).unwrap_err();
        assert!(format!("{:#}", err).starts_with("parse "));
    }

    #[test]
    fn load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_from(&dir.path().join("nope.toml")).is_err());
    }
}
