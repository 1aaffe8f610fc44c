use std::path::Path;

use color_eyre::{eyre::WrapErr, Result};
use serde::Deserialize;
use tracing::info;

/// Where the dashboard that serves the log lives. The log path itself is
/// fixed relative to this, see [`crate::loader::LOG_PATH`].
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080/web/";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }
}

impl Config {
    /// Loads the config file from the XDG config directory
    /// e.g. ~/.config/botlog/config.toml
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let xdg = xdg::BaseDirectories::with_prefix("botlog")
            .wrap_err("failed to get XDG base directories")?;
        let config_file = xdg.get_config_file("config.toml");
        if !config_file.exists() {
            info!("No config file at {}, using defaults", config_file.display());
            return Ok(Self::default());
        }
        Self::from_file(&config_file)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).wrap_err_with(|| {
            format!("unable to read config file from {}", path.display())
        })?;
        let config = toml::from_str(&raw)
            .wrap_err_with(|| format!("unable to parse config file {}", path.display()))?;
        info!("Loaded config file from {}", path.display());
        Ok(config)
    }
}
