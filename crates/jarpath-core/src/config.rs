use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::locator::ARCHIVE_SCHEME;
use crate::resolver::ResolverOptions;

fn default_archive_schemes() -> Vec<String> {
    vec![ARCHIVE_SCHEME.to_string()]
}

/// Global configuration loaded from `~/.config/jarpath/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JarpathConfig {
    /// Schemes whose locators embed a container (`<scheme>:<container>!/<path>`).
    #[serde(default = "default_archive_schemes")]
    pub archive_schemes: Vec<String>,
    /// Separator rewritten to `/` in relative paths. Platform separator when unset.
    #[serde(default)]
    pub native_separator: Option<char>,
}

impl Default for JarpathConfig {
    fn default() -> Self {
        Self {
            archive_schemes: default_archive_schemes(),
            native_separator: None,
        }
    }
}

impl JarpathConfig {
    pub fn resolver_options(&self) -> ResolverOptions {
        let defaults = ResolverOptions::default();
        ResolverOptions {
            archive_schemes: self.archive_schemes.clone(),
            native_separator: self.native_separator.unwrap_or(defaults.native_separator),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("jarpath")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<JarpathConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<JarpathConfig> {
    if !path.exists() {
        let default_cfg = JarpathConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: JarpathConfig = toml::from_str(&data)?;
    Ok(cfg)
}
