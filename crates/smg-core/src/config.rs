use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::generate::{GenerationOptions, MAX_SITEMAP_BYTES};
use crate::model::{self, ChangeFreq, Priority, SitemapConfig, DEFAULT_BASE_URL};

/// Default sitemap settings loaded from `~/.config/smg/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmgConfig {
    /// Origin that relative paths are resolved against.
    pub base_url: String,
    /// Default `<priority>` for every URL, e.g. "0.8".
    pub priority: Priority,
    /// Default `<changefreq>` for every URL.
    pub changefreq: ChangeFreq,
    /// Fixed `<lastmod>` date; today's date (UTC) when absent.
    #[serde(default)]
    pub lastmod: Option<NaiveDate>,
    /// Warn when the document exceeds this many bytes (default 50 MiB).
    #[serde(default)]
    pub size_warning_bytes: Option<usize>,
}

impl Default for SmgConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            priority: Priority::default(),
            changefreq: ChangeFreq::default(),
            lastmod: None,
            size_warning_bytes: None,
        }
    }
}

impl SmgConfig {
    /// Builds the per-call engine input for `urls` from these defaults.
    pub fn sitemap_config(&self, urls: impl Into<String>) -> SitemapConfig {
        SitemapConfig {
            urls: urls.into(),
            base_url: self.base_url.clone(),
            priority: self.priority,
            change_freq: self.changefreq,
            last_mod: self.lastmod.unwrap_or_else(model::today),
        }
    }

    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            size_warning_bytes: self.size_warning_bytes.unwrap_or(MAX_SITEMAP_BYTES),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("smg")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SmgConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<SmgConfig> {
    if !path.exists() {
        let default_cfg = SmgConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SmgConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
