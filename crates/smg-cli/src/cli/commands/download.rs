//! `smg download` – save the sitemap as `sitemap.xml`.

use anyhow::{Context, Result};
use smg_core::config::SmgConfig;
use smg_core::xml::{SITEMAP_FILE_NAME, SITEMAP_MIME_TYPE};
use std::path::{Path, PathBuf};

use super::build_sitemap;
use crate::cli::input::read_urls;

pub fn run_download(cfg: &SmgConfig, input: Option<&Path>, dir: &Path) -> Result<()> {
    let path = save_sitemap(cfg, read_urls(input)?, dir)?;
    println!("Saved {} ({})", path.display(), SITEMAP_MIME_TYPE);
    Ok(())
}

/// Generates and writes `<dir>/sitemap.xml`, returning the written path.
pub(crate) fn save_sitemap(cfg: &SmgConfig, urls: String, dir: &Path) -> Result<PathBuf> {
    let xml = build_sitemap(cfg, urls)?;
    std::fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let path = dir.join(SITEMAP_FILE_NAME);
    std::fs::write(&path, xml).with_context(|| format!("write {}", path.display()))?;
    tracing::info!("saved sitemap to {}", path.display());
    Ok(path)
}
