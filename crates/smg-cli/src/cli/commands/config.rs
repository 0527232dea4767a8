//! `smg config` – show where the config lives and what it resolves to.

use anyhow::Result;
use smg_core::config::{self, SmgConfig};

pub fn run_config(cfg: &SmgConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
