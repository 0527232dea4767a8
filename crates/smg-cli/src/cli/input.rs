//! Reading the URL list from a file or stdin.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Reads the whole URL list. `None` or `-` means stdin.
pub fn read_urls(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            std::fs::read_to_string(p).with_context(|| format!("read {}", p.display()))
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("read URL list from stdin")?;
            Ok(text)
        }
    }
}
