//! `smg stats` – advisory counts of lines and textual duplicates.

use anyhow::Result;
use smg_core::compute_stats;
use std::path::Path;

use crate::cli::input::read_urls;

pub fn run_stats(input: Option<&Path>, json: bool) -> Result<()> {
    let stats = compute_stats(&read_urls(input)?);
    if json {
        println!("{}", serde_json::to_string(&stats)?);
    } else {
        println!("URLs: {}", stats.count);
        if stats.duplicates > 0 {
            println!("Duplicates: {}", stats.duplicates);
        }
    }
    Ok(())
}
