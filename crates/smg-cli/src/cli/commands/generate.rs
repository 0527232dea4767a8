//! `smg generate` – build the sitemap and print or save it.

use anyhow::{Context, Result};
use smg_core::config::SmgConfig;
use smg_core::generate_with;
use std::path::Path;

use crate::cli::input::read_urls;

/// Generates the document for `urls`, reporting counts and warnings on stderr.
///
/// Fails when the input is empty, the base URL is bad, or no line was valid.
pub fn build_sitemap(cfg: &SmgConfig, urls: String) -> Result<String> {
    let sitemap = cfg.sitemap_config(urls);
    let result = generate_with(&sitemap, &cfg.generation_options())?;

    eprintln!(
        "accepted {}, duplicates {}, invalid {}",
        result.accepted_count, result.duplicate_count, result.invalid_count
    );
    for warning in &result.warnings {
        eprintln!("warning: {warning}");
    }

    Ok(result.into_xml()?)
}

pub fn run_generate(cfg: &SmgConfig, input: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let xml = build_sitemap(cfg, read_urls(input)?)?;
    match output {
        Some(path) => {
            std::fs::write(path, &xml).with_context(|| format!("write {}", path.display()))?;
            tracing::info!("wrote sitemap to {}", path.display());
            eprintln!("Wrote {}", path.display());
        }
        None => print!("{xml}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use smg_core::model::NaiveDate;

    fn cfg() -> SmgConfig {
        SmgConfig {
            lastmod: NaiveDate::from_ymd_opt(2024, 1, 15),
            ..SmgConfig::default()
        }
    }

    #[test]
    fn build_sitemap_returns_document() {
        let xml = build_sitemap(&cfg(), "/home\n/about-us\n/home\n".to_string()).unwrap();
        assert_eq!(xml.matches("<url>").count(), 2);
        assert!(xml.contains("<lastmod>2024-01-15</lastmod>"));
    }

    #[test]
    fn build_sitemap_all_invalid_is_error() {
        let err = build_sitemap(&cfg(), "mailto:a@b.c\n".to_string()).unwrap_err();
        assert!(err.to_string().contains("valid URL"));
    }

    #[test]
    fn run_generate_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("urls.txt");
        let output = dir.path().join("out.xml");
        std::fs::write(&input, "/a\n/b\n").unwrap();

        run_generate(&cfg(), Some(&input), Some(&output)).unwrap();
        let xml = std::fs::read_to_string(&output).unwrap();
        assert!(xml.contains("<loc>https://example.com/a</loc>"));
        assert!(xml.contains("<loc>https://example.com/b</loc>"));
    }

    #[test]
    fn run_generate_missing_input_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        assert!(run_generate(&cfg(), Some(&missing), None).is_err());
    }
}
