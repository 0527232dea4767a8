//! Generation entry points: config in, sitemap document out.

use crate::dedup::{self, ProcessedUrls};
use crate::error::{GenerationError, SitemapWarning};
use crate::model::SitemapConfig;
use crate::normalize::BaseUrl;
use crate::xml;

/// Uncompressed size search engines accept for a single sitemap (50 MiB).
pub const MAX_SITEMAP_BYTES: usize = 50 * 1024 * 1024;

/// Tunables that are not part of the sitemap content itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Documents larger than this produce a [`SitemapWarning::DocumentTooLarge`].
    pub size_warning_bytes: usize,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            size_warning_bytes: MAX_SITEMAP_BYTES,
        }
    }
}

/// Full outcome of a generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    /// The document; `None` when no line survived validation.
    pub xml: Option<String>,
    pub accepted_count: usize,
    pub duplicate_count: usize,
    pub invalid_count: usize,
    pub overflow_count: usize,
    pub warnings: Vec<SitemapWarning>,
}

impl GenerationResult {
    /// Non-blank lines that went into this result.
    pub fn line_count(&self) -> usize {
        self.accepted_count + self.duplicate_count + self.invalid_count + self.overflow_count
    }

    /// The document, or [`GenerationError::NoValidUrls`] when there is none.
    pub fn into_xml(self) -> Result<String, GenerationError> {
        let lines = self.line_count();
        let invalid = self.invalid_count;
        self.xml.ok_or(GenerationError::NoValidUrls { lines, invalid })
    }
}

/// Generates the sitemap for `config` and returns only the document.
///
/// Fails with [`GenerationError::NoValidUrls`] when every line was rejected.
/// Use [`generate`] to also get counts and warnings.
pub fn generate_sitemap(config: &SitemapConfig) -> Result<String, GenerationError> {
    generate(config)?.into_xml()
}

pub fn generate(config: &SitemapConfig) -> Result<GenerationResult, GenerationError> {
    generate_with(config, &GenerationOptions::default())
}

/// Validates the config, processes every line and serializes the survivors.
///
/// Empty input and a bad base URL are fatal; per-line problems only show up
/// in the counters.
pub fn generate_with(
    config: &SitemapConfig,
    options: &GenerationOptions,
) -> Result<GenerationResult, GenerationError> {
    if config.lines().next().is_none() {
        return Err(GenerationError::EmptyInput);
    }
    let base = BaseUrl::parse(&config.base_url)?;

    let processed: ProcessedUrls = dedup::process(config.lines(), &base, &config.defaults());
    tracing::debug!(
        "processed {} lines: accepted={} duplicates={} invalid={} overflow={}",
        processed.line_count(),
        processed.accepted_count,
        processed.duplicate_count,
        processed.invalid_count,
        processed.overflow_count
    );

    let mut warnings = Vec::new();
    if let Some(cap) = processed.capacity_exceeded() {
        warnings.push(SitemapWarning::from(cap));
    }

    let xml = if processed.entries.is_empty() {
        None
    } else {
        let doc = xml::serialize(&processed.entries);
        if doc.len() > options.size_warning_bytes {
            let warning = SitemapWarning::DocumentTooLarge {
                bytes: doc.len(),
                limit: options.size_warning_bytes,
            };
            tracing::warn!("{}", warning);
            warnings.push(warning);
        }
        Some(doc)
    };

    Ok(GenerationResult {
        xml,
        accepted_count: processed.accepted_count,
        duplicate_count: processed.duplicate_count,
        invalid_count: processed.invalid_count,
        overflow_count: processed.overflow_count,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::parse_last_mod;

    fn config(urls: &str) -> SitemapConfig {
        SitemapConfig {
            last_mod: parse_last_mod("2024-01-15").unwrap(),
            ..SitemapConfig::new(urls)
        }
    }

    #[test]
    fn home_about_home_scenario() {
        let r = generate(&config("/home\n/about-us\n/home")).unwrap();
        assert_eq!(r.accepted_count, 2);
        assert_eq!(r.duplicate_count, 1);
        assert_eq!(r.invalid_count, 0);
        let xml = r.xml.unwrap();
        assert_eq!(xml.matches("<url>").count(), 2);
        assert!(xml.contains("<loc>https://example.com/home</loc>"));
        assert!(xml.contains("<loc>https://example.com/about-us</loc>"));
        assert!(r.warnings.is_empty());
    }

    #[test]
    fn blank_input_is_empty_input_error() {
        assert!(matches!(generate(&config("")), Err(GenerationError::EmptyInput)));
        assert!(matches!(generate(&config(" \n\t\n ")), Err(GenerationError::EmptyInput)));
    }

    #[test]
    fn bad_base_url_is_fatal() {
        let cfg = SitemapConfig {
            base_url: "example.com".to_string(),
            ..config("/a")
        };
        assert!(matches!(generate(&cfg), Err(GenerationError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn empty_input_reported_before_base_url() {
        let cfg = SitemapConfig {
            base_url: "nope".to_string(),
            ..config("")
        };
        assert!(matches!(generate(&cfg), Err(GenerationError::EmptyInput)));
    }

    #[test]
    fn all_invalid_yields_no_document() {
        let cfg = config("mailto:a@b.c\nftp://files.example.com/x");
        let r = generate(&cfg).unwrap();
        assert!(r.xml.is_none());
        assert_eq!(r.invalid_count, 2);
        assert!(matches!(
            generate_sitemap(&cfg),
            Err(GenerationError::NoValidUrls { lines: 2, invalid: 2 })
        ));
    }

    #[test]
    fn size_warning_uses_configured_limit() {
        let options = GenerationOptions { size_warning_bytes: 10 };
        let r = generate_with(&config("/a"), &options).unwrap();
        assert!(r.xml.is_some());
        assert!(matches!(
            r.warnings.as_slice(),
            [SitemapWarning::DocumentTooLarge { limit: 10, .. }]
        ));
    }

    #[test]
    fn config_is_not_mutated() {
        let cfg = config("/b\n/a\n/b");
        let before = cfg.clone();
        let _ = generate(&cfg).unwrap();
        assert_eq!(cfg, before);
    }
}
