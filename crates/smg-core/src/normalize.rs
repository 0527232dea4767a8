//! URL normalization: raw input line → absolute canonical URL.
//!
//! Absolute lines keep their own host. Relative lines are resolved against
//! the base URL with standard RFC 3986 reference resolution (`url::Url::join`).
//! Serialization through `url` percent-encodes unsafe characters in path,
//! query and fragment while leaving existing `%XX` escapes alone.

use crate::error::{GenerationError, NormalizationError};
use url::{ParseError, Url};

const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];

/// A validated base URL that relative lines are resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Validates `raw` as an absolute http(s) URL with a host.
    pub fn parse(raw: &str) -> Result<Self, GenerationError> {
        let trimmed = raw.trim();
        let invalid = |reason: String| GenerationError::InvalidBaseUrl {
            url: raw.to_string(),
            reason,
        };

        let url = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
        check_sitemap_url(&url, trimmed).map_err(|e| invalid(e.to_string()))?;
        Ok(Self(url))
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Resolves one trimmed, non-blank line to its canonical URL.
    pub fn normalize(&self, raw_line: &str) -> Result<String, NormalizationError> {
        let line = raw_line.trim();
        let parse_err = |source| NormalizationError::Parse {
            input: line.to_string(),
            source,
        };

        let url = match Url::parse(line) {
            Ok(absolute) => absolute,
            Err(ParseError::RelativeUrlWithoutBase) => self.0.join(line).map_err(parse_err)?,
            Err(e) => return Err(parse_err(e)),
        };

        check_sitemap_url(&url, line)?;
        Ok(url.into())
    }
}

/// Resolves `raw_line` against `base_url` in one step.
///
/// Callers normalizing many lines should parse the base once with
/// [`BaseUrl::parse`] instead.
pub fn normalize(raw_line: &str, base_url: &str) -> Result<String, NormalizationError> {
    let base = BaseUrl::parse(base_url).map_err(|e| NormalizationError::InvalidBase {
        base: base_url.to_string(),
        reason: e.to_string(),
    })?;
    base.normalize(raw_line)
}

fn check_sitemap_url(url: &Url, input: &str) -> Result<(), NormalizationError> {
    if !ALLOWED_SCHEMES.contains(&url.scheme()) {
        return Err(NormalizationError::UnsupportedScheme {
            input: input.to_string(),
            scheme: url.scheme().to_string(),
        });
    }
    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(NormalizationError::MissingHost {
            input: input.to_string(),
        }),
    }
}
