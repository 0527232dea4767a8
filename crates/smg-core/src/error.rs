//! Error and warning types for sitemap generation.
//!
//! Global failures ([`GenerationError`]) abort a generation call. Per-line
//! failures ([`NormalizationError`]) are absorbed into the invalid counter.
//! Soft limits ([`CapacityExceeded`], [`SitemapWarning`]) travel alongside a
//! still-usable result.

use thiserror::Error;

/// Fatal failure of a whole generation call.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// No non-blank lines were supplied.
    #[error("no URLs supplied; enter at least one URL")]
    EmptyInput,

    /// The base URL is not a usable absolute http(s) URL.
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Every non-blank line was rejected, so there is no document to return.
    #[error("none of the {lines} supplied lines is a valid URL ({invalid} invalid)")]
    NoValidUrls { lines: usize, invalid: usize },
}

/// Why a single input line could not be turned into a canonical URL.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizationError {
    /// The line (or its resolution against the base) is not a valid URL.
    #[error("cannot parse {input:?} as a URL: {source}")]
    Parse {
        input: String,
        #[source]
        source: url::ParseError,
    },

    /// The URL parsed, but sitemaps only list http and https resources.
    #[error("unsupported scheme {scheme:?} in {input:?}; only http and https are allowed")]
    UnsupportedScheme { input: String, scheme: String },

    /// The URL has no host component.
    #[error("URL {input:?} has no host")]
    MissingHost { input: String },

    /// The base URL used for resolution is itself unusable.
    #[error("cannot resolve against base {base:?}: {reason}")]
    InvalidBase { base: String, reason: String },
}

/// Parse failure for a textual setting (priority, change frequency, date).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingError {
    #[error("invalid priority {0:?}: expected a decimal between 0.0 and 1.0")]
    Priority(String),

    #[error(
        "invalid change frequency {0:?}: expected one of always, hourly, daily, weekly, monthly, yearly, never"
    )]
    ChangeFreq(String),

    #[error("invalid last-modified date {0:?}: expected YYYY-MM-DD")]
    LastMod(String),
}

/// The accepted set hit the protocol cap and was truncated.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("sitemap capacity exceeded: kept the first {limit} URLs, dropped {dropped}")]
pub struct CapacityExceeded {
    pub limit: usize,
    pub dropped: usize,
}

/// Non-fatal conditions reported next to a generated document.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SitemapWarning {
    #[error(transparent)]
    CapacityExceeded(#[from] CapacityExceeded),

    /// The serialized document is larger than the uncompressed size guidance.
    #[error("sitemap is {bytes} bytes uncompressed; search engines accept at most {limit}")]
    DocumentTooLarge { bytes: usize, limit: usize },
}
