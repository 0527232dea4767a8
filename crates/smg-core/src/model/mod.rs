//! Input configuration and derived per-URL entries.

mod change_freq;
mod priority;

pub use change_freq::ChangeFreq;
pub use priority::Priority;

use crate::error::SettingError;

pub use chrono::NaiveDate;

/// Base URL used when the user has not picked one.
pub const DEFAULT_BASE_URL: &str = "https://example.com";

/// Date format of `<lastmod>` (W3C Datetime, date precision).
pub const LAST_MOD_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_last_mod(s: &str) -> Result<NaiveDate, SettingError> {
    NaiveDate::parse_from_str(s.trim(), LAST_MOD_FORMAT)
        .map_err(|_| SettingError::LastMod(s.to_string()))
}

/// Today's date in UTC; the default `<lastmod>` for new configs.
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

/// Metadata applied to every accepted URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryDefaults {
    pub priority: Priority,
    pub change_freq: ChangeFreq,
    pub last_mod: NaiveDate,
}

/// Everything one generation call needs. The engine only borrows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapConfig {
    /// Raw multi-line text, one candidate URL or path per line.
    pub urls: String,
    /// Absolute origin (optionally with a path prefix) for relative lines.
    pub base_url: String,
    pub priority: Priority,
    pub change_freq: ChangeFreq,
    pub last_mod: NaiveDate,
}

impl SitemapConfig {
    /// Config with the stock defaults and today's date as `last_mod`.
    pub fn new(urls: impl Into<String>) -> Self {
        Self {
            urls: urls.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            priority: Priority::default(),
            change_freq: ChangeFreq::default(),
            last_mod: today(),
        }
    }

    pub fn defaults(&self) -> EntryDefaults {
        EntryDefaults {
            priority: self.priority,
            change_freq: self.change_freq,
            last_mod: self.last_mod,
        }
    }

    /// Non-blank lines of `urls`, untrimmed, in input order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        non_blank_lines(&self.urls)
    }
}

/// Splits on `\n` (tolerating `\r\n`) and skips whitespace-only lines.
pub(crate) fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
}

/// One accepted sitemap URL with its effective metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlEntry {
    /// The line as typed, before trimming.
    pub raw_input: String,
    pub canonical_url: String,
    pub priority: Priority,
    pub change_freq: ChangeFreq,
    pub last_mod: NaiveDate,
    pub valid: bool,
}

impl UrlEntry {
    pub(crate) fn accepted(raw_input: &str, canonical_url: String, defaults: &EntryDefaults) -> Self {
        Self {
            raw_input: raw_input.to_string(),
            canonical_url,
            priority: defaults.priority,
            change_freq: defaults.change_freq,
            last_mod: defaults.last_mod,
            valid: true,
        }
    }
}
