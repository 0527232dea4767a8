//! Deduplication and validation of normalized lines.

use std::collections::HashSet;

use crate::error::CapacityExceeded;
use crate::model::{EntryDefaults, UrlEntry};
use crate::normalize::BaseUrl;

/// Maximum number of `<url>` entries in one sitemap file.
pub const MAX_URLS_PER_SITEMAP: usize = 50_000;

/// Outcome of one pass over the input lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessedUrls {
    /// Accepted entries in first-seen order; at most [`MAX_URLS_PER_SITEMAP`].
    pub entries: Vec<UrlEntry>,
    pub accepted_count: usize,
    pub duplicate_count: usize,
    pub invalid_count: usize,
    /// Unique valid lines dropped because the cap was reached.
    pub overflow_count: usize,
}

impl ProcessedUrls {
    /// Total lines examined; equals the number of non-blank input lines.
    pub fn line_count(&self) -> usize {
        self.accepted_count + self.duplicate_count + self.invalid_count + self.overflow_count
    }

    pub fn capacity_exceeded(&self) -> Option<CapacityExceeded> {
        // Overflow only happens once `entries` is full, so its length is the cap.
        (self.overflow_count > 0).then_some(CapacityExceeded {
            limit: self.entries.len(),
            dropped: self.overflow_count,
        })
    }
}

/// Normalizes, validates and deduplicates `lines` in order.
///
/// Blank lines must already be filtered out. Invalid lines are counted and
/// skipped; they never abort the batch.
pub fn process<'a, I>(lines: I, base: &BaseUrl, defaults: &EntryDefaults) -> ProcessedUrls
where
    I: IntoIterator<Item = &'a str>,
{
    process_with_limit(lines, base, defaults, MAX_URLS_PER_SITEMAP)
}

pub(crate) fn process_with_limit<'a, I>(
    lines: I,
    base: &BaseUrl,
    defaults: &EntryDefaults,
    limit: usize,
) -> ProcessedUrls
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = ProcessedUrls::default();
    let mut seen: HashSet<String> = HashSet::new();

    for raw in lines {
        let canonical = match base.normalize(raw) {
            Ok(url) => url,
            Err(err) => {
                tracing::debug!("skipping invalid line: {}", err);
                out.invalid_count += 1;
                continue;
            }
        };

        if !seen.insert(canonical.clone()) {
            out.duplicate_count += 1;
            continue;
        }

        if out.entries.len() >= limit {
            out.overflow_count += 1;
            continue;
        }

        out.entries.push(UrlEntry::accepted(raw, canonical, defaults));
        out.accepted_count += 1;
    }

    if let Some(cap) = out.capacity_exceeded() {
        tracing::warn!("{}", cap);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChangeFreq, Priority};
    use chrono::NaiveDate;

    fn defaults() -> EntryDefaults {
        EntryDefaults {
            priority: Priority::default(),
            change_freq: ChangeFreq::Weekly,
            last_mod: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        }
    }

    fn base() -> BaseUrl {
        BaseUrl::parse("https://example.com").unwrap()
    }

    fn urls(p: &ProcessedUrls) -> Vec<&str> {
        p.entries.iter().map(|e| e.canonical_url.as_str()).collect()
    }

    #[test]
    fn duplicates_removed_first_occurrence_wins() {
        let p = process(["/home", "/about-us", "/home"], &base(), &defaults());
        assert_eq!(urls(&p), vec!["https://example.com/home", "https://example.com/about-us"]);
        assert_eq!(p.accepted_count, 2);
        assert_eq!(p.duplicate_count, 1);
        assert_eq!(p.invalid_count, 0);
        assert_eq!(p.entries[0].raw_input, "/home");
    }

    #[test]
    fn relative_and_absolute_forms_of_same_url_are_duplicates() {
        let p = process(["/a", "https://example.com/a", " /a "], &base(), &defaults());
        assert_eq!(p.accepted_count, 1);
        assert_eq!(p.duplicate_count, 2);
    }

    #[test]
    fn dedup_is_case_sensitive_in_path() {
        let p = process(["/Page", "/page"], &base(), &defaults());
        assert_eq!(p.accepted_count, 2);
    }

    #[test]
    fn invalid_lines_counted_not_coerced() {
        let p = process(
            ["/ok", "mailto:x@example.com", "https://bad host/", "/ok2"],
            &base(),
            &defaults(),
        );
        assert_eq!(urls(&p), vec!["https://example.com/ok", "https://example.com/ok2"]);
        assert_eq!(p.invalid_count, 2);
        assert_eq!(p.line_count(), 4);
        assert!(p.entries.iter().all(|e| e.valid));
    }

    #[test]
    fn entries_carry_defaults() {
        let p = process(["/x"], &base(), &defaults());
        let e = &p.entries[0];
        assert_eq!(e.change_freq, ChangeFreq::Weekly);
        assert_eq!(e.priority.to_string(), "0.8");
        assert_eq!(e.last_mod, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn overflow_beyond_limit_is_reported() {
        let p = process_with_limit(["/1", "/2", "/3", "/2", "/4"], &base(), &defaults(), 2);
        assert_eq!(urls(&p), vec!["https://example.com/1", "https://example.com/2"]);
        assert_eq!(p.accepted_count, 2);
        assert_eq!(p.duplicate_count, 1);
        assert_eq!(p.overflow_count, 2);
        assert_eq!(p.line_count(), 5);
        assert_eq!(
            p.capacity_exceeded(),
            Some(CapacityExceeded { limit: 2, dropped: 2 })
        );
    }

    #[test]
    fn duplicates_of_overflowed_urls_still_count_as_duplicates() {
        let p = process_with_limit(["/1", "/2", "/2"], &base(), &defaults(), 1);
        assert_eq!(p.overflow_count, 1);
        assert_eq!(p.duplicate_count, 1);
    }

    #[test]
    fn no_capacity_warning_under_limit() {
        let p = process(["/1"], &base(), &defaults());
        assert!(p.capacity_exceeded().is_none());
    }
}
