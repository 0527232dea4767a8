//! Advisory line counts for live feedback while URLs are being typed.
//!
//! Duplicates here are textual (same trimmed line), not canonical: `/a` and
//! `https://example.com/a` are counted as distinct. Generation does the
//! exact canonical dedup; this pass skips URL parsing so it stays cheap
//! enough to rerun on every edit.

use std::collections::HashSet;

use serde::Serialize;

use crate::model::non_blank_lines;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Stats {
    /// Non-blank lines.
    pub count: usize,
    /// Lines whose trimmed text already appeared earlier.
    pub duplicates: usize,
}

pub fn compute_stats(raw_text: &str) -> Stats {
    let mut unique: HashSet<&str> = HashSet::new();
    let mut count = 0;
    for line in non_blank_lines(raw_text) {
        count += 1;
        unique.insert(line.trim());
    }
    Stats {
        count,
        duplicates: count - unique.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text() {
        assert_eq!(compute_stats(""), Stats::default());
        assert_eq!(compute_stats("  \n\t\n"), Stats::default());
    }

    #[test]
    fn counts_textual_duplicates_after_trim() {
        let s = compute_stats("/home\n/about-us\n  /home  \n\n/home");
        assert_eq!(s, Stats { count: 4, duplicates: 2 });
    }

    #[test]
    fn canonical_equivalents_are_not_duplicates() {
        let s = compute_stats("/a\nhttps://example.com/a");
        assert_eq!(s.duplicates, 0);
    }

    #[test]
    fn serializes_as_json_object() {
        let json = serde_json::to_string(&compute_stats("/a\n/a")).unwrap();
        assert_eq!(json, r#"{"count":2,"duplicates":1}"#);
    }
}
