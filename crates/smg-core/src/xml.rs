//! sitemaps.org 0.9 XML serialization.

use std::fmt::Write as _;

use crate::model::{UrlEntry, LAST_MOD_FORMAT};

/// Namespace of the `urlset` root element.
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// MIME type to use when offering the document for download.
pub const SITEMAP_MIME_TYPE: &str = "application/xml";

/// Conventional file name of a sitemap.
pub const SITEMAP_FILE_NAME: &str = "sitemap.xml";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Renders `entries` as a complete sitemap document.
///
/// Output is byte-for-byte deterministic for a given entry list: two-space
/// indentation, `\n` line endings and a trailing newline.
pub fn serialize(entries: &[UrlEntry]) -> String {
    // ~150 bytes of markup per entry on top of the URL itself.
    let capacity = 128 + entries.iter().map(|e| e.canonical_url.len() + 150).sum::<usize>();
    let mut out = String::with_capacity(capacity);

    out.push_str(XML_DECLARATION);
    out.push('\n');
    let _ = writeln!(out, r#"<urlset xmlns="{}">"#, SITEMAP_NAMESPACE);

    for entry in entries {
        out.push_str("  <url>\n");
        let _ = writeln!(out, "    <loc>{}</loc>", escape_xml(&entry.canonical_url));
        let _ = writeln!(
            out,
            "    <lastmod>{}</lastmod>",
            entry.last_mod.format(LAST_MOD_FORMAT)
        );
        let _ = writeln!(out, "    <changefreq>{}</changefreq>", entry.change_freq);
        let _ = writeln!(out, "    <priority>{}</priority>", entry.priority);
        out.push_str("  </url>\n");
    }

    out.push_str("</urlset>\n");
    out
}

/// Escapes the five XML special characters for text or attribute content.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChangeFreq, Priority};
    use chrono::NaiveDate;

    fn entry(url: &str, priority: u8) -> UrlEntry {
        UrlEntry {
            raw_input: url.to_string(),
            canonical_url: url.to_string(),
            priority: Priority::from_tenths(priority).unwrap(),
            change_freq: ChangeFreq::Daily,
            last_mod: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            valid: true,
        }
    }

    #[test]
    fn serializes_protocol_layout() {
        let xml = serialize(&[entry("https://example.com/about-us", 8)]);
        let expected = "\
<?xml version=\"1.0\" encoding=\"UTF-8\"?>
<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">
  <url>
    <loc>https://example.com/about-us</loc>
    <lastmod>2024-01-15</lastmod>
    <changefreq>daily</changefreq>
    <priority>0.8</priority>
  </url>
</urlset>
";
        assert_eq!(xml, expected);
    }

    #[test]
    fn priority_bounds_keep_one_decimal() {
        let xml = serialize(&[entry("https://a.com/", 0), entry("https://b.com/", 10)]);
        assert!(xml.contains("<priority>0.0</priority>"));
        assert!(xml.contains("<priority>1.0</priority>"));
    }

    #[test]
    fn loc_is_escaped() {
        let xml = serialize(&[entry("https://example.com/?a=1&b='2'", 5)]);
        assert!(xml.contains("<loc>https://example.com/?a=1&amp;b=&apos;2&apos;</loc>"));
    }

    #[test]
    fn escape_all_specials() {
        assert_eq!(escape_xml(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&apos;");
        assert_eq!(escape_xml("plain"), "plain");
    }

    #[test]
    fn entry_order_is_kept() {
        let xml = serialize(&[entry("https://z.com/", 5), entry("https://a.com/", 5)]);
        let z = xml.find("https://z.com/").unwrap();
        let a = xml.find("https://a.com/").unwrap();
        assert!(z < a);
    }
}
