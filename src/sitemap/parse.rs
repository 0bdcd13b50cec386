//! Sitemap XML parsing.
//!
//! Sitemaps are matched with tolerant regexes rather than a strict XML parser,
//! so namespace prefixes, stray whitespace and broken trailing markup do not
//! lose the entries that are readable.

use regex::Regex;
use std::sync::LazyLock;

const SITEMAP_ENTRY_PATTERN: &str = r"(?is)<(?:[a-z0-9_-]+:)?sitemap\b[^>]*>(.*?)</(?:[a-z0-9_-]+:)?sitemap\s*>";
const LOC_PATTERN: &str = r"(?is)<(?:[a-z0-9_-]+:)?loc\b[^>]*>(.*?)</(?:[a-z0-9_-]+:)?loc\s*>";
const CDATA_PATTERN: &str = r"(?s)^<!\[CDATA\[(.*)\]\]>$";

fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

static SITEMAP_ENTRY_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(SITEMAP_ENTRY_PATTERN, "SITEMAP_ENTRY_RE"));
static LOC_RE: LazyLock<Regex> = LazyLock::new(|| compile_regex_unsafe(LOC_PATTERN, "LOC_RE"));
static CDATA_RE: LazyLock<Regex> = LazyLock::new(|| compile_regex_unsafe(CDATA_PATTERN, "CDATA_RE"));

/// True if the document lists child sitemaps (`<sitemap>` entries).
pub fn is_sitemap_index(xml: &str) -> bool {
    SITEMAP_ENTRY_RE.is_match(xml)
}

/// First `<loc>` of every `<sitemap>` entry, in document order.
pub fn sitemap_index_locs(xml: &str) -> Vec<String> {
    SITEMAP_ENTRY_RE
        .captures_iter(xml)
        .filter_map(|entry| {
            let body = entry.get(1)?.as_str();
            LOC_RE
                .captures(body)
                .and_then(|loc| loc.get(1))
                .map(|m| clean_loc(m.as_str()))
        })
        .filter(|loc| !loc.is_empty())
        .collect()
}

/// Every `<loc>` value, skipping empty ones and those ending in an image extension.
pub fn page_urls(xml: &str, image_extensions: &[String]) -> Vec<String> {
    LOC_RE
        .captures_iter(xml)
        .filter_map(|cap| cap.get(1))
        .map(|m| clean_loc(m.as_str()))
        .filter(|url| !url.is_empty())
        .filter(|url| {
            let lower = url.to_lowercase();
            !image_extensions
                .iter()
                .any(|ext| lower.ends_with(&ext.to_lowercase()))
        })
        .collect()
}

fn clean_loc(raw: &str) -> String {
    let trimmed = raw.trim();
    let unwrapped = CDATA_RE
        .captures(trimmed)
        .and_then(|cap| cap.get(1))
        .map_or(trimmed, |m| m.as_str());
    html_escape::decode_html_entities(unwrapped.trim()).into_owned()
}
