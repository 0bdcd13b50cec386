//! Heading extraction and heading-issue rules.
//!
//! Everything here is synchronous and works on an already-downloaded body,
//! since `scraper::Html` is not `Send` and must not live across an await.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::config::{NO_META_DESCRIPTION_FOUND, NO_TITLE_FOUND};
use crate::utils::parse_selector_with_fallback;

const TITLE_SELECTOR_STR: &str = "title";
const META_DESCRIPTION_SELECTOR_STR: &str = r#"meta[name="description"]"#;
const HEADING_SELECTOR_STR: &str = "h1, h2, h3, h4, h5, h6";

/// Jump that is tolerated when the lower heading's text contains this phrase.
const HIERARCHY_JUMP_EXEMPT_TEXT: &str = "listen here";

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(TITLE_SELECTOR_STR, "title extraction"));
static META_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_with_fallback(META_DESCRIPTION_SELECTOR_STR, "meta description extraction")
});
static HEADING_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(HEADING_SELECTOR_STR, "heading extraction"));

/// One non-empty heading, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// 1 through 6
    pub level: u8,
    pub text: String,
}

impl Heading {
    pub fn new(level: u8, text: impl Into<String>) -> Self {
        Heading {
            level,
            text: text.into(),
        }
    }
}

/// What the header analyzer reads from one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOutline {
    pub title: String,
    pub meta_description: String,
    pub headings: Vec<Heading>,
}

/// Extracts title, meta description and headings from an HTML body.
///
/// A title element with no text, or a description tag with an empty or
/// missing `content`, gives the "not found" placeholder. Whitespace-only
/// values are kept and trim to "".
pub fn extract_outline(html: &str) -> PageOutline {
    let document = Html::parse_document(html);

    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|el| el.text().collect::<String>())
        .filter(|t| !t.is_empty())
        .map(|t| t.trim().to_string())
        .unwrap_or_else(|| NO_TITLE_FOUND.to_string());

    let meta_description = document
        .select(&META_DESCRIPTION_SELECTOR)
        .next()
        .and_then(|el| el.value().attr("content"))
        .filter(|c| !c.is_empty())
        .map(|c| c.trim().to_string())
        .unwrap_or_else(|| NO_META_DESCRIPTION_FOUND.to_string());

    let headings = document
        .select(&HEADING_SELECTOR)
        .filter_map(|el| {
            let level = heading_level(&el)?;
            let text = stripped_text(&el);
            (!text.is_empty()).then(|| Heading::new(level, text))
        })
        .collect();

    PageOutline {
        title,
        meta_description,
        headings,
    }
}

fn heading_level(el: &ElementRef) -> Option<u8> {
    let name = el.value().name();
    let digit = name.strip_prefix('h').or_else(|| name.strip_prefix('H'))?;
    digit.parse().ok().filter(|l| (1..=6).contains(l))
}

/// Text nodes trimmed individually and concatenated without separators.
fn stripped_text(el: &ElementRef) -> String {
    el.text().map(str::trim).filter(|t| !t.is_empty()).collect()
}

/// Applies the heading rules in order and returns the issue strings.
pub fn heading_issues(headings: &[Heading]) -> Vec<String> {
    let mut issues = Vec::new();
    let h1_count = headings.iter().filter(|h| h.level == 1).count();

    if h1_count == 0 {
        issues.push("Missing H1".to_string());
    } else if h1_count > 1 {
        issues.push(format!("Multiple H1s found ({h1_count})"));
    }

    if h1_count >= 1 && headings.first().is_some_and(|h| h.level != 1) {
        issues.push("First header is not H1".to_string());
    }

    for (idx, pair) in headings.windows(2).enumerate() {
        let (previous, current) = (&pair[0], &pair[1]);
        let exempt = previous.level == 1
            && current.level == 4
            && current.text.to_lowercase().contains(HIERARCHY_JUMP_EXEMPT_TEXT);
        if !exempt && current.level > previous.level + 1 {
            // Positions are 1-based; `current` sits at idx + 1
            issues.push(format!(
                "Hierarchy jump from H{} to H{} at position {}: '{}'",
                previous.level,
                current.level,
                idx + 2,
                current.text
            ));
        }
    }

    issues
}

/// Newline-joined `H<n>: text` lines.
pub fn format_structure(headings: &[Heading]) -> String {
    headings
        .iter()
        .map(|h| format!("H{}: {}", h.level, h.text))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jumps(issues: &[String]) -> Vec<&String> {
        issues.iter().filter(|i| i.contains("Hierarchy jump")).collect()
    }

    #[test]
    fn test_jump_reported_at_one_based_position() {
        let issues = heading_issues(&[Heading::new(1, "A"), Heading::new(3, "B")]);
        assert_eq!(
            jumps(&issues),
            vec!["Hierarchy jump from H1 to H3 at position 2: 'B'"]
        );
    }

    #[test]
    fn test_listen_here_carve_out() {
        let issues = heading_issues(&[Heading::new(1, "A"), Heading::new(4, "Listen Here now")]);
        assert!(jumps(&issues).is_empty());
        assert!(issues.is_empty());
    }

    #[test]
    fn test_carve_out_only_applies_to_h1_to_h4() {
        let issues = heading_issues(&[
            Heading::new(1, "A"),
            Heading::new(2, "B"),
            Heading::new(4, "listen here"),
        ]);
        assert_eq!(jumps(&issues).len(), 1);

        let issues = heading_issues(&[Heading::new(1, "A"), Heading::new(5, "listen here")]);
        assert_eq!(jumps(&issues).len(), 1);
    }

    #[test]
    fn test_first_header_not_h1() {
        let issues = heading_issues(&[Heading::new(2, "A"), Heading::new(1, "B")]);
        assert!(issues.contains(&"First header is not H1".to_string()));
        assert!(!issues.contains(&"Missing H1".to_string()));
    }

    #[test]
    fn test_missing_h1_exactly_once() {
        let issues = heading_issues(&[Heading::new(2, "A"), Heading::new(3, "B")]);
        assert_eq!(issues.iter().filter(|i| *i == "Missing H1").count(), 1);
        assert!(!issues.contains(&"First header is not H1".to_string()));
    }

    #[test]
    fn test_missing_h1_on_empty_page() {
        assert_eq!(heading_issues(&[]), vec!["Missing H1".to_string()]);
    }

    #[test]
    fn test_multiple_h1s() {
        let headings = vec![Heading::new(1, "A"), Heading::new(1, "B"), Heading::new(1, "C")];
        assert_eq!(heading_issues(&headings), vec!["Multiple H1s found (3)".to_string()]);
    }

    #[test]
    fn test_decreasing_levels_are_fine() {
        let headings = vec![
            Heading::new(1, "A"),
            Heading::new(2, "B"),
            Heading::new(3, "C"),
            Heading::new(2, "D"),
            Heading::new(1, "E"),
        ];
        assert_eq!(heading_issues(&headings), vec!["Multiple H1s found (2)".to_string()]);
    }

    #[test]
    fn test_extract_outline() {
        let html = r#"
            <html><head>
                <title>  Home  </title>
                <meta name="description" content=" Welcome ">
            </head><body>
                <h1>Main <span>title</span></h1>
                <h2>   </h2>
                <h3>Sub</h3>
            </body></html>
        "#;
        let outline = extract_outline(html);
        assert_eq!(outline.title, "Home");
        assert_eq!(outline.meta_description, "Welcome");
        assert_eq!(
            outline.headings,
            vec![Heading::new(1, "Maintitle"), Heading::new(3, "Sub")]
        );
        assert_eq!(format_structure(&outline.headings), "H1: Maintitle\nH3: Sub");
    }

    #[test]
    fn test_extract_outline_sentinels() {
        let outline = extract_outline("<html><body><p>No head</p></body></html>");
        assert_eq!(outline.title, NO_TITLE_FOUND);
        assert_eq!(outline.meta_description, NO_META_DESCRIPTION_FOUND);
        assert!(outline.headings.is_empty());
    }

    #[test]
    fn test_empty_title_and_description_use_sentinels() {
        let outline = extract_outline(
            r#"<html><head><title></title><meta name="description" content=""></head></html>"#,
        );
        assert_eq!(outline.title, NO_TITLE_FOUND);
        assert_eq!(outline.meta_description, NO_META_DESCRIPTION_FOUND);
    }

    #[test]
    fn test_whitespace_title_and_description_trim_to_empty() {
        let outline = extract_outline(
            r#"<html><head><title>   </title><meta name="description" content="  "></head></html>"#,
        );
        assert_eq!(outline.title, "");
        assert_eq!(outline.meta_description, "");
    }
}
