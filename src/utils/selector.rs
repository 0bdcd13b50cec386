//! CSS selector parsing.

use scraper::Selector;

/// Selector that matches no element.
const MATCH_NOTHING: &str = "*:not(*)";

/// Parses `selector_str`, logging and falling back to a match-nothing selector on failure.
///
/// `context` names the caller in the log line (e.g. "heading extraction").
/// A bad selector therefore degrades to "no elements found" instead of a panic.
pub fn parse_selector_with_fallback(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        log::error!("Failed to parse CSS selector '{selector_str}' in {context}: {e}");
        #[allow(clippy::expect_used)]
        Selector::parse(MATCH_NOTHING).expect("match-nothing selector is valid")
    })
}
