//! Utility functions.
//!
//! This module provides CSS selector parsing shared by the HTML extractors.

mod selector;

pub use selector::parse_selector_with_fallback;
