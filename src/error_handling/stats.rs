//! Header-analysis statistics.
//!
//! Counters are owned by the single collecting loop that drains fetch
//! results, so they are plain integers rather than atomics.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::HeaderIssueType;

/// Per-category issue counts plus page-level totals.
///
/// All issue types are initialized to zero on creation.
#[derive(Debug, Clone)]
pub struct IssueStats {
    counts: HashMap<HeaderIssueType, usize>,
    pages_with_issues: usize,
    pages_without_issues: usize,
}

impl IssueStats {
    pub fn new() -> Self {
        let mut counts = HashMap::new();
        for issue_type in HeaderIssueType::iter() {
            counts.insert(issue_type, 0);
        }
        IssueStats {
            counts,
            pages_with_issues: 0,
            pages_without_issues: 0,
        }
    }

    /// Records one page outcome.
    ///
    /// A fetch error counts the page as having issues and ignores `issues`.
    /// Otherwise each issue string is matched against every category marker,
    /// so one issue can increment more than one category.
    pub fn record_page(&mut self, issues: &[String], error: Option<&str>) {
        if error.is_some() {
            self.increment(HeaderIssueType::FetchError);
            self.pages_with_issues += 1;
            return;
        }

        if issues.is_empty() {
            self.pages_without_issues += 1;
            return;
        }

        self.pages_with_issues += 1;
        for issue in issues {
            for issue_type in HeaderIssueType::iter() {
                if let Some(marker) = issue_type.marker() {
                    if issue.contains(marker) {
                        self.increment(issue_type);
                    }
                }
            }
        }
    }

    pub fn increment(&mut self, issue_type: HeaderIssueType) {
        *self.counts.entry(issue_type).or_insert(0) += 1;
    }

    pub fn get_count(&self, issue_type: HeaderIssueType) -> usize {
        self.counts.get(&issue_type).copied().unwrap_or(0)
    }

    pub fn pages_with_issues(&self) -> usize {
        self.pages_with_issues
    }

    pub fn pages_without_issues(&self) -> usize {
        self.pages_without_issues
    }
}

impl Default for IssueStats {
    fn default() -> Self {
        Self::new()
    }
}
