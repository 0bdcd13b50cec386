//! Header-analysis result types.

use serde::Serialize;

use crate::error_handling::{HeaderIssueType, IssueStats};

/// Outcome of fetching and analyzing one URL.
///
/// A failed fetch has no title or description, an empty structure, no issues
/// and the error message set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderResult {
    pub url: String,
    pub title: Option<String>,
    pub meta_description: Option<String>,
    /// Newline-joined `H<n>: text` lines
    pub header_structure: String,
    pub issues: Vec<String>,
    pub error: Option<String>,
}

impl HeaderResult {
    pub fn failed(url: impl Into<String>, error: impl Into<String>) -> Self {
        HeaderResult {
            url: url.into(),
            title: None,
            meta_description: None,
            header_structure: String::new(),
            issues: Vec::new(),
            error: Some(error.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Issues joined for a table cell, or "No issues".
    pub fn issues_summary(&self) -> String {
        if self.issues.is_empty() {
            "No issues".to_string()
        } else {
            self.issues.join("; ")
        }
    }
}

/// Totals shown when a header scan finishes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderScanSummary {
    pub total_pages: usize,
    pub pages_with_issues: usize,
    pub pages_without_issues: usize,
    pub missing_h1: usize,
    pub duplicate_h1: usize,
    pub hierarchy_jumps: usize,
    pub fetch_errors: usize,
    pub elapsed_seconds: f64,
}

impl HeaderScanSummary {
    pub fn from_stats(total_pages: usize, stats: &IssueStats, elapsed_seconds: f64) -> Self {
        HeaderScanSummary {
            total_pages,
            pages_with_issues: stats.pages_with_issues(),
            pages_without_issues: stats.pages_without_issues(),
            missing_h1: stats.get_count(HeaderIssueType::MissingH1),
            duplicate_h1: stats.get_count(HeaderIssueType::DuplicateH1),
            hierarchy_jumps: stats.get_count(HeaderIssueType::HierarchyJump),
            fetch_errors: stats.get_count(HeaderIssueType::FetchError),
            elapsed_seconds,
        }
    }
}

/// Everything a header scan produces, results in completion order.
#[derive(Debug, Clone, Serialize)]
pub struct HeaderScanReport {
    pub results: Vec<HeaderResult>,
    pub summary: HeaderScanSummary,
}
