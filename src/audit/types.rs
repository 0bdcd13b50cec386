//! Audit report types.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// Outcome of one report row.
///
/// `Review` and `NotAvailable` are kept distinct and never folded into an
/// overall verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, EnumIter)]
pub enum Status {
    Pass,
    Fail,
    Review,
    #[serde(rename = "Not Available")]
    NotAvailable,
}

impl Status {
    /// Plain label used in CSV and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pass => "Pass",
            Status::Fail => "Fail",
            Status::Review => "Review",
            Status::NotAvailable => "Not Available",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Status::Pass => "✅",
            Status::Fail => "❌",
            Status::Review | Status::NotAvailable => "ℹ️",
        }
    }

    /// Symbol and label, for terminal output only.
    pub fn display_label(&self) -> String {
        format!("{} {}", self.symbol(), self.as_str())
    }

    /// Fail when `count > 0`, else Pass.
    pub fn fail_if_any(count: usize) -> Self {
        if count > 0 {
            Status::Fail
        } else {
            Status::Pass
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A row's current value: a count, or free text such as "N/A".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CurrentValue {
    Count(usize),
    Text(String),
}

impl CurrentValue {
    pub fn text(value: impl Into<String>) -> Self {
        CurrentValue::Text(value.into())
    }
}

impl fmt::Display for CurrentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrentValue::Count(n) => write!(f, "{n}"),
            CurrentValue::Text(s) => f.write_str(s),
        }
    }
}

/// One line of the audit report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Parameters")]
    pub parameter: String,
    #[serde(rename = "Current Value")]
    pub current_value: CurrentValue,
    #[serde(rename = "Expected Value")]
    pub expected_value: String,
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Status")]
    pub status: Status,
}

/// A row subset passed through for review, one JSON object per crawl row.
pub type IssueRecords = Vec<Map<String, Value>>;

/// Rows behind the failing metrics. Each list is `None` when there is nothing to show.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DetailedIssues {
    pub duplicate_titles: Option<IssueRecords>,
    pub duplicate_content: Option<IssueRecords>,
    pub h1_issues: Option<IssueRecords>,
    pub description_issues: Option<IssueRecords>,
    pub orphan_pages: Option<IssueRecords>,
    pub images_missing_alt_text: Option<IssueRecords>,
    pub schema_opportunities: Option<Vec<String>>,
}

/// Result of the schema probe as it feeds the report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SchemaOutcome {
    /// Site checks were not requested
    #[default]
    Skipped,
    /// No site root could be derived from the crawl
    NoDomain,
    /// Distinct type names found; may be empty
    Found(BTreeSet<String>),
    /// The probe itself could not run
    Failed(String),
}

/// Live checks against the audited site.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SiteChecks {
    pub robots_available: bool,
    pub sitemap_available: bool,
    pub schema: SchemaOutcome,
}

/// The full audit response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditReport {
    pub domain: Option<String>,
    pub report: Vec<ReportRow>,
    pub detailed_issues: DetailedIssues,
    /// Row count per status label; statuses with no rows are omitted
    pub summary: BTreeMap<String, usize>,
}

impl AuditReport {
    pub fn new(domain: Option<String>, report: Vec<ReportRow>, detailed_issues: DetailedIssues) -> Self {
        let summary = summarize(&report);
        AuditReport {
            domain,
            report,
            detailed_issues,
            summary,
        }
    }

    pub fn row(&self, parameter: &str) -> Option<&ReportRow> {
        self.report.iter().find(|r| r.parameter == parameter)
    }

    pub fn count(&self, status: Status) -> usize {
        self.summary.get(status.as_str()).copied().unwrap_or(0)
    }
}

/// Counts rows per status label.
pub fn summarize(rows: &[ReportRow]) -> BTreeMap<String, usize> {
    Status::iter()
        .map(|status| {
            let count = rows.iter().filter(|r| r.status == status).count();
            (status.as_str().to_string(), count)
        })
        .filter(|(_, count)| *count > 0)
        .collect()
}
