//! Report assembly from the input tables and site checks.

use strum::IntoEnumIterator;

use crate::app::domain_from_address;
use crate::config::{AuditConfig, NOT_AVAILABLE_VALUE};
use crate::error_handling::InputError;
use crate::input::Table;
use crate::schema::schema_opportunities;

use super::metric::Metric;
use super::rules::{self, ColumnQuality};
use super::types::{
    AuditReport, CurrentValue, DetailedIssues, IssueRecords, ReportRow, SchemaOutcome, SiteChecks,
    Status,
};

const AVAILABLE: &str = "Available";

/// The tables one audit reads. Only the crawl table is required.
#[derive(Debug, Clone, Copy)]
pub struct AuditInputs<'a> {
    pub crawl: &'a Table,
    pub alt_text: Option<&'a Table>,
    pub orphans: Option<&'a Table>,
}

impl<'a> AuditInputs<'a> {
    pub fn new(crawl: &'a Table) -> Self {
        AuditInputs {
            crawl,
            alt_text: None,
            orphans: None,
        }
    }

    /// Fails if the crawl table has no rows or no `Address` column.
    pub fn validate(&self) -> Result<(), InputError> {
        if !self.crawl.has_column(rules::ADDRESS) {
            if self.crawl.headers().is_empty() {
                return Err(InputError::EmptyCrawl);
            }
            return Err(InputError::MissingColumn(rules::ADDRESS.to_string()));
        }
        if self.crawl.is_empty() {
            return Err(InputError::EmptyCrawl);
        }
        Ok(())
    }

    /// Host of the first crawled address.
    pub fn domain(&self) -> Option<String> {
        self.crawl
            .cell(0, rules::ADDRESS)
            .and_then(domain_from_address)
    }
}

/// Status for a number of distinct schema types: 5+ Pass, 2 to 4 Review, else Fail.
pub fn schema_status(distinct_types: usize) -> Status {
    if distinct_types >= 5 {
        Status::Pass
    } else if distinct_types >= 2 {
        Status::Review
    } else {
        Status::Fail
    }
}

fn row(metric: Metric, current_value: CurrentValue, status: Status) -> ReportRow {
    ReportRow {
        category: metric.category().to_string(),
        parameter: metric.label().to_string(),
        current_value,
        expected_value: metric.expected().to_string(),
        source: metric.source().to_string(),
        status,
    }
}

fn not_available(metric: Metric) -> ReportRow {
    row(metric, CurrentValue::text(NOT_AVAILABLE_VALUE), Status::NotAvailable)
}

fn count_row(metric: Metric, count: Option<usize>) -> ReportRow {
    match count {
        Some(n) => row(metric, CurrentValue::Count(n), Status::fail_if_any(n)),
        None => not_available(metric),
    }
}

fn quality_row(metric: Metric, quality: Option<&ColumnQuality>) -> ReportRow {
    match quality {
        Some(q) => row(
            metric,
            CurrentValue::Text(q.summary()),
            if q.has_issues() { Status::Fail } else { Status::Pass },
        ),
        None => not_available(metric),
    }
}

fn presence_row(metric: Metric, available: bool) -> ReportRow {
    if available {
        row(metric, CurrentValue::text(AVAILABLE), Status::Pass)
    } else {
        not_available(metric)
    }
}

fn schema_row(outcome: &SchemaOutcome) -> ReportRow {
    let metric = Metric::SchemaMarkup;
    match outcome {
        SchemaOutcome::Skipped => not_available(metric),
        SchemaOutcome::NoDomain => row(
            metric,
            CurrentValue::text("Cannot extract domain from data"),
            Status::NotAvailable,
        ),
        SchemaOutcome::Failed(message) => row(
            metric,
            CurrentValue::Text(format!("Error checking schemas: {message}")),
            Status::NotAvailable,
        ),
        SchemaOutcome::Found(types) if types.is_empty() => row(
            metric,
            CurrentValue::text("No schema markup detected"),
            Status::Fail,
        ),
        SchemaOutcome::Found(types) => {
            let names: Vec<&str> = types.iter().map(String::as_str).collect();
            row(
                metric,
                CurrentValue::Text(format!("Found {} types: {}", names.len(), names.join(", "))),
                schema_status(names.len()),
            )
        }
    }
}

/// Rows of `table` restricted to `columns`, or `None` if there are none.
fn records(table: &Table, rows: &[usize], columns: &[&str]) -> Option<IssueRecords> {
    let out: IssueRecords = rows.iter().map(|&i| table.record(i, columns)).collect();
    (!out.is_empty()).then_some(out)
}

/// Keeps only rows whose address looks like a page.
fn page_rows(table: &Table, rows: &[usize]) -> Vec<usize> {
    rows.iter()
        .copied()
        .filter(|&i| table.cell(i, rules::ADDRESS).is_some_and(rules::is_valid_page_url))
        .collect()
}

fn passthrough(table: Option<&Table>) -> Option<IssueRecords> {
    table.filter(|t| !t.is_empty()).map(Table::records)
}

/// Builds the report. Pure: all network results arrive through `checks`.
///
/// Only an empty crawl table or one without `Address` fails; every other
/// missing column turns its row into "N/A" / Not Available.
pub fn build_report(
    inputs: &AuditInputs<'_>,
    checks: &SiteChecks,
    config: &AuditConfig,
) -> Result<AuditReport, InputError> {
    inputs.validate()?;
    let crawl = inputs.crawl;

    let indexability = rules::indexability_counts(crawl);
    let h1 = rules::column_quality(crawl, rules::H1);
    let title = rules::title_quality(crawl, rules::TITLE);
    let description = rules::column_quality(crawl, rules::META_DESCRIPTION);
    let duplicate_content = rules::duplicate_content_rows(crawl);
    let orphan_count = inputs.orphans.map_or(0, Table::len);
    let alt_text_count = inputs
        .alt_text
        .map_or(config.missing_alt_text_default, Table::len);

    let report = Metric::iter()
        .map(|metric| match metric {
            m if m.is_placeholder() => not_available(m),
            Metric::IndexedPages => match indexability {
                Some((indexed, _)) => row(metric, CurrentValue::Count(indexed), Status::Review),
                None => not_available(metric),
            },
            Metric::NonIndexedPages => match indexability {
                Some((_, non_indexed)) => row(
                    metric,
                    CurrentValue::Count(non_indexed),
                    if non_indexed > 0 { Status::Review } else { Status::Pass },
                ),
                None => not_available(metric),
            },
            Metric::RobotsTxt => presence_row(metric, checks.robots_available),
            Metric::SitemapFile => presence_row(metric, checks.sitemap_available),
            Metric::BrokenInternalLinks => count_row(metric, rules::broken_internal_links(crawl)),
            Metric::OrphanPages => count_row(metric, Some(orphan_count)),
            Metric::CanonicalErrors => count_row(metric, rules::canonical_errors(crawl)),
            Metric::DuplicateContent => {
                count_row(metric, duplicate_content.as_ref().map(Vec::len))
            }
            Metric::ImgAltTag => count_row(metric, Some(alt_text_count)),
            Metric::DuplicateMissingH1 => quality_row(metric, h1.as_ref()),
            Metric::DuplicateMissingTitle => quality_row(metric, title.as_ref()),
            Metric::DuplicateMissingDescription => quality_row(metric, description.as_ref()),
            Metric::SchemaMarkup => schema_row(&checks.schema),
            other => not_available(other),
        })
        .collect();

    let detailed_issues = DetailedIssues {
        duplicate_titles: title.as_ref().and_then(|q| {
            records(
                crawl,
                &q.duplicate_rows,
                &[rules::ADDRESS, rules::TITLE, rules::TITLE_LENGTH],
            )
        }),
        duplicate_content: duplicate_content.as_ref().and_then(|rows| {
            records(
                crawl,
                rows,
                &[rules::ADDRESS, rules::WORD_COUNT, rules::SENTENCE_COUNT],
            )
        }),
        h1_issues: h1.as_ref().and_then(|q| {
            records(crawl, &page_rows(crawl, &q.flagged_rows), &[rules::ADDRESS, rules::H1])
        }),
        description_issues: description.as_ref().and_then(|q| {
            records(
                crawl,
                &page_rows(crawl, &q.flagged_rows),
                &[rules::ADDRESS, rules::META_DESCRIPTION],
            )
        }),
        orphan_pages: passthrough(inputs.orphans),
        images_missing_alt_text: passthrough(inputs.alt_text),
        schema_opportunities: match &checks.schema {
            SchemaOutcome::Found(types) => {
                let missing = schema_opportunities(types, &config.schema.checklist);
                (!missing.is_empty()).then_some(missing)
            }
            _ => None,
        },
    };

    Ok(AuditReport::new(inputs.domain(), report, detailed_issues))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn table(csv: &str) -> Table {
        Table::from_bytes(csv.as_bytes()).expect("Test CSV should parse")
    }

    const CRAWL: &str = "\
Address,Status Code,Canonical Link Element 1,Title 1,Title 1 Length,H1-1,Meta Description 1
https://example.com/,200,https://example.com/,Home,4,Welcome,Home page
https://example.com/a,404,https://example.com/a,Same,4,A,Desc A
https://example.com/b,200,https://example.com/,Same,4,,Desc B
";

    fn build(crawl: &Table, alt: Option<&Table>) -> AuditReport {
        let inputs = AuditInputs {
            crawl,
            alt_text: alt,
            orphans: None,
        };
        build_report(&inputs, &SiteChecks::default(), &AuditConfig::default())
            .expect("Report should build")
    }

    #[test]
    fn test_end_to_end_rows() {
        let crawl = table(CRAWL);
        let alt = table("Source,Destination\np,1.png\np,2.png\np,3.png\np,4.png\np,5.png\n");
        let report = build(&crawl, Some(&alt));

        assert_eq!(report.report.len(), 28);
        assert_eq!(report.domain.as_deref(), Some("example.com"));

        let title = report.row("Duplicate & missing meta title").unwrap();
        assert_eq!(title.status, Status::Fail);
        assert_eq!(title.current_value, CurrentValue::text("Missing: 0, Duplicate: 2"));

        let h1 = report.row("Duplicate & missing H1").unwrap();
        assert_eq!(h1.status, Status::Fail);
        assert_eq!(h1.current_value, CurrentValue::text("Missing: 1, Duplicate: 0"));

        let alt_row = report.row("Img alt tag").unwrap();
        assert_eq!(alt_row.current_value, CurrentValue::Count(5));
        assert_eq!(alt_row.status, Status::Fail);

        let broken = report.row("Broken internal links (404)").unwrap();
        assert_eq!(broken.current_value, CurrentValue::Count(1));
        assert_eq!(broken.status, Status::Fail);

        let canonical = report.row("Canonical Errors").unwrap();
        assert_eq!(canonical.current_value, CurrentValue::Count(1));
    }

    #[test]
    fn test_missing_optional_columns_degrade() {
        let crawl = table("Address\nhttps://example.com/\n");
        let report = build(&crawl, None);
        for parameter in [
            "Broken internal links (404)",
            "Canonical Errors",
            "Duplicate & missing H1",
            "Duplicate content",
            "Indexed pages",
            "Non indexed pages",
        ] {
            let r = report.row(parameter).unwrap();
            assert_eq!(r.status, Status::NotAvailable, "{parameter}");
            assert_eq!(r.current_value, CurrentValue::text("N/A"));
        }
        // No alt-text table falls back to the configured default
        assert_eq!(report.row("Img alt tag").unwrap().current_value, CurrentValue::Count(0));
    }

    #[test]
    fn test_alt_text_default_is_configurable() {
        let crawl = table("Address\nhttps://example.com/\n");
        let config = AuditConfig {
            missing_alt_text_default: 9,
            ..Default::default()
        };
        let report = build_report(&AuditInputs::new(&crawl), &SiteChecks::default(), &config).unwrap();
        let r = report.row("Img alt tag").unwrap();
        assert_eq!(r.current_value, CurrentValue::Count(9));
        assert_eq!(r.status, Status::Fail);
    }

    #[test]
    fn test_empty_crawl_is_an_error() {
        let crawl = table("Address,Title 1\n");
        let err = build_report(&AuditInputs::new(&crawl), &SiteChecks::default(), &AuditConfig::default())
            .unwrap_err();
        assert!(matches!(err, InputError::EmptyCrawl));

        let crawl = table("");
        let err = build_report(&AuditInputs::new(&crawl), &SiteChecks::default(), &AuditConfig::default())
            .unwrap_err();
        assert!(matches!(err, InputError::EmptyCrawl));
    }

    #[test]
    fn test_missing_address_is_an_error() {
        let crawl = table("URL,Title 1\nhttps://example.com/,Home\n");
        let err = build_report(&AuditInputs::new(&crawl), &SiteChecks::default(), &AuditConfig::default())
            .unwrap_err();
        assert!(matches!(err, InputError::MissingColumn(_)));
    }

    #[test]
    fn test_indexability_rows_are_review_tier() {
        let crawl = table("Address,Indexability,Indexability Status\nhttps://a.com/,Indexable,\nhttps://a.com/x,Non-Indexable,noindex\n");
        let report = build(&crawl, None);
        let indexed = report.row("Indexed pages").unwrap();
        assert_eq!(indexed.current_value, CurrentValue::Count(1));
        assert_eq!(indexed.status, Status::Review);
        assert_eq!(report.row("Non indexed pages").unwrap().status, Status::Review);
    }

    #[test]
    fn test_schema_status_boundaries() {
        assert_eq!(schema_status(0), Status::Fail);
        assert_eq!(schema_status(1), Status::Fail);
        assert_eq!(schema_status(2), Status::Review);
        assert_eq!(schema_status(4), Status::Review);
        assert_eq!(schema_status(5), Status::Pass);
    }

    #[test]
    fn test_schema_row_and_opportunities() {
        let crawl = table(CRAWL);
        let types: BTreeSet<String> = ["Organization", "WebPage"].iter().map(|s| s.to_string()).collect();
        let checks = SiteChecks {
            robots_available: true,
            sitemap_available: false,
            schema: SchemaOutcome::Found(types),
        };
        let report = build_report(&AuditInputs::new(&crawl), &checks, &AuditConfig::default()).unwrap();

        let schema = report.row("Schema Markup").unwrap();
        assert_eq!(
            schema.current_value,
            CurrentValue::text("Found 2 types: Organization, WebPage")
        );
        assert_eq!(schema.status, Status::Review);

        let opportunities = report.detailed_issues.schema_opportunities.as_ref().unwrap();
        assert_eq!(opportunities.len(), 17);
        assert!(!opportunities.contains(&"Organization".to_string()));

        assert_eq!(report.row("Robots.txt file optimization").unwrap().status, Status::Pass);
        let sitemap = report.row("Sitemap file optimization").unwrap();
        assert_eq!(sitemap.status, Status::NotAvailable);
        assert_eq!(sitemap.current_value, CurrentValue::text("N/A"));
    }

    #[test]
    fn test_schema_outcomes_without_types() {
        assert_eq!(schema_row(&SchemaOutcome::Found(BTreeSet::new())).status, Status::Fail);
        let failed = schema_row(&SchemaOutcome::Failed("boom".into()));
        assert_eq!(failed.status, Status::NotAvailable);
        assert_eq!(failed.current_value, CurrentValue::text("Error checking schemas: boom"));
        assert_eq!(
            schema_row(&SchemaOutcome::NoDomain).current_value,
            CurrentValue::text("Cannot extract domain from data")
        );
    }

    #[test]
    fn test_detailed_issues() {
        let crawl = table(
            "Address,Title 1,Title 1 Length,H1-1,Meta Description 1\n\
             https://a.com/,Same,4,,D\n\
             https://a.com/x,Same,4,H,D\n\
             https://a.com/logo.png,Other,5,,E\n",
        );
        let report = build(&crawl, None);
        let issues = &report.detailed_issues;

        let titles = issues.duplicate_titles.as_ref().unwrap();
        assert_eq!(titles.len(), 2);
        assert_eq!(titles[0]["Title 1 Length"], "4");

        // The image row is missing its H1 but is not a page
        let h1 = issues.h1_issues.as_ref().unwrap();
        assert_eq!(h1.len(), 1);
        assert_eq!(h1[0]["Address"], "https://a.com/");

        let descriptions = issues.description_issues.as_ref().unwrap();
        assert_eq!(descriptions.len(), 2);

        assert!(issues.duplicate_content.is_none());
        assert!(issues.orphan_pages.is_none());
        assert!(issues.schema_opportunities.is_none());
    }

    #[test]
    fn test_summary_counts_every_row() {
        let crawl = table(CRAWL);
        let report = build(&crawl, None);
        let total: usize = report.summary.values().sum();
        assert_eq!(total, 28);
        assert_eq!(report.count(Status::NotAvailable), 15 + 2 + 2 + 1 + 1);
    }
}
