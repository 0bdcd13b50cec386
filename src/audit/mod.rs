//! SEO audit report.
//!
//! This module provides:
//! - The fixed metric table (labels, categories, expected values, sources)
//! - Column rules evaluated over a crawl export
//! - Live site checks (robots.txt, sitemap.xml, schema markup)
//! - Assembly of the report, detailed issues and status summary

mod builder;
mod metric;
pub mod rules;
mod site_checks;
mod types;

pub use builder::{build_report, schema_status, AuditInputs};
pub use metric::{Metric, CRAWLING, LINK_PROFILE, METADATA, PERFORMANCE, SITE_HEALTH};
pub use site_checks::{run_site_checks, url_is_available};
pub use types::{
    summarize, AuditReport, CurrentValue, DetailedIssues, IssueRecords, ReportRow, SchemaOutcome,
    SiteChecks, Status,
};

use crate::config::AuditConfig;
use crate::error_handling::InputError;

/// Validates the inputs, runs site checks if enabled, and builds the report.
///
/// `site` overrides the domain taken from the first crawled address.
pub async fn run_audit(
    inputs: &AuditInputs<'_>,
    site: Option<&str>,
    config: &AuditConfig,
) -> Result<AuditReport, InputError> {
    inputs.validate()?;
    let checks = if config.site_checks {
        let domain = site.map(str::to_string).or_else(|| inputs.domain());
        run_site_checks(domain.as_deref(), config).await
    } else {
        SiteChecks::default()
    };
    build_report(inputs, &checks, config)
}
