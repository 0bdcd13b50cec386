//! Summary lines logged when a run completes.

use log::info;
use strum::IntoEnumIterator;

use crate::audit::{AuditReport, Status};
use crate::headers::HeaderScanSummary;

/// Logs the header-scan totals.
pub fn print_header_summary(summary: &HeaderScanSummary) {
    info!(
        "✅ Analyzed {} URL{} in {:.1}s",
        summary.total_pages,
        if summary.total_pages == 1 { "" } else { "s" },
        summary.elapsed_seconds
    );
    info!(
        "Pages with issues: {}, without issues: {}",
        summary.pages_with_issues, summary.pages_without_issues
    );

    let counts = [
        ("Missing H1", summary.missing_h1),
        ("Duplicate H1", summary.duplicate_h1),
        ("Hierarchy jumps", summary.hierarchy_jumps),
        ("Fetch errors", summary.fetch_errors),
    ];
    let total: usize = counts.iter().map(|(_, n)| n).sum();
    if total > 0 {
        info!("Issue Counts ({total} total):");
        for (label, count) in counts {
            if count > 0 {
                info!("   {label}: {count}");
            }
        }
    }
}

/// Logs the number of report rows per status.
pub fn print_report_summary(report: &AuditReport) {
    info!(
        "Audit of {} complete: {} parameters",
        report.domain.as_deref().unwrap_or("unknown domain"),
        report.report.len()
    );
    for status in Status::iter() {
        let count = report.count(status);
        if count > 0 {
            info!("   {}: {count}", status.display_label());
        }
    }
}
