//! Concurrent header-structure analysis.
//!
//! Fetches a list of pages through the bounded pool, extracts their heading
//! outline and applies the heading rules. Aggregate counters live in the
//! collecting loop only.

mod analyze;
mod fetch;
mod types;

pub use analyze::{extract_outline, format_structure, heading_issues, Heading, PageOutline};
pub use fetch::fetch_page_headers;
pub use types::{HeaderResult, HeaderScanReport, HeaderScanSummary};

use std::sync::Arc;
use std::time::Instant;

use log::info;

use crate::app::log_progress;
use crate::config::HeaderScanConfig;
use crate::error_handling::{InitializationError, IssueStats};
use crate::initialization::init_client;
use crate::pool::{run_bounded, ProgressCallback};

/// Fetches and analyzes every URL (or the first `config.limit`).
///
/// Individual failures are recorded on their result and counted as fetch
/// errors; only building the HTTP client can fail the whole scan.
pub async fn run_header_scan(
    mut urls: Vec<String>,
    config: &HeaderScanConfig,
    progress: ProgressCallback,
) -> Result<HeaderScanReport, InitializationError> {
    let start_time = Instant::now();
    if config.limit > 0 {
        urls.truncate(config.limit);
    }
    let total = urls.len();
    let workers = config.effective_workers();

    let client = init_client(&config.user_agent, config.timeout, config.accept_invalid_certs)?;
    info!("Analyzing {total} URLs with {workers} workers");

    let on_progress: ProgressCallback = Some(Arc::new(move |completed, total| {
        log_progress(start_time, completed, total);
        if let Some(callback) = &progress {
            callback(completed, total);
        }
    }));

    let mut stats = IssueStats::new();
    let mut results = Vec::with_capacity(total);
    run_bounded(
        urls,
        workers,
        move |url: String| {
            let client = client.clone();
            async move { fetch_page_headers(&client, &url).await }
        },
        |url: String| HeaderResult::failed(url, "Analysis failed unexpectedly"),
        &on_progress,
        |result: HeaderResult| {
            stats.record_page(&result.issues, result.error.as_deref());
            results.push(result);
        },
    )
    .await;

    let summary =
        HeaderScanSummary::from_stats(total, &stats, start_time.elapsed().as_secs_f64());
    Ok(HeaderScanReport { results, summary })
}
