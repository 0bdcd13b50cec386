//! Export functionality for audit data.
//!
//! This module writes the report table, classified sitemap URLs and
//! header-analysis results as CSV.

mod csv;

pub use self::csv::{
    export_classified_urls_csv, export_header_results_csv, export_report_csv,
    write_classified_urls_csv, write_header_results_csv, write_report_csv,
};

use chrono::Local;
use std::path::PathBuf;

/// `<prefix>_YYYYmmdd_HHMMSS.csv` in local time.
pub fn timestamped_filename(prefix: &str) -> PathBuf {
    PathBuf::from(format!("{prefix}_{}.csv", Local::now().format("%Y%m%d_%H%M%S")))
}
