//! Orchestration helpers shared by the subcommands.
//!
//! This module provides URL normalization, progress logging and the summary
//! lines printed when a run completes.

pub mod logging;
pub mod statistics;
pub mod url;

// Re-export public API
pub use logging::log_progress;
pub use statistics::{print_header_summary, print_report_summary};
pub use url::{domain_from_address, normalize_base_url, validate_and_normalize_url};
