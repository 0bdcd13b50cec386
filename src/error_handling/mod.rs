//! Error handling and header-analysis statistics.
//!
//! This module provides:
//! - Error types for initialization, malformed input and schema probing
//! - Fetch error descriptions stored on per-URL results
//! - Issue counters aggregated over a header-analysis run
//!
//! Only malformed top-level input is raised to the caller. Missing columns,
//! missing optional files and per-URL network failures are downgraded where
//! they happen.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{describe_fetch_error, describe_status};
pub use stats::IssueStats;
pub use types::{HeaderIssueType, InitializationError, InputError, SchemaError};
