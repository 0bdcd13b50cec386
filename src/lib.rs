//! seo_audit library: SEO audit reports from crawl exports
//!
//! This library builds a rule-based audit report from a crawl export (plus
//! optional alt-text and orphan-page tables), probes the audited site for
//! robots.txt, sitemap.xml and schema markup, classifies sitemap URLs by
//! language and category, and analyzes the heading structure of live pages.
//!
//! # Example
//!
//! ```no_run
//! use seo_audit::audit::{run_audit, AuditInputs};
//! use seo_audit::config::AuditConfig;
//! use seo_audit::input::Table;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let crawl = Table::from_path(std::path::Path::new("internal_html.csv"))?;
//! let report = run_audit(&AuditInputs::new(&crawl), None, &AuditConfig::default()).await?;
//! for row in &report.report {
//!     println!("{}: {} ({})", row.parameter, row.current_value, row.status);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Network-facing functions require a Tokio runtime.

pub mod app;
pub mod audit;
pub mod config;
pub mod error_handling;
pub mod export;
pub mod headers;
pub mod initialization;
pub mod input;
pub mod pool;
pub mod schema;
pub mod server;
pub mod sitemap;
mod utils;

// Re-export public API
pub use audit::{build_report, run_audit, AuditInputs, AuditReport, Status};
pub use config::{AuditConfig, HeaderScanConfig, LogFormat, LogLevel, ServerConfig};
pub use headers::{run_header_scan, HeaderResult, HeaderScanReport};
pub use input::{read_url_list, read_url_list_from_path, Table};
pub use sitemap::{run_sitemap_analysis, SitemapAnalysis};
