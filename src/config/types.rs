//! Configuration types.
//!
//! Library configuration structs carry every table and limit explicitly.
//! They can be built programmatically without any CLI dependencies; the
//! `Default` implementations reproduce the built-in behavior.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

use crate::config::constants::*;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Schema-markup probe settings.
#[derive(Debug, Clone)]
pub struct SchemaConfig {
    /// Path suffixes joined onto the site root, in probe order
    pub paths: Vec<String>,
    /// Concurrent probe requests
    pub workers: usize,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Added to `request_timeout` to form the per-task deadline
    pub task_grace: Duration,
    /// (display label, schema type) pairs reported as implementation opportunities
    pub checklist: Vec<(String, String)>,
    pub user_agent: String,
    pub accept_invalid_certs: bool,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            paths: SCHEMA_PROBE_PATHS.iter().map(|p| p.to_string()).collect(),
            workers: DEFAULT_SCHEMA_WORKERS,
            request_timeout: SCHEMA_REQUEST_TIMEOUT,
            task_grace: SCHEMA_TASK_GRACE,
            checklist: SCHEMA_CHECKLIST
                .iter()
                .map(|(label, ty)| (label.to_string(), ty.to_string()))
                .collect(),
            user_agent: DEFAULT_BROWSER_USER_AGENT.to_string(),
            accept_invalid_certs: false,
        }
    }
}

/// Report-builder settings.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    pub schema: SchemaConfig,
    /// Run robots.txt / sitemap.xml presence checks and the schema probe
    pub site_checks: bool,
    /// Value reported for "Img alt tag" when no alt-text table is supplied
    pub missing_alt_text_default: usize,
    /// User-Agent for presence checks
    pub user_agent: String,
    pub accept_invalid_certs: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            schema: SchemaConfig::default(),
            site_checks: true,
            missing_alt_text_default: 0,
            user_agent: DEFAULT_BROWSER_USER_AGENT.to_string(),
            accept_invalid_certs: false,
        }
    }
}

/// Sitemap discovery settings.
#[derive(Debug, Clone)]
pub struct SitemapConfig {
    /// Candidate sitemap paths, tried in order against the site root
    pub paths: Vec<String>,
    pub timeout: Duration,
    pub user_agent: String,
    pub accept_invalid_certs: bool,
    /// `<loc>` suffixes that are skipped as images
    pub image_extensions: Vec<String>,
    /// Maximum sitemap-index nesting
    pub max_depth: usize,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            paths: SITEMAP_PATHS.iter().map(|p| p.to_string()).collect(),
            timeout: SITEMAP_TIMEOUT,
            user_agent: DEFAULT_SITEMAP_USER_AGENT.to_string(),
            accept_invalid_certs: true,
            image_extensions: SITEMAP_IMAGE_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
            max_depth: SITEMAP_MAX_DEPTH,
        }
    }
}

/// Ordered lookup tables for URL classification. First match wins within each table.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// (language, URL regexes) checked before anything else
    pub hostname_overrides: Vec<(String, Vec<String>)>,
    /// (hostname suffix, language)
    pub country_tlds: Vec<(String, String)>,
    /// (language, path segment tokens)
    pub language_tokens: Vec<(String, Vec<String>)>,
    /// (category, path segment tokens)
    pub category_tokens: Vec<(String, Vec<String>)>,
    /// (language, URL regexes) used as a last resort
    pub product_patterns: Vec<(String, Vec<String>)>,
    pub default_language: String,
}

fn owned_table(table: &[(&str, &[&str])]) -> Vec<(String, Vec<String>)> {
    table
        .iter()
        .map(|(key, values)| {
            (
                key.to_string(),
                values.iter().map(|v| v.to_string()).collect(),
            )
        })
        .collect()
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            hostname_overrides: owned_table(HOSTNAME_LANGUAGE_OVERRIDES),
            country_tlds: COUNTRY_TLD_LANGUAGES
                .iter()
                .map(|(tld, lang)| (tld.to_string(), lang.to_string()))
                .collect(),
            language_tokens: owned_table(LANGUAGE_PATH_TOKENS),
            category_tokens: owned_table(CATEGORY_PATH_TOKENS),
            product_patterns: owned_table(PRODUCT_LANGUAGE_PATTERNS),
            default_language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

/// Header-structure fetcher settings.
#[derive(Debug, Clone)]
pub struct HeaderScanConfig {
    /// Concurrent fetches (clamped to 1..=20 by `effective_workers`)
    pub workers: usize,
    /// Per-request timeout
    pub timeout: Duration,
    pub user_agent: String,
    /// Analyze only the first `limit` URLs (0 analyzes all)
    pub limit: usize,
    pub accept_invalid_certs: bool,
}

impl HeaderScanConfig {
    /// Worker count bounded to the supported range.
    pub fn effective_workers(&self) -> usize {
        self.workers.clamp(MIN_HEADER_WORKERS, MAX_HEADER_WORKERS)
    }
}

impl Default for HeaderScanConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_HEADER_WORKERS,
            timeout: HEADER_FETCH_TIMEOUT,
            user_agent: DEFAULT_HEADER_USER_AGENT.to_string(),
            limit: 0,
            accept_invalid_certs: false,
        }
    }
}

/// HTTP API settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    /// Directory holding the files read by `/analyze/default`
    pub data_dir: PathBuf,
    pub crawl_file: String,
    pub alt_text_file: String,
    pub orphan_file: String,
    /// Report-builder settings used for every request
    pub audit: AuditConfig,
}

impl ServerConfig {
    pub fn crawl_path(&self) -> PathBuf {
        self.data_dir.join(&self.crawl_file)
    }

    pub fn alt_text_path(&self) -> PathBuf {
        self.data_dir.join(&self.alt_text_file)
    }

    pub fn orphan_path(&self) -> PathBuf {
        self.data_dir.join(&self.orphan_file)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], DEFAULT_SERVER_PORT)),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            crawl_file: DEFAULT_CRAWL_FILE.to_string(),
            alt_text_file: DEFAULT_ALT_TEXT_FILE.to_string(),
            orphan_file: DEFAULT_ORPHAN_FILE.to_string(),
            audit: AuditConfig {
                site_checks: false,
                ..Default::default()
            },
        }
    }
}
