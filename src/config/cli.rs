//! Command-line options.
//!
//! Parsed by `clap` in the binary and converted into the library
//! configuration structs. Defaults mirror the `Default` implementations in
//! `config::types`.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::config::constants::*;
use crate::config::types::{
    AuditConfig, HeaderScanConfig, LogFormat, LogLevel, ServerConfig,
};

/// Top-level command line.
///
/// # Examples
///
/// ```bash
/// # Audit a crawl export with the optional alt-text and orphan tables
/// seo_audit report internal_html.csv --alt-text alt.csv --orphans orphans.csv
///
/// # Check heading structure of a URL list with 10 workers
/// seo_audit headers urls.csv --workers 10
///
/// # Serve the JSON API
/// seo_audit serve --port 8000 --data-dir ./data
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "seo_audit",
    about = "Builds SEO audit reports from crawl exports and checks page heading structure."
)]
pub struct Cli {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Skip TLS certificate verification on outbound requests
    #[arg(long, global = true, env = "SEO_AUDIT_INSECURE")]
    pub insecure: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build the audit report from a crawl export
    Report(ReportArgs),
    /// Fetch pages and analyze their heading structure
    Headers(HeadersArgs),
    /// Discover and classify a site's sitemap URLs
    Sitemap(SitemapArgs),
    /// List schema markup types found on one page
    Schema(SchemaArgs),
    /// Serve the audit JSON API
    Serve(ServeArgs),
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Crawl export (internal HTML) CSV
    #[arg(value_parser)]
    pub crawl: PathBuf,

    /// Images-missing-alt-text CSV
    #[arg(long)]
    pub alt_text: Option<PathBuf>,

    /// Orphan pages CSV
    #[arg(long)]
    pub orphans: Option<PathBuf>,

    /// Site root to check; defaults to the host of the first crawled address
    #[arg(long)]
    pub site: Option<String>,

    /// Skip robots.txt, sitemap.xml and schema markup checks
    #[arg(long)]
    pub no_site_checks: bool,

    /// Also discover and classify sitemap URLs
    #[arg(long)]
    pub sitemap: bool,

    /// "Img alt tag" value when no alt-text file is given
    #[arg(long, default_value_t = 0)]
    pub alt_text_default: usize,

    /// Write the report as CSV to this path
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Write classified sitemap URLs as CSV to this path (requires --sitemap)
    #[arg(long)]
    pub urls_output: Option<PathBuf>,

    /// Print the full JSON response instead of a table
    #[arg(long)]
    pub json: bool,

    /// User-Agent for site checks
    #[arg(long, default_value = DEFAULT_BROWSER_USER_AGENT, env = "SEO_AUDIT_USER_AGENT")]
    pub user_agent: String,
}

impl ReportArgs {
    pub fn audit_config(&self, insecure: bool) -> AuditConfig {
        let mut config = AuditConfig {
            site_checks: !self.no_site_checks,
            missing_alt_text_default: self.alt_text_default,
            user_agent: self.user_agent.clone(),
            accept_invalid_certs: insecure,
            ..Default::default()
        };
        config.schema.accept_invalid_certs = insecure;
        config.schema.user_agent = self.user_agent.clone();
        config
    }
}

#[derive(Debug, Args)]
pub struct HeadersArgs {
    /// CSV with a column whose header contains "url" (otherwise the first column is used)
    #[arg(value_parser)]
    pub urls: PathBuf,

    /// Concurrent fetches (1-20)
    #[arg(long, default_value_t = DEFAULT_HEADER_WORKERS as u16,
          value_parser = clap::value_parser!(u16).range(MIN_HEADER_WORKERS as i64..=MAX_HEADER_WORKERS as i64))]
    pub workers: u16,

    /// Analyze only the first N URLs (0 for all)
    #[arg(long, default_value_t = 0)]
    pub limit: usize,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_HEADER_USER_AGENT)]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = HEADER_FETCH_TIMEOUT.as_secs())]
    pub timeout_seconds: u64,

    /// Output CSV path (default: seo_header_analysis_<timestamp>.csv)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl HeadersArgs {
    pub fn scan_config(&self, insecure: bool) -> HeaderScanConfig {
        HeaderScanConfig {
            workers: usize::from(self.workers),
            timeout: Duration::from_secs(self.timeout_seconds),
            user_agent: self.user_agent.clone(),
            limit: self.limit,
            accept_invalid_certs: insecure,
        }
    }
}

#[derive(Debug, Args)]
pub struct SitemapArgs {
    /// Site root, e.g. https://example.com
    pub site: String,

    /// Output CSV path (default: sitemap_urls_<timestamp>.csv)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct SchemaArgs {
    /// Page URL
    pub url: String,

    /// Print the raw JSON-LD blocks as well
    #[arg(long)]
    pub full: bool,
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// Port to listen on
    #[arg(long, default_value_t = DEFAULT_SERVER_PORT)]
    pub port: u16,

    /// Directory holding the files read by /analyze/default
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Probe the audited site (robots, sitemap, schema) on each request
    #[arg(long)]
    pub site_checks: bool,
}

impl ServeArgs {
    pub fn server_config(&self, insecure: bool) -> ServerConfig {
        let mut config = ServerConfig {
            bind: SocketAddr::new(self.bind, self.port),
            data_dir: self.data_dir.clone(),
            ..Default::default()
        };
        config.audit.site_checks = self.site_checks;
        config.audit.accept_invalid_certs = insecure;
        config.audit.schema.accept_invalid_certs = insecure;
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_report_command() {
        let cli = Cli::try_parse_from([
            "seo_audit",
            "report",
            "crawl.csv",
            "--alt-text",
            "alt.csv",
            "--no-site-checks",
        ])
        .expect("Should parse report command");
        match cli.command {
            Command::Report(args) => {
                assert_eq!(args.crawl, PathBuf::from("crawl.csv"));
                assert_eq!(args.alt_text, Some(PathBuf::from("alt.csv")));
                assert!(args.orphans.is_none());
                let config = args.audit_config(false);
                assert!(!config.site_checks);
                assert_eq!(config.missing_alt_text_default, 0);
            }
            other => panic!("Expected report command, got {:?}", other),
        }
    }

    #[test]
    fn test_report_user_agent_reaches_schema_probe() {
        let cli = Cli::try_parse_from([
            "seo_audit",
            "report",
            "crawl.csv",
            "--user-agent",
            "AuditBot/2.0",
        ])
        .expect("Should parse report command");
        match cli.command {
            Command::Report(args) => {
                let config = args.audit_config(true);
                assert_eq!(config.user_agent, "AuditBot/2.0");
                assert_eq!(config.schema.user_agent, "AuditBot/2.0");
                assert!(config.schema.accept_invalid_certs);
            }
            other => panic!("Expected report command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_headers_defaults() {
        let cli = Cli::try_parse_from(["seo_audit", "headers", "urls.csv"])
            .expect("Should parse headers command");
        match cli.command {
            Command::Headers(args) => {
                let config = args.scan_config(true);
                assert_eq!(config.workers, 5);
                assert_eq!(config.timeout, Duration::from_secs(20));
                assert_eq!(config.user_agent, "SEOHeaderAnalyzer/1.0");
                assert!(config.accept_invalid_certs);
            }
            other => panic!("Expected headers command, got {:?}", other),
        }
    }

    #[test]
    fn test_headers_rejects_out_of_range_workers() {
        let result = Cli::try_parse_from(["seo_audit", "headers", "urls.csv", "--workers", "21"]);
        assert!(result.is_err());
        let result = Cli::try_parse_from(["seo_audit", "headers", "urls.csv", "--workers", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "seo_audit",
            "sitemap",
            "https://example.com",
            "--log-level",
            "debug",
            "--insecure",
        ])
        .expect("Global flags should be accepted after the subcommand");
        assert!(cli.insecure);
        assert_eq!(
            log::LevelFilter::from(cli.log_level),
            log::LevelFilter::Debug
        );
    }

    #[test]
    fn test_serve_config() {
        let cli = Cli::try_parse_from(["seo_audit", "serve", "--port", "9001", "--site-checks"])
            .expect("Should parse serve command");
        match cli.command {
            Command::Serve(args) => {
                let config = args.server_config(false);
                assert_eq!(config.bind.port(), 9001);
                assert!(config.audit.site_checks);
            }
            other => panic!("Expected serve command, got {:?}", other),
        }
    }
}
