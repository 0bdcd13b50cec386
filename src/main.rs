//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `seo_audit` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::process;

use seo_audit::app::{print_header_summary, print_report_summary, validate_and_normalize_url};
use seo_audit::audit::{run_audit, AuditInputs, AuditReport};
use seo_audit::config::{
    ClassifierConfig, Cli, Command, HeadersArgs, ReportArgs, SchemaArgs, SchemaConfig,
    SitemapArgs, SitemapConfig, DEFAULT_BROWSER_USER_AGENT,
};
use seo_audit::export::{
    export_classified_urls_csv, export_header_results_csv, export_report_csv, timestamped_filename,
};
use seo_audit::initialization::{init_client, init_logger_with};
use seo_audit::input::{read_url_list_from_path, Table};
use seo_audit::schema::{checklist_coverage, fetch_page_schemas, short_type_name};
use seo_audit::sitemap::{run_sitemap_analysis, SitemapAnalysis};
use seo_audit::{run_header_scan, server};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // Try the current directory first, then the executable's directory
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();
    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = run(cli).await {
        eprintln!("seo_audit error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let insecure = cli.insecure;
    match cli.command {
        Command::Report(args) => report_command(&args, insecure).await,
        Command::Headers(args) => headers_command(&args, insecure).await,
        Command::Sitemap(args) => sitemap_command(&args, insecure).await,
        Command::Schema(args) => schema_command(&args, insecure).await,
        Command::Serve(args) => server::serve(args.server_config(insecure)).await,
    }
}

/// Reads an optional table; a path that does not exist counts as not supplied.
fn read_optional_table(path: Option<&Path>, label: &str) -> Result<Option<Table>> {
    let Some(path) = path else {
        return Ok(None);
    };
    if !path.exists() {
        log::warn!("{label} file {} not found; continuing without it", path.display());
        return Ok(None);
    }
    let table = Table::from_path(path).with_context(|| format!("Failed to load {label} file"))?;
    Ok(Some(table))
}

fn sitemap_config(insecure: bool) -> SitemapConfig {
    let mut config = SitemapConfig::default();
    config.accept_invalid_certs |= insecure;
    config
}

fn print_report(report: &AuditReport) {
    println!(
        "SEO audit for {}",
        report.domain.as_deref().unwrap_or("unknown domain")
    );
    let mut category = "";
    for row in &report.report {
        if row.category != category {
            category = &row.category;
            println!("\n{category}");
        }
        println!(
            "  {:<36} {:<40} {}",
            row.parameter,
            row.current_value.to_string().replace('\n', " "),
            row.status.display_label()
        );
    }
    if let Some(opportunities) = &report.detailed_issues.schema_opportunities {
        println!("\nSchema opportunities: {}", opportunities.join(", "));
    }
}

fn print_sitemap_analysis(analysis: &SitemapAnalysis) {
    println!("Sitemap URLs: {}", analysis.total_urls());
    println!("Languages:");
    for (language, count) in analysis.languages_by_frequency() {
        println!("  {language:<8} {count}");
    }
    println!("Categories:");
    for (category, count) in analysis.categories_by_frequency() {
        println!("  {category:<16} {count}");
    }
}

async fn report_command(args: &ReportArgs, insecure: bool) -> Result<()> {
    let crawl = Table::from_path(&args.crawl).context("Failed to load crawl export")?;
    let alt_text = read_optional_table(args.alt_text.as_deref(), "Alt text")?;
    let orphans = read_optional_table(args.orphans.as_deref(), "Orphan pages")?;
    let inputs = AuditInputs {
        crawl: &crawl,
        alt_text: alt_text.as_ref(),
        orphans: orphans.as_ref(),
    };

    let config = args.audit_config(insecure);
    let report = run_audit(&inputs, args.site.as_deref(), &config)
        .await
        .context("Failed to build audit report")?;

    let analysis = if args.sitemap {
        let site = args.site.clone().or_else(|| report.domain.clone());
        match site {
            Some(site) => Some(
                run_sitemap_analysis(&site, &sitemap_config(insecure), &ClassifierConfig::default())
                    .await?,
            ),
            None => {
                log::warn!("No site to discover sitemaps for");
                None
            }
        }
    } else {
        None
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
        if let Some(analysis) = &analysis {
            println!();
            print_sitemap_analysis(analysis);
        }
    }

    if let Some(output) = &args.output {
        export_report_csv(&report.report, Some(output.as_path()))?;
        println!("Report saved to {}", output.display());
    }
    if let (Some(output), Some(analysis)) = (&args.urls_output, &analysis) {
        export_classified_urls_csv(&analysis.urls, Some(output.as_path()))?;
        println!("Sitemap URLs saved to {}", output.display());
    }

    print_report_summary(&report);
    Ok(())
}

async fn headers_command(args: &HeadersArgs, insecure: bool) -> Result<()> {
    let urls = read_url_list_from_path(&args.urls).context("Failed to load URL list")?;
    let scan = run_header_scan(urls, &args.scan_config(insecure), None).await?;

    let output: PathBuf = args
        .output
        .clone()
        .unwrap_or_else(|| timestamped_filename("seo_header_analysis"));
    export_header_results_csv(&scan.results, Some(output.as_path()))?;

    print_header_summary(&scan.summary);
    println!(
        "✅ Analyzed {} URL{} ({} with issues) - results saved to {}",
        scan.summary.total_pages,
        if scan.summary.total_pages == 1 { "" } else { "s" },
        scan.summary.pages_with_issues,
        output.display()
    );
    Ok(())
}

async fn sitemap_command(args: &SitemapArgs, insecure: bool) -> Result<()> {
    let analysis =
        run_sitemap_analysis(&args.site, &sitemap_config(insecure), &ClassifierConfig::default())
            .await?;
    if analysis.is_empty() {
        println!("No sitemap URLs found for {}", args.site);
        return Ok(());
    }
    print_sitemap_analysis(&analysis);

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| timestamped_filename("sitemap_urls"));
    export_classified_urls_csv(&analysis.urls, Some(output.as_path()))?;
    println!("Sitemap URLs saved to {}", output.display());
    Ok(())
}

async fn schema_command(args: &SchemaArgs, insecure: bool) -> Result<()> {
    let url = validate_and_normalize_url(&args.url)
        .with_context(|| format!("Invalid URL: {}", args.url))?;
    let config = SchemaConfig::default();
    let client = init_client(DEFAULT_BROWSER_USER_AGENT, config.request_timeout, insecure)?;
    let schemas = fetch_page_schemas(&client, &url)
        .await
        .with_context(|| format!("Failed to fetch {url}"))?;

    let found = schemas.type_names();
    if found.is_empty() {
        println!("No schema markup found on {url}");
    } else {
        let short: BTreeSet<&str> = found.iter().map(|name| short_type_name(name)).collect();
        println!("Schema types on {url}:");
        for name in short {
            println!("  {name}");
        }
    }

    println!("\nChecklist:");
    for (label, implemented) in checklist_coverage(&found, &config.checklist) {
        let symbol = if implemented { "✅" } else { "❌" };
        println!("  {symbol} {label}");
    }

    if args.full {
        for block in &schemas.json_ld {
            println!("\n{}", serde_json::to_string_pretty(block)?);
        }
    }
    Ok(())
}
