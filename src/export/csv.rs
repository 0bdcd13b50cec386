//! CSV export.
//!
//! Each export writes a header row and one row per record, to a file or to
//! stdout. Status values are always written as plain labels.

use anyhow::{Context, Result};
use csv::Writer;
use std::io::{self, Write};
use std::path::Path;

use crate::audit::ReportRow;
use crate::headers::HeaderResult;
use crate::sitemap::ClassifiedUrl;

const REPORT_HEADERS: [&str; 6] = [
    "Category",
    "Parameters",
    "Current Value",
    "Expected Value",
    "Source",
    "Status",
];

const HEADER_RESULT_HEADERS: [&str; 6] = [
    "URL",
    "Title",
    "Meta Description",
    "Header Structure",
    "SEO Issues",
    "Error",
];

/// Opens a CSV writer on `output`, or on stdout if `None`.
fn open_writer(output: Option<&Path>) -> Result<Writer<Box<dyn Write>>> {
    let writer = if let Some(output_path) = output {
        let file = std::fs::File::create(output_path).context(format!(
            "Failed to create output file: {}",
            output_path.display()
        ))?;
        Writer::from_writer(Box::new(file) as Box<dyn Write>)
    } else {
        Writer::from_writer(Box::new(io::stdout()) as Box<dyn Write>)
    };
    Ok(writer)
}

/// Writes the report rows. Returns the number of rows written.
pub fn write_report_csv<W: Write>(writer: &mut Writer<W>, rows: &[ReportRow]) -> Result<usize> {
    writer.write_record(REPORT_HEADERS)?;
    for row in rows {
        let current_value = row.current_value.to_string();
        writer.write_record([
            row.category.as_str(),
            row.parameter.as_str(),
            current_value.as_str(),
            row.expected_value.as_str(),
            row.source.as_str(),
            row.status.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(rows.len())
}

/// Writes classified sitemap URLs as URL, Language, Category.
pub fn write_classified_urls_csv<W: Write>(
    writer: &mut Writer<W>,
    urls: &[ClassifiedUrl],
) -> Result<usize> {
    if urls.is_empty() {
        writer.write_record(["URL", "Language", "Category"])?;
    }
    for url in urls {
        writer.serialize(url)?;
    }
    writer.flush()?;
    Ok(urls.len())
}

/// Writes one row per analyzed page.
pub fn write_header_results_csv<W: Write>(
    writer: &mut Writer<W>,
    results: &[HeaderResult],
) -> Result<usize> {
    writer.write_record(HEADER_RESULT_HEADERS)?;
    for result in results {
        let issues = result.issues_summary();
        writer.write_record([
            result.url.as_str(),
            result.title.as_deref().unwrap_or(""),
            result.meta_description.as_deref().unwrap_or(""),
            result.header_structure.as_str(),
            issues.as_str(),
            result.error.as_deref().unwrap_or(""),
        ])?;
    }
    writer.flush()?;
    Ok(results.len())
}

/// Exports the report table to `output` (stdout if `None`).
pub fn export_report_csv(rows: &[ReportRow], output: Option<&Path>) -> Result<usize> {
    let mut writer = open_writer(output)?;
    write_report_csv(&mut writer, rows)
}

/// Exports classified sitemap URLs to `output` (stdout if `None`).
pub fn export_classified_urls_csv(urls: &[ClassifiedUrl], output: Option<&Path>) -> Result<usize> {
    let mut writer = open_writer(output)?;
    write_classified_urls_csv(&mut writer, urls)
}

/// Exports header-analysis results to `output` (stdout if `None`).
pub fn export_header_results_csv(results: &[HeaderResult], output: Option<&Path>) -> Result<usize> {
    let mut writer = open_writer(output)?;
    write_header_results_csv(&mut writer, results)
}
