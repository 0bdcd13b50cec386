//! Error type definitions.
//!
//! This module defines the error types raised at library seams and the issue
//! categories counted while analyzing page headers.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors for malformed top-level input.
///
/// These abort the single invocation or API request that supplied the input.
/// Missing optional columns and missing optional files never produce one.
#[derive(Error, Debug)]
pub enum InputError {
    /// The file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The content is not valid CSV.
    #[error("Invalid CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The crawl export has no data rows.
    #[error("Main CSV file is empty")]
    EmptyCrawl,

    /// A column the report cannot do without is absent.
    #[error("Required column '{0}' not found in crawl export")]
    MissingColumn(String),

    /// A URL list produced no usable URLs.
    #[error("No URLs found in the CSV file")]
    NoUrls,
}

/// Errors that abort a whole schema probe (individual page failures never do).
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The site root could not be turned into a URL.
    #[error("Invalid site URL '{0}'")]
    InvalidBaseUrl(String),

    /// The HTTP client could not be built.
    #[error(transparent)]
    Client(#[from] InitializationError),
}

/// Categories of header-analysis outcomes counted in the run summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum HeaderIssueType {
    MissingH1,
    DuplicateH1,
    HierarchyJump,
    FetchError,
}

impl std::fmt::Display for HeaderIssueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl HeaderIssueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderIssueType::MissingH1 => "Missing H1",
            HeaderIssueType::DuplicateH1 => "Duplicate H1",
            HeaderIssueType::HierarchyJump => "Incorrect Hierarchy",
            HeaderIssueType::FetchError => "Error Processing",
        }
    }

    /// Issue-string marker that places an issue in this category.
    ///
    /// `FetchError` has no marker; it is counted from the result's error field.
    pub fn marker(&self) -> Option<&'static str> {
        match self {
            HeaderIssueType::MissingH1 => Some("Missing H1"),
            HeaderIssueType::DuplicateH1 => Some("Multiple H1s"),
            HeaderIssueType::HierarchyJump => Some("Hierarchy jump"),
            HeaderIssueType::FetchError => None,
        }
    }
}
