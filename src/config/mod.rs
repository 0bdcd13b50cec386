//! Application configuration and constants.
//!
//! This module provides:
//! - Built-in default tables and limits
//! - Library configuration structs (injected into every component)
//! - CLI option types and parsing

mod cli;
mod constants;
mod types;

pub use cli::{Cli, Command, HeadersArgs, ReportArgs, SchemaArgs, ServeArgs, SitemapArgs};
pub use constants::*;
pub use types::{
    AuditConfig, ClassifierConfig, HeaderScanConfig, LogFormat, LogLevel, SchemaConfig,
    ServerConfig, SitemapConfig,
};
