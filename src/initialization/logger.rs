//! Logger initialization.
//!
//! Plain output is meant for a terminal running one of the CLI commands; JSON
//! output is one object per line for the API server's log collectors.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter};

/// Dependencies that log page-parsing and connection chatter, with the most
/// verbose level let through for each.
const DEPENDENCY_LEVELS: &[(&str, LevelFilter)] = &[
    // scraper's HTML parser warns on every malformed page in a header scan
    ("html5ever", LevelFilter::Error),
    ("selectors", LevelFilter::Warn),
    ("reqwest", LevelFilter::Info),
    ("hyper", LevelFilter::Info),
    ("hyper_util", LevelFilter::Info),
    ("axum", LevelFilter::Info),
];

/// Initializes `env_logger` with `level` for this crate.
///
/// `RUST_LOG` is read first; `level` then overrides the global level and the
/// crate's own, and [`DEPENDENCY_LEVELS`] clamps the chatty dependencies.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// RUST_LOG=seo_audit::sitemap=debug seo_audit sitemap https://example.com
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    for (module, cap) in DEPENDENCY_LEVELS {
        builder.filter_module(module, (*cap).min(level));
    }
    builder.filter_module(env!("CARGO_CRATE_NAME"), level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                let line = json_line(
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    &record.args().to_string(),
                );
                writeln!(buf, "{line}")
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let (emoji, level) = plain_marker(record.level());
                writeln!(buf, "{emoji} {} [{level}] {}", record.target().cyan(), record.args())
            });
        }
    }

    builder.try_init().map_err(InitializationError::from)?;
    Ok(())
}

fn json_line(ts: i64, level: Level, target: &str, msg: &str) -> String {
    serde_json::json!({
        "ts": ts,
        "level": level.as_str(),
        "target": target,
        "msg": msg,
    })
    .to_string()
}

fn plain_marker(level: Level) -> (&'static str, ColoredString) {
    let label = level.as_str();
    match level {
        Level::Error => ("❌", label.red()),
        Level::Warn => ("⚠️", label.yellow()),
        Level::Info => ("✔️", label.green()),
        Level::Debug => ("🔍", label.blue()),
        Level::Trace => ("🔬", label.purple()),
    }
}
