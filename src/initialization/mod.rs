//! Application initialization.
//!
//! Logger setup and per-purpose HTTP client construction. All
//! initialization functions return `InitializationError` on failure.

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
