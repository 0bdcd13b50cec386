//! API route handlers.

use std::path::Path;

use axum::{
    extract::{Multipart, State},
    Json,
};
use log::{info, warn};
use serde_json::{json, Value};

use crate::audit::{run_audit, AuditInputs, AuditReport};
use crate::input::Table;

use super::error::ApiError;
use super::AppState;

const API_NAME: &str = "Web Audit Data Analyzer API";
const API_VERSION: &str = "1.0.0";

pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": API_NAME, "version": API_VERSION }))
}

pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Builds the report from parsed tables using the server's audit settings.
async fn audit_tables(
    state: &AppState,
    crawl: Table,
    alt_text: Option<Table>,
    orphans: Option<Table>,
) -> Result<Json<AuditReport>, ApiError> {
    let inputs = AuditInputs {
        crawl: &crawl,
        alt_text: alt_text.as_ref(),
        orphans: orphans.as_ref(),
    };
    let report = run_audit(&inputs, None, &state.config.audit).await?;
    info!(
        "Audited {} crawl rows for {}",
        crawl.len(),
        report.domain.as_deref().unwrap_or("unknown domain")
    );
    Ok(Json(report))
}

/// `POST /analyze/upload`: multipart fields `main_file` (required),
/// `alt_tag_file` and `orphan_file` (optional).
pub async fn upload_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AuditReport>, ApiError> {
    let mut main_file = None;
    let mut alt_tag_file = None;
    let mut orphan_file = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read field '{name}': {e}")))?;
        match name.as_str() {
            "main_file" => main_file = Some(bytes),
            "alt_tag_file" => alt_tag_file = Some(bytes),
            "orphan_file" => orphan_file = Some(bytes),
            other => warn!("Ignoring unexpected upload field '{other}'"),
        }
    }

    let main_file =
        main_file.ok_or_else(|| ApiError::BadRequest("Missing required file field 'main_file'".into()))?;
    let crawl = Table::from_bytes(&main_file)?;
    // An empty optional upload counts as not supplied
    let optional = |bytes: Option<axum::body::Bytes>| -> Result<Option<Table>, ApiError> {
        match bytes {
            Some(b) if !b.is_empty() => Ok(Some(Table::from_bytes(&b)?)),
            _ => Ok(None),
        }
    };
    let alt_text = optional(alt_tag_file)?;
    let orphans = optional(orphan_file)?;

    audit_tables(&state, crawl, alt_text, orphans).await
}

fn read_optional(path: &Path, label: &str) -> Result<Option<Table>, ApiError> {
    if !path.exists() {
        warn!("{label} not found at {}; treating as absent", path.display());
        return Ok(None);
    }
    Ok(Some(Table::from_path(path)?))
}

/// `POST /analyze/default`: reads the configured files from the data directory.
pub async fn default_handler(State(state): State<AppState>) -> Result<Json<AuditReport>, ApiError> {
    let crawl_path = state.config.crawl_path();
    if !crawl_path.exists() {
        return Err(ApiError::NotFound(format!(
            "Default files not found: Main data file: {}",
            crawl_path.display()
        )));
    }

    let crawl = Table::from_path(&crawl_path)?;
    let alt_text = read_optional(&state.config.alt_text_path(), "Alt tag data file")?;
    let orphans = read_optional(&state.config.orphan_path(), "Orphan pages data file")?;

    audit_tables(&state, crawl, alt_text, orphans).await
}
