//! One-shot export without the TUI.
//!
//! `bookcat --export <format>` fetches the catalog synchronously, writes one
//! export file and exits. Failures propagate to `main` instead of being shown
//! in a status bar.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::info;

use crate::client::CatalogApi;
use crate::export::{write_export, ExportFormat};
use crate::model::AppError;

/// Fetch every record and export it into `dir`.
///
/// Returns the path of the written file.
pub fn export_once(
    api: &dyn CatalogApi,
    format: ExportFormat,
    dir: &Path,
    now: DateTime<Utc>,
) -> Result<PathBuf, AppError> {
    let records = api.fetch_all()?;
    info!(count = records.len(), format = format.label(), "Fetched catalog for export");
    Ok(write_export(&records, format, dir, now)?)
}
