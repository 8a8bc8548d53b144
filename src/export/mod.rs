//! Catalog exports.
//!
//! Four encoders turn the full in-memory record set into a file payload:
//! CSV, JSON, a paginated PDF table, and a single-sheet XLSX workbook.
//! Exports always take the whole catalog, never the filtered table view.
//!
//! [`write_export`] encodes and drops the payload into a directory under a
//! deterministic file name.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::info;

use crate::model::{BookRecord, ExportError};

pub mod csv;
pub mod json;
pub mod pdf;
pub mod xlsx;

/// Column headers shared by the CSV and PDF exports, in column order.
pub const HEADERS: [&str; 6] = ["ID", "Title", "Author", "Genre", "Publication Date", "ISBN"];

/// Cells of one record in [`HEADERS`] order.
pub fn row_cells(record: &BookRecord) -> [String; 6] {
    [
        record.entry_id.to_string(),
        record.title.clone(),
        record.author.clone(),
        record.genre.clone(),
        record.date_string(),
        record.isbn.to_string(),
    ]
}

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values
    Csv,
    /// Excel workbook
    Xlsx,
    /// PDF table
    Pdf,
    /// Pretty-printed JSON array
    Json,
}

impl ExportFormat {
    /// Menu order.
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Csv,
        ExportFormat::Xlsx,
        ExportFormat::Pdf,
        ExportFormat::Json,
    ];

    /// Short display label.
    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Xlsx => "XLSX",
            ExportFormat::Pdf => "PDF",
            ExportFormat::Json => "JSON",
        }
    }

    /// File extension including the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => ".csv",
            ExportFormat::Xlsx => ".xlsx",
            ExportFormat::Pdf => ".pdf",
            ExportFormat::Json => ".json",
        }
    }

    /// Output file name.
    ///
    /// `books.<ext>`, except XLSX which is stamped with epoch milliseconds:
    /// `books_export_<ms>.xlsx`.
    pub fn file_name(self, now: DateTime<Utc>) -> String {
        match self {
            ExportFormat::Xlsx => format!(
                "books_export_{}{}",
                now.timestamp_millis(),
                self.extension()
            ),
            other => format!("books{}", other.extension()),
        }
    }

    /// Encode records into this format.
    pub fn encode(self, records: &[BookRecord]) -> Result<Vec<u8>, ExportError> {
        match self {
            ExportFormat::Csv => Ok(csv::encode(records).into_bytes()),
            ExportFormat::Json => json::encode(records).map(String::into_bytes),
            ExportFormat::Pdf => pdf::encode(records),
            ExportFormat::Xlsx => xlsx::encode(records),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Encode `records` and write them into `dir`.
///
/// Returns the path of the written file. An existing file of the same name
/// is overwritten.
pub fn write_export(
    records: &[BookRecord],
    format: ExportFormat,
    dir: &Path,
    now: DateTime<Utc>,
) -> Result<PathBuf, ExportError> {
    let payload = format.encode(records)?;
    let path = dir.join(format.file_name(now));

    std::fs::write(&path, payload).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;

    info!(
        format = format.label(),
        records = records.len(),
        path = %path.display(),
        "Export written"
    );
    Ok(path)
}
