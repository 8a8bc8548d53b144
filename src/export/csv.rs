//! CSV export.
//!
//! Cells are joined with bare commas and rows with `\n`. Values are not
//! quoted, so a title containing a comma shifts the columns of its row.
//! Consumers that need strict CSV should use the JSON or XLSX export.

use crate::model::BookRecord;

use super::{row_cells, HEADERS};

/// Encode records as CSV text: header row, then one row per record.
///
/// No trailing newline after the last row.
pub fn encode(records: &[BookRecord]) -> String {
    std::iter::once(HEADERS.join(","))
        .chain(records.iter().map(|record| row_cells(record).join(",")))
        .collect::<Vec<_>>()
        .join("\n")
}
