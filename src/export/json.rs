//! JSON export: the record array pretty-printed with two-space indent.

use crate::model::{BookRecord, ExportError};

/// Encode records as a pretty-printed JSON array using wire field names.
pub fn encode(records: &[BookRecord]) -> Result<String, ExportError> {
    serde_json::to_string_pretty(records).map_err(|e| ExportError::Encode {
        format: "JSON",
        reason: e.to_string(),
    })
}
