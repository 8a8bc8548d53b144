//! XLSX export: one worksheet named `data`.
//!
//! Headers are the wire field names. EntryID and ISBN are written as numbers,
//! the date as `YYYY-MM-DD` text.

use rust_xlsxwriter::{Format, Workbook, XlsxError};

use crate::model::{BookRecord, ExportError};

/// Sheet name.
pub const SHEET_NAME: &str = "data";

/// Header row, in column order.
pub const FIELD_HEADERS: [&str; 6] = [
    "EntryID",
    "Title",
    "Author",
    "Genre",
    "PublicationDate",
    "ISBN",
];

fn encode_error(e: XlsxError) -> ExportError {
    ExportError::Encode {
        format: "XLSX",
        reason: e.to_string(),
    }
}

/// Build the workbook and return its bytes.
pub fn encode(records: &[BookRecord]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    write_sheet(&mut workbook, records).map_err(encode_error)?;
    workbook.save_to_buffer().map_err(encode_error)
}

fn write_sheet(workbook: &mut Workbook, records: &[BookRecord]) -> Result<(), XlsxError> {
    let bold = Format::new().set_bold();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, header) in FIELD_HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &bold)?;
    }

    for (index, record) in records.iter().enumerate() {
        let row = index as u32 + 1;
        sheet.write_number(row, 0, record.entry_id as f64)?;
        sheet.write_string(row, 1, record.title.as_str())?;
        sheet.write_string(row, 2, record.author.as_str())?;
        sheet.write_string(row, 3, record.genre.as_str())?;
        sheet.write_string(row, 4, record.date_string())?;
        sheet.write_number(row, 5, record.isbn as f64)?;
    }

    Ok(())
}
