//! PDF export: the catalog as a paginated A4 table.
//!
//! Uses the built-in Helvetica faces so no font files are needed. The header
//! row is repeated at the top of every page; long cells are truncated to fit
//! their column.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use crate::model::{BookRecord, ExportError};

use super::{row_cells, HEADERS};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 14.0;
const ROW_HEIGHT: f32 = 6.0;
const FONT_SIZE: f32 = 9.0;
/// Rough Helvetica advance at `FONT_SIZE`, in millimetres per character.
const CHAR_WIDTH: f32 = 1.75;

/// Left edge and width (mm) of each column, in [`HEADERS`] order.
const COLUMNS: [(f32, f32); 6] = [
    (MARGIN, 12.0),
    (MARGIN + 12.0, 56.0),
    (MARGIN + 68.0, 40.0),
    (MARGIN + 108.0, 26.0),
    (MARGIN + 134.0, 26.0),
    (MARGIN + 160.0, 22.0),
];

/// Data rows that fit under the header on one page.
pub fn rows_per_page() -> usize {
    let usable = PAGE_HEIGHT - 2.0 * MARGIN - ROW_HEIGHT;
    (usable / ROW_HEIGHT).floor() as usize
}

/// Number of pages needed for `record_count` rows (at least one).
pub fn page_count(record_count: usize) -> usize {
    record_count.div_ceil(rows_per_page()).max(1)
}

fn fit(text: &str, width_mm: f32) -> String {
    let max_chars = (width_mm / CHAR_WIDTH).floor() as usize;
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

fn draw_row<S: AsRef<str>>(layer: &PdfLayerReference, cells: &[S], y: f32, font: &IndirectFontRef) {
    for (cell, (x, width)) in cells.iter().zip(COLUMNS) {
        layer.use_text(fit(cell.as_ref(), width), FONT_SIZE, Mm(x), Mm(y), font);
    }
}

fn encode_error(e: printpdf::Error) -> ExportError {
    ExportError::Encode {
        format: "PDF",
        reason: e.to_string(),
    }
}

/// Render records into PDF bytes.
pub fn encode(records: &[BookRecord]) -> Result<Vec<u8>, ExportError> {
    let (doc, first_page, first_layer) =
        PdfDocument::new("books", Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(encode_error)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(encode_error)?;

    let top = PAGE_HEIGHT - MARGIN;
    let mut chunks: Vec<&[BookRecord]> = records.chunks(rows_per_page()).collect();
    if chunks.is_empty() {
        chunks.push(&[]);
    }

    for (page_index, chunk) in chunks.into_iter().enumerate() {
        let layer = if page_index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            doc.get_page(page).get_layer(layer)
        };

        draw_row(&layer, &HEADERS, top, &bold);
        for (row, record) in chunk.iter().enumerate() {
            let y = top - ROW_HEIGHT * (row as f32 + 1.0);
            draw_row(&layer, &row_cells(record), y, &regular);
        }
    }

    doc.save_to_bytes().map_err(encode_error)
}
