//! Table column sorting.
//!
//! Sorting is client-side and stable: equal keys keep their relative order
//! from the filtered (server-ordered) list.

use std::cmp::Ordering;

use crate::model::BookRecord;

/// A catalog table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// EntryID
    Id,
    /// Title
    Title,
    /// Author
    Author,
    /// Genre
    Genre,
    /// PublicationDate
    Date,
    /// ISBN
    Isbn,
}

impl Column {
    /// All columns in display order.
    pub const ALL: [Column; 6] = [
        Column::Id,
        Column::Title,
        Column::Author,
        Column::Genre,
        Column::Date,
        Column::Isbn,
    ];

    /// Header label shown in the table.
    pub fn header(self) -> &'static str {
        match self {
            Column::Id => "ID",
            Column::Title => "Title",
            Column::Author => "Author",
            Column::Genre => "Genre",
            Column::Date => "Date",
            Column::Isbn => "ISBN",
        }
    }

    /// Cell text for a record.
    pub fn cell(self, record: &BookRecord) -> String {
        match self {
            Column::Id => record.entry_id.to_string(),
            Column::Title => record.title.clone(),
            Column::Author => record.author.clone(),
            Column::Genre => record.genre.clone(),
            Column::Date => record.date_string(),
            Column::Isbn => record.isbn.to_string(),
        }
    }

    fn compare(self, a: &BookRecord, b: &BookRecord) -> Ordering {
        match self {
            Column::Id => a.entry_id.cmp(&b.entry_id),
            Column::Title => collate(&a.title, &b.title),
            Column::Author => collate(&a.author, &b.author),
            Column::Genre => collate(&a.genre, &b.genre),
            Column::Date => a.publication_date.cmp(&b.publication_date),
            Column::Isbn => a.isbn.cmp(&b.isbn),
        }
    }
}

/// Alphabetical text order: case-folded first, raw text breaks ties so
/// that only identical strings compare equal.
fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Arrow glyph for the table header.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Active sort: one column at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    /// Column being sorted on.
    pub column: Column,
    /// Current direction.
    pub direction: SortDirection,
}

/// Apply a column key press to the current sort.
///
/// A new column starts ascending; the same column again flips direction.
pub fn toggle_sort(current: Option<SortState>, column: Column) -> SortState {
    match current {
        Some(state) if state.column == column => SortState {
            column,
            direction: state.direction.flipped(),
        },
        _ => SortState {
            column,
            direction: SortDirection::Ascending,
        },
    }
}

/// Stable in-place sort of records.
pub fn sort_records(records: &mut [BookRecord], sort: SortState) {
    records.sort_by(|a, b| {
        let ord = sort.column.compare(a, b);
        match sort.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}
