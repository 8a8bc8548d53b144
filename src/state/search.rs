//! Record search: field selector, pure filter, and search bar state machine.
//!
//! SearchState is a sum type representing the three possible search states:
//! - Inactive: No filter applied
//! - Typing: User is entering a query
//! - Active: Filter applied to the table

use std::fmt;
use std::str::FromStr;

use crate::model::BookRecord;
use crate::state::sort::Column;

// ===== SearchField =====

/// Which record field a query is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchField {
    /// Match against every field.
    #[default]
    All,
    /// EntryID
    Id,
    /// Title
    Title,
    /// Author
    Author,
    /// Genre
    Genre,
    /// PublicationDate as `YYYY-MM-DD`
    Date,
    /// ISBN
    Isbn,
}

impl SearchField {
    /// Selector order, as presented in the search bar.
    pub const ALL: [SearchField; 7] = [
        SearchField::All,
        SearchField::Id,
        SearchField::Title,
        SearchField::Author,
        SearchField::Genre,
        SearchField::Date,
        SearchField::Isbn,
    ];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            SearchField::All => "All",
            SearchField::Id => "ID",
            SearchField::Title => "Title",
            SearchField::Author => "Author",
            SearchField::Genre => "Genre",
            SearchField::Date => "Date",
            SearchField::Isbn => "ISBN",
        }
    }

    /// The single column this selector matches, or `None` for All.
    pub fn column(self) -> Option<Column> {
        match self {
            SearchField::All => None,
            SearchField::Id => Some(Column::Id),
            SearchField::Title => Some(Column::Title),
            SearchField::Author => Some(Column::Author),
            SearchField::Genre => Some(Column::Genre),
            SearchField::Date => Some(Column::Date),
            SearchField::Isbn => Some(Column::Isbn),
        }
    }

    /// Next selector value, wrapping from ISBN back to All.
    pub fn cycle_next(self) -> Self {
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unknown search field name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search field {0:?} (expected one of: all, id, title, author, genre, date, isbn)")]
pub struct InvalidSearchField(String);

impl FromStr for SearchField {
    type Err = InvalidSearchField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InvalidSearchField(s.to_string()))
    }
}

// ===== Filter =====

/// Lowercased text of one column of a record.
fn field_text(record: &BookRecord, column: Column) -> String {
    column.cell(record).to_lowercase()
}

/// Check a single record against an already-lowercased query.
pub fn record_matches(record: &BookRecord, query_lower: &str, field: SearchField) -> bool {
    if query_lower.is_empty() {
        return true;
    }
    match field.column() {
        Some(column) => field_text(record, column).contains(query_lower),
        None => Column::ALL
            .iter()
            .any(|column| field_text(record, *column).contains(query_lower)),
    }
}

/// Filter records by case-insensitive substring match on the chosen field.
///
/// An empty query keeps everything. Relative order is preserved.
pub fn filter(records: &[BookRecord], query: &str, field: SearchField) -> Vec<BookRecord> {
    let query_lower = query.to_lowercase();
    records
        .iter()
        .filter(|record| record_matches(record, &query_lower, field))
        .cloned()
        .collect()
}

// ===== SearchState =====

/// Search bar state machine.
/// Sum type enforces exactly one state at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState {
    /// No filter applied.
    Inactive,
    /// User is typing a query. `cursor` counts characters, not bytes.
    Typing {
        /// Query text so far.
        query: String,
        /// Cursor position in characters.
        cursor: usize,
    },
    /// Filter applied to the table.
    Active {
        /// Submitted query.
        query: SearchQuery,
    },
}

impl SearchState {
    /// Query currently filtering the table, if any.
    pub fn applied_query(&self) -> Option<&str> {
        match self {
            SearchState::Active { query } => Some(query.as_str()),
            _ => None,
        }
    }
}

// ===== SearchQuery =====

/// Validated search query. Never empty.
/// Smart constructor enforces non-empty invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Smart constructor: validates query is non-empty.
    /// Returns None if query is empty or whitespace-only.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let s = raw.into();
        if s.trim().is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    /// Query text as entered.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
