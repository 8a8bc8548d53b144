//! Internal test modules - whitebox tests with crate access
//!
//! Acceptance tests drive the full TUI through the test harness against an
//! in-memory catalog and assert on state and rendered output.

use crate::model::BookRecord;
use chrono::NaiveDate;

mod help_overlay_tests;

/// Build a record with a fixed author, genre and date.
#[allow(dead_code)]
pub(crate) fn book(entry_id: u64, title: &str) -> BookRecord {
    BookRecord {
        entry_id,
        title: title.to_string(),
        author: "Author".to_string(),
        genre: "Fiction".to_string(),
        publication_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
        isbn: 9_780_000_000_000 + entry_id,
    }
}

/// Small catalog shared by the acceptance tests.
pub(crate) fn sample_catalog() -> Vec<BookRecord> {
    vec![
        BookRecord {
            entry_id: 1,
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            genre: "SciFi".to_string(),
            publication_date: NaiveDate::from_ymd_opt(1965, 8, 1).unwrap(),
            isbn: 111,
        },
        BookRecord {
            entry_id: 2,
            title: "Emma".to_string(),
            author: "Austen".to_string(),
            genre: "Romance".to_string(),
            publication_date: NaiveDate::from_ymd_opt(1815, 12, 23).unwrap(),
            isbn: 222,
        },
        BookRecord {
            entry_id: 3,
            title: "Beloved".to_string(),
            author: "Morrison".to_string(),
            genre: "Fiction".to_string(),
            publication_date: NaiveDate::from_ymd_opt(1987, 9, 2).unwrap(),
            isbn: 333,
        },
    ]
}
