//! Tests for the record filter and search field selector.

use super::*;
use chrono::NaiveDate;

fn dune() -> BookRecord {
    BookRecord {
        entry_id: 1,
        title: "Dune".to_string(),
        author: "Herbert".to_string(),
        genre: "SciFi".to_string(),
        publication_date: NaiveDate::from_ymd_opt(1965, 8, 1).unwrap(),
        isbn: 111,
    }
}

fn catalog() -> Vec<BookRecord> {
    vec![
        dune(),
        BookRecord {
            entry_id: 2,
            title: "Emma".to_string(),
            author: "Austen".to_string(),
            genre: "Romance".to_string(),
            publication_date: NaiveDate::from_ymd_opt(1815, 12, 23).unwrap(),
            isbn: 222,
        },
        BookRecord {
            entry_id: 12,
            title: "Children of Dune".to_string(),
            author: "Frank Herbert".to_string(),
            genre: "SciFi".to_string(),
            publication_date: NaiveDate::from_ymd_opt(1976, 4, 1).unwrap(),
            isbn: 333,
        },
    ]
}

fn ids(records: &[BookRecord]) -> Vec<u64> {
    records.iter().map(|r| r.entry_id).collect()
}

// ===== filter =====

#[test]
fn dune_scenario_all_fields_finds_title() {
    let records = vec![dune()];
    assert_eq!(filter(&records, "dune", SearchField::All), records);
}

#[test]
fn dune_scenario_author_field_finds_nothing() {
    let records = vec![dune()];
    assert!(filter(&records, "dune", SearchField::Author).is_empty());
}

#[test]
fn empty_query_returns_everything_in_order() {
    let records = catalog();
    assert_eq!(filter(&records, "", SearchField::All), records);
    assert_eq!(filter(&records, "", SearchField::Isbn), records);
}

#[test]
fn query_is_case_insensitive() {
    let records = catalog();
    assert_eq!(ids(&filter(&records, "DUNE", SearchField::Title)), vec![1, 12]);
    assert_eq!(ids(&filter(&records, "austen", SearchField::Author)), vec![2]);
}

#[test]
fn result_preserves_original_order() {
    let records = catalog();
    assert_eq!(ids(&filter(&records, "herbert", SearchField::All)), vec![1, 12]);
}

#[test]
fn id_field_matches_substrings_of_the_number() {
    let records = catalog();
    // "1" appears in ids 1 and 12
    assert_eq!(ids(&filter(&records, "1", SearchField::Id)), vec![1, 12]);
    assert_eq!(ids(&filter(&records, "12", SearchField::Id)), vec![12]);
}

#[test]
fn date_field_uses_iso_day_format() {
    let records = catalog();
    assert_eq!(ids(&filter(&records, "1965-08", SearchField::Date)), vec![1]);
    assert_eq!(ids(&filter(&records, "-12-23", SearchField::Date)), vec![2]);
    assert!(filter(&records, "08/01/1965", SearchField::Date).is_empty());
}

#[test]
fn isbn_field_matches_digits() {
    let records = catalog();
    assert_eq!(ids(&filter(&records, "22", SearchField::Isbn)), vec![2]);
}

#[test]
fn all_field_unions_every_column() {
    let records = catalog();
    // genre
    assert_eq!(ids(&filter(&records, "romance", SearchField::All)), vec![2]);
    // isbn
    assert_eq!(ids(&filter(&records, "333", SearchField::All)), vec![12]);
    // date
    assert_eq!(ids(&filter(&records, "1976", SearchField::All)), vec![12]);
}

#[test]
fn each_single_field_selects_its_own_column() {
    assert_eq!(SearchField::All.column(), None);
    let columns: Vec<Column> = SearchField::ALL[1..]
        .iter()
        .filter_map(|field| field.column())
        .collect();
    assert_eq!(columns, Column::ALL.to_vec());
    for field in &SearchField::ALL[1..] {
        assert_eq!(field.column().map(Column::header), Some(field.label()));
    }
}

#[test]
fn single_field_match_is_also_an_all_match() {
    let record = dune();
    for field in SearchField::ALL {
        for query in ["dune", "herbert", "1965-08", "111"] {
            if record_matches(&record, query, field) {
                assert!(record_matches(&record, query, SearchField::All), "{field} {query}");
            }
        }
    }
}

#[test]
fn genre_field_does_not_look_at_title() {
    let records = catalog();
    assert!(filter(&records, "emma", SearchField::Genre).is_empty());
}

#[test]
fn no_match_returns_empty() {
    assert!(filter(&catalog(), "zzz", SearchField::All).is_empty());
}

#[test]
fn empty_catalog_returns_empty() {
    assert!(filter(&[], "dune", SearchField::All).is_empty());
}

// ===== SearchField =====

#[test]
fn cycle_next_walks_every_field_and_wraps() {
    let mut field = SearchField::All;
    let mut seen = vec![field];
    for _ in 0..6 {
        field = field.cycle_next();
        seen.push(field);
    }
    assert_eq!(seen, SearchField::ALL.to_vec());
    assert_eq!(field.cycle_next(), SearchField::All);
}

#[test]
fn parses_labels_case_insensitively() {
    assert_eq!("isbn".parse::<SearchField>(), Ok(SearchField::Isbn));
    assert_eq!("Title".parse::<SearchField>(), Ok(SearchField::Title));
    assert_eq!(" ALL ".parse::<SearchField>(), Ok(SearchField::All));
    assert!("publisher".parse::<SearchField>().is_err());
}

#[test]
fn default_field_is_all() {
    assert_eq!(SearchField::default(), SearchField::All);
}

// ===== SearchQuery / SearchState =====

#[test]
fn search_query_rejects_blank() {
    assert!(SearchQuery::new("").is_none());
    assert!(SearchQuery::new("   ").is_none());
    assert_eq!(SearchQuery::new("dune").unwrap().as_str(), "dune");
}

#[test]
fn applied_query_only_for_active_state() {
    assert_eq!(SearchState::Inactive.applied_query(), None);
    let typing = SearchState::Typing {
        query: "du".to_string(),
        cursor: 2,
    };
    assert_eq!(typing.applied_query(), None);
    let active = SearchState::Active {
        query: SearchQuery::new("dune").unwrap(),
    };
    assert_eq!(active.applied_query(), Some("dune"));
}
