//! Catalog record type and its wire format.
//!
//! The remote API speaks PascalCase field names (`EntryID`, `Title`, ...)
//! and sends `PublicationDate` either as a plain date or as a full
//! ISO-8601 timestamp. Everything downstream (search, table, exports)
//! works with the normalized [`NaiveDate`].

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Canonical date rendering used by search, table cells and exports.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One catalog entry (a book).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Catalog-wide identifier, assigned client-side as max + 1.
    #[serde(rename = "EntryID")]
    pub entry_id: u64,
    /// Book title.
    #[serde(rename = "Title")]
    pub title: String,
    /// Author name.
    #[serde(rename = "Author")]
    pub author: String,
    /// Free-text genre.
    #[serde(rename = "Genre")]
    pub genre: String,
    /// Publication date (calendar date, no time component).
    #[serde(
        rename = "PublicationDate",
        serialize_with = "serialize_date",
        deserialize_with = "deserialize_date"
    )]
    pub publication_date: NaiveDate,
    /// ISBN stored as a plain positive integer.
    #[serde(rename = "ISBN")]
    pub isbn: u64,
}

impl BookRecord {
    /// Publication date as `YYYY-MM-DD`.
    pub fn date_string(&self) -> String {
        format_date(self.publication_date)
    }
}

/// Render a date in the canonical `YYYY-MM-DD` form.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a publication date sent by the API.
///
/// Accepts `YYYY-MM-DD`, an RFC 3339 timestamp, or a local timestamp
/// without offset (`1965-08-01T00:00:00`, optional fraction). Offset
/// timestamps are reduced to their UTC calendar date; local ones keep
/// their written date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc().date());
    }
    NaiveDateTime::parse_from_str(raw, LOCAL_TIMESTAMP_FORMAT)
        .ok()
        .map(|dt| dt.date())
}

/// ISO-8601 timestamp with no offset; `%.f` also accepts no fraction.
const LOCAL_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Next identifier for a new record: highest existing EntryID plus one.
///
/// An empty catalog starts at 1. The value is advisory; nothing reserves
/// it server-side before the record is posted.
pub fn next_entry_id(records: &[BookRecord]) -> u64 {
    records
        .iter()
        .map(|r| r.entry_id)
        .max()
        .map_or(1, |max| max.saturating_add(1))
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_date(*date))
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid PublicationDate: {raw:?}")))
}
