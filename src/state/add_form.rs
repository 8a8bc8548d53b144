//! Add-book dialog state machine.
//!
//! ```text
//! Closed --open--> Open --submit(invalid)--> Open (errors shown)
//!                  Open --submit(valid)----> Submitting --ok--> Closed
//!                                            Submitting --err-> Open (error shown)
//! Open/Submitting --cancel--> Closed
//! ```
//!
//! The dialog never talks to the network itself; a successful
//! [`AddFormState::submit`] hands back the record and the shell posts it.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::model::{format_date, next_entry_id, BookRecord, DATE_FORMAT};

/// A field in the add dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    /// EntryID (read-only, seeded on open)
    EntryId,
    /// Title
    Title,
    /// Author
    Author,
    /// Genre
    Genre,
    /// PublicationDate
    PublicationDate,
    /// ISBN
    Isbn,
}

impl FormField {
    /// Fields the user can edit, in focus order.
    pub const EDITABLE: [FormField; 5] = [
        FormField::Title,
        FormField::Author,
        FormField::Genre,
        FormField::PublicationDate,
        FormField::Isbn,
    ];

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            FormField::EntryId => "Entry ID",
            FormField::Title => "Title",
            FormField::Author => "Author",
            FormField::Genre => "Genre",
            FormField::PublicationDate => "Publication Date",
            FormField::Isbn => "ISBN",
        }
    }

    /// Message shown when the field fails validation.
    pub fn error_message(self) -> &'static str {
        match self {
            FormField::EntryId => "Entry ID is required.",
            FormField::Title => "Title is required.",
            FormField::Author => "Author is required.",
            FormField::Genre => "Genre is required.",
            FormField::PublicationDate => "Publication Date is required.",
            FormField::Isbn => "Valid ISBN is required.",
        }
    }

    fn step(self, forward: bool) -> FormField {
        let editable = Self::EDITABLE;
        let index = editable.iter().position(|f| *f == self).unwrap_or(0);
        let len = editable.len();
        let next = if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        };
        editable[next]
    }
}

/// Field-scoped validation failures. At most one message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(BTreeMap<FormField, &'static str>);

impl ValidationErrors {
    /// Message for a field, if it failed.
    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Failing fields in form order.
    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.0.keys().copied()
    }

    fn insert(&mut self, field: FormField) {
        self.0.insert(field, field.error_message());
    }
}

/// Editable contents of the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddDraft {
    /// Seeded identifier; not editable.
    pub entry_id: u64,
    /// Title input.
    pub title: String,
    /// Author input.
    pub author: String,
    /// Genre input.
    pub genre: String,
    /// Date input, `YYYY-MM-DD`.
    pub publication_date: String,
    /// ISBN input, digits only.
    pub isbn: String,
    /// Field receiving keystrokes.
    pub focus: FormField,
    /// Errors from the last submit attempt.
    pub errors: ValidationErrors,
    /// Server error from the last failed save.
    pub submit_error: Option<String>,
}

impl AddDraft {
    /// Fresh draft: seeded id, empty text, today's date.
    pub fn new(entry_id: u64, today: NaiveDate) -> Self {
        Self {
            entry_id,
            title: String::new(),
            author: String::new(),
            genre: String::new(),
            publication_date: format_date(today),
            isbn: String::new(),
            focus: FormField::Title,
            errors: ValidationErrors::default(),
            submit_error: None,
        }
    }

    /// Current text of a field.
    pub fn value(&self, field: FormField) -> String {
        match field {
            FormField::EntryId => self.entry_id.to_string(),
            FormField::Title => self.title.clone(),
            FormField::Author => self.author.clone(),
            FormField::Genre => self.genre.clone(),
            FormField::PublicationDate => self.publication_date.clone(),
            FormField::Isbn => self.isbn.clone(),
        }
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::EntryId => None,
            FormField::Title => Some(&mut self.title),
            FormField::Author => Some(&mut self.author),
            FormField::Genre => Some(&mut self.genre),
            FormField::PublicationDate => Some(&mut self.publication_date),
            FormField::Isbn => Some(&mut self.isbn),
        }
    }

    fn accepts(&self, ch: char) -> bool {
        match self.focus {
            FormField::EntryId => false,
            FormField::Isbn => ch.is_ascii_digit(),
            FormField::PublicationDate => ch.is_ascii_digit() || ch == '-',
            _ => !ch.is_control(),
        }
    }
}

/// Validate a draft into a record ready to post.
///
/// Collects one error per failing field instead of stopping at the first.
pub fn validate(draft: &AddDraft) -> Result<BookRecord, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if draft.entry_id == 0 {
        errors.insert(FormField::EntryId);
    }
    if draft.title.trim().is_empty() {
        errors.insert(FormField::Title);
    }
    if draft.author.trim().is_empty() {
        errors.insert(FormField::Author);
    }
    if draft.genre.trim().is_empty() {
        errors.insert(FormField::Genre);
    }
    let date = NaiveDate::parse_from_str(draft.publication_date.trim(), DATE_FORMAT).ok();
    if date.is_none() {
        errors.insert(FormField::PublicationDate);
    }
    let isbn = draft.isbn.trim().parse::<u64>().ok().filter(|n| *n > 0);
    if isbn.is_none() {
        errors.insert(FormField::Isbn);
    }

    match (date, isbn) {
        (Some(publication_date), Some(isbn)) if errors.is_empty() => Ok(BookRecord {
            entry_id: draft.entry_id,
            title: draft.title.trim().to_string(),
            author: draft.author.trim().to_string(),
            genre: draft.genre.trim().to_string(),
            publication_date,
            isbn,
        }),
        _ => Err(errors),
    }
}

/// Add dialog state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AddFormState {
    /// Dialog hidden.
    #[default]
    Closed,
    /// Dialog visible and editable.
    Open(AddDraft),
    /// Record handed to the client; waiting for the server.
    Submitting(AddDraft),
}

impl AddFormState {
    /// Whether the dialog is on screen.
    pub fn is_visible(&self) -> bool {
        !matches!(self, AddFormState::Closed)
    }

    /// Draft being edited or submitted.
    pub fn draft(&self) -> Option<&AddDraft> {
        match self {
            AddFormState::Closed => None,
            AddFormState::Open(draft) | AddFormState::Submitting(draft) => Some(draft),
        }
    }

    /// Open the dialog seeded with the next EntryID for `records`.
    ///
    /// No-op if the dialog is already visible.
    pub fn open(&mut self, records: &[BookRecord], today: NaiveDate) {
        if let AddFormState::Closed = self {
            *self = AddFormState::Open(AddDraft::new(next_entry_id(records), today));
        }
    }

    /// Close without saving.
    pub fn cancel(&mut self) {
        *self = AddFormState::Closed;
    }

    /// Type a character into the focused field.
    pub fn input_char(&mut self, ch: char) {
        if let AddFormState::Open(draft) = self {
            if draft.accepts(ch) {
                if let Some(text) = draft.focused_text_mut() {
                    text.push(ch);
                }
            }
        }
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        if let AddFormState::Open(draft) = self {
            if let Some(text) = draft.focused_text_mut() {
                text.pop();
            }
        }
    }

    /// Move focus to the next editable field (wraps).
    pub fn focus_next(&mut self) {
        if let AddFormState::Open(draft) = self {
            draft.focus = draft.focus.step(true);
        }
    }

    /// Move focus to the previous editable field (wraps).
    pub fn focus_prev(&mut self) {
        if let AddFormState::Open(draft) = self {
            draft.focus = draft.focus.step(false);
        }
    }

    /// Attempt to submit.
    ///
    /// Invalid drafts stay `Open` with their errors recorded and `None` is
    /// returned. A valid draft moves to `Submitting` and the record to post
    /// is returned.
    pub fn submit(&mut self) -> Option<BookRecord> {
        let AddFormState::Open(draft) = self else {
            return None;
        };

        match validate(draft) {
            Ok(record) => {
                let mut draft = draft.clone();
                draft.errors = ValidationErrors::default();
                draft.submit_error = None;
                *self = AddFormState::Submitting(draft);
                Some(record)
            }
            Err(errors) => {
                draft.errors = errors;
                draft.submit_error = None;
                None
            }
        }
    }

    /// Server accepted the record.
    pub fn submit_succeeded(&mut self) {
        if let AddFormState::Submitting(_) = self {
            *self = AddFormState::Closed;
        }
    }

    /// Server rejected the record or could not be reached.
    pub fn submit_failed(&mut self, reason: impl Into<String>) {
        if let AddFormState::Submitting(draft) = self {
            let mut draft = draft.clone();
            draft.submit_error = Some(reason.into());
            *self = AddFormState::Open(draft);
        }
    }
}

#[cfg(test)]
#[path = "add_form_tests.rs"]
mod tests;
