//! Tests for the add dialog state machine and validation.

use super::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 18).unwrap()
}

fn book(entry_id: u64) -> BookRecord {
    BookRecord {
        entry_id,
        title: "T".to_string(),
        author: "A".to_string(),
        genre: "G".to_string(),
        publication_date: today(),
        isbn: 1,
    }
}

fn open_form(records: &[BookRecord]) -> AddFormState {
    let mut form = AddFormState::Closed;
    form.open(records, today());
    form
}

fn type_into(form: &mut AddFormState, text: &str) {
    for ch in text.chars() {
        form.input_char(ch);
    }
}

/// Fill every editable field with valid data, starting from Title focus.
fn fill_valid(form: &mut AddFormState) {
    type_into(form, "Dune");
    form.focus_next();
    type_into(form, "Herbert");
    form.focus_next();
    type_into(form, "SciFi");
    form.focus_next();
    // date already seeded with today
    form.focus_next();
    type_into(form, "111");
}

// ===== Opening =====

#[test]
fn opening_seeds_next_entry_id() {
    let records = vec![book(1), book(3), book(4)];
    let form = open_form(&records);
    assert_eq!(form.draft().unwrap().entry_id, 5);
}

#[test]
fn opening_on_empty_catalog_seeds_one() {
    let form = open_form(&[]);
    assert_eq!(form.draft().unwrap().entry_id, 1);
}

#[test]
fn opening_resets_fields_and_defaults_date_to_today() {
    let form = open_form(&[]);
    let draft = form.draft().unwrap();
    assert!(draft.title.is_empty());
    assert!(draft.author.is_empty());
    assert!(draft.genre.is_empty());
    assert!(draft.isbn.is_empty());
    assert_eq!(draft.publication_date, "2024-10-18");
    assert_eq!(draft.focus, FormField::Title);
    assert!(draft.errors.is_empty());
}

#[test]
fn reopening_after_cancel_starts_fresh() {
    let mut form = open_form(&[book(1)]);
    type_into(&mut form, "leftover");
    form.cancel();
    assert_eq!(form, AddFormState::Closed);

    form.open(&[book(1), book(2)], today());
    let draft = form.draft().unwrap();
    assert!(draft.title.is_empty());
    assert_eq!(draft.entry_id, 3);
}

// ===== Editing =====

#[test]
fn focus_cycles_through_editable_fields_only() {
    let mut form = open_form(&[]);
    let mut seen = Vec::new();
    for _ in 0..5 {
        seen.push(form.draft().unwrap().focus);
        form.focus_next();
    }
    assert_eq!(seen, FormField::EDITABLE.to_vec());
    assert_eq!(form.draft().unwrap().focus, FormField::Title);

    form.focus_prev();
    assert_eq!(form.draft().unwrap().focus, FormField::Isbn);
}

#[test]
fn isbn_accepts_digits_only() {
    let mut form = open_form(&[]);
    form.focus_prev(); // Isbn
    type_into(&mut form, "97a8-0");
    assert_eq!(form.draft().unwrap().isbn, "9780");
}

#[test]
fn backspace_edits_focused_field() {
    let mut form = open_form(&[]);
    type_into(&mut form, "Dunee");
    form.backspace();
    assert_eq!(form.draft().unwrap().title, "Dune");
}

#[test]
fn input_ignored_when_closed() {
    let mut form = AddFormState::Closed;
    form.input_char('x');
    form.backspace();
    form.focus_next();
    assert_eq!(form, AddFormState::Closed);
}

// ===== Validation =====

#[test]
fn empty_form_reports_one_error_per_missing_field() {
    let mut form = open_form(&[]);
    form.focus_next();
    form.focus_next();
    form.focus_next(); // PublicationDate
    for _ in 0..10 {
        form.backspace();
    }

    assert_eq!(form.submit(), None);

    let draft = form.draft().unwrap();
    let fields: Vec<FormField> = draft.errors.fields().collect();
    assert_eq!(
        fields,
        vec![
            FormField::Title,
            FormField::Author,
            FormField::Genre,
            FormField::PublicationDate,
            FormField::Isbn,
        ]
    );
    assert_eq!(draft.errors.get(FormField::Title), Some("Title is required."));
    assert_eq!(
        draft.errors.get(FormField::Isbn),
        Some("Valid ISBN is required.")
    );
    assert!(matches!(form, AddFormState::Open(_)));
}

#[test]
fn whitespace_only_text_is_missing() {
    let mut form = open_form(&[]);
    fill_valid(&mut form);
    if let AddFormState::Open(draft) = &mut form {
        draft.author = "   ".to_string();
    }
    assert_eq!(form.submit(), None);
    let errors = &form.draft().unwrap().errors;
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(FormField::Author), Some("Author is required."));
}

#[test]
fn zero_isbn_is_rejected() {
    let mut draft = AddDraft::new(1, today());
    draft.title = "a".into();
    draft.author = "b".into();
    draft.genre = "c".into();
    draft.isbn = "0".into();
    let errors = validate(&draft).unwrap_err();
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec![FormField::Isbn]);
}

#[test]
fn unparseable_date_is_rejected() {
    let mut draft = AddDraft::new(1, today());
    draft.title = "a".into();
    draft.author = "b".into();
    draft.genre = "c".into();
    draft.isbn = "5".into();
    draft.publication_date = "2024-13-40".into();
    let errors = validate(&draft).unwrap_err();
    assert_eq!(
        errors.get(FormField::PublicationDate),
        Some("Publication Date is required.")
    );
}

#[test]
fn missing_entry_id_is_rejected() {
    let mut draft = AddDraft::new(0, today());
    draft.title = "a".into();
    draft.author = "b".into();
    draft.genre = "c".into();
    draft.isbn = "5".into();
    let errors = validate(&draft).unwrap_err();
    assert_eq!(errors.get(FormField::EntryId), Some("Entry ID is required."));
}

#[test]
fn fixing_errors_clears_them_on_next_submit() {
    let mut form = open_form(&[]);
    assert_eq!(form.submit(), None);
    assert!(!form.draft().unwrap().errors.is_empty());

    fill_valid(&mut form);
    assert!(form.submit().is_some());
    assert!(form.draft().unwrap().errors.is_empty());
}

// ===== Submission =====

#[test]
fn valid_submit_yields_trimmed_record_and_moves_to_submitting() {
    let mut form = open_form(&[book(1), book(3), book(4)]);
    type_into(&mut form, "  Dune ");
    form.focus_next();
    type_into(&mut form, "Herbert");
    form.focus_next();
    type_into(&mut form, "SciFi");
    form.focus_next();
    form.focus_next();
    type_into(&mut form, "111");

    let record = form.submit().expect("valid draft");
    assert_eq!(
        record,
        BookRecord {
            entry_id: 5,
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            genre: "SciFi".to_string(),
            publication_date: today(),
            isbn: 111,
        }
    );
    assert!(matches!(form, AddFormState::Submitting(_)));
}

#[test]
fn submit_while_submitting_is_ignored() {
    let mut form = open_form(&[]);
    fill_valid(&mut form);
    assert!(form.submit().is_some());
    assert_eq!(form.submit(), None);
    form.input_char('x');
    assert_eq!(form.draft().unwrap().isbn, "111");
}

#[test]
fn success_closes_dialog() {
    let mut form = open_form(&[]);
    fill_valid(&mut form);
    form.submit();
    form.submit_succeeded();
    assert_eq!(form, AddFormState::Closed);
}

#[test]
fn failure_reopens_with_values_and_error() {
    let mut form = open_form(&[]);
    fill_valid(&mut form);
    form.submit();
    form.submit_failed("Server returned 500");

    let AddFormState::Open(draft) = &form else {
        panic!("expected Open, got {form:?}");
    };
    assert_eq!(draft.title, "Dune");
    assert_eq!(draft.submit_error.as_deref(), Some("Server returned 500"));
}

#[test]
fn cancel_during_submit_closes() {
    let mut form = open_form(&[]);
    fill_valid(&mut form);
    form.submit();
    form.cancel();
    assert_eq!(form, AddFormState::Closed);
    // late server answer is a no-op for the dialog
    form.submit_failed("late");
    assert_eq!(form, AddFormState::Closed);
}
