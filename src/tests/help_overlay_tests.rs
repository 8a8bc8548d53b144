//! Help overlay behavior through the full key dispatch path.

use super::sample_catalog;
use crate::test_harness::{AcceptanceTestHarness, FakeCatalog};
use crossterm::event::{KeyCode, KeyModifiers};

#[test]
fn question_mark_toggles_help() {
    let mut harness = AcceptanceTestHarness::start(FakeCatalog::with_records(sample_catalog())).unwrap();

    harness.send_key(KeyCode::Char('?'));
    assert!(harness.state().help_visible);
    let screen = harness.render_to_string();
    assert!(screen.contains("Keyboard Shortcuts"));
    assert!(screen.contains("Add a book"));

    harness.send_key(KeyCode::Char('?'));
    assert!(!harness.state().help_visible);
    assert!(!harness.render_to_string().contains("Keyboard Shortcuts"));
}

#[test]
fn shifted_question_mark_opens_help() {
    let mut harness = AcceptanceTestHarness::start(FakeCatalog::with_records(vec![])).unwrap();
    harness.send_key_with_mods(KeyCode::Char('?'), KeyModifiers::SHIFT);
    assert!(harness.state().help_visible);
}

#[test]
fn help_blocks_other_shortcuts() {
    let mut harness = AcceptanceTestHarness::start(FakeCatalog::with_records(sample_catalog())).unwrap();

    harness.send_key(KeyCode::Char('?'));
    harness.send_key(KeyCode::Char('a'));
    harness.send_key(KeyCode::Char('e'));
    harness.send_key(KeyCode::Char('j'));

    assert!(!harness.state().add_form.is_visible());
    assert!(!harness.state().export_menu.is_visible());
    assert_eq!(harness.state().selected_index(), 0);
}

#[test]
fn q_quits_from_help_and_ctrl_c_from_dialogs() {
    let mut harness = AcceptanceTestHarness::start(FakeCatalog::with_records(sample_catalog())).unwrap();
    harness.send_key(KeyCode::Char('?'));
    assert!(harness.send_key(KeyCode::Char('q')));

    let mut harness = AcceptanceTestHarness::start(FakeCatalog::with_records(sample_catalog())).unwrap();
    harness.send_key(KeyCode::Char('a'));
    assert!(!harness.send_key(KeyCode::Char('q')));
    assert!(harness.send_key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
}
