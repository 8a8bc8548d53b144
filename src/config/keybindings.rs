//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crate::state::sort::Column;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions for the table view.
///
/// Text entry in the search bar and add dialog is handled before this
/// lookup, so letters bound here are free to type there.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        let mut bind = |code: KeyCode, mods: KeyModifiers, action: KeyAction| {
            bindings.insert(KeyEvent::new(code, mods), action);
        };

        // Row navigation
        bind(KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::SelectNext);
        bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::SelectNext);
        bind(KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::SelectPrev);
        bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::SelectPrev);
        bind(KeyCode::PageDown, KeyModifiers::NONE, KeyAction::PageDown);
        bind(KeyCode::Char('d'), KeyModifiers::CONTROL, KeyAction::PageDown);
        bind(KeyCode::PageUp, KeyModifiers::NONE, KeyAction::PageUp);
        bind(KeyCode::Char('u'), KeyModifiers::CONTROL, KeyAction::PageUp);
        bind(KeyCode::Char('g'), KeyModifiers::NONE, KeyAction::SelectFirst);
        bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::SelectFirst);
        bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::SelectLast);
        bind(KeyCode::Char('G'), KeyModifiers::NONE, KeyAction::SelectLast);
        bind(KeyCode::End, KeyModifiers::NONE, KeyAction::SelectLast);

        // Sorting: 1-6 follow column order
        for (digit, column) in ('1'..='6').zip(Column::ALL) {
            bind(KeyCode::Char(digit), KeyModifiers::NONE, KeyAction::SortBy(column));
        }
        bind(KeyCode::Char('0'), KeyModifiers::NONE, KeyAction::ClearSort);

        // Search
        bind(KeyCode::Char('/'), KeyModifiers::NONE, KeyAction::StartSearch);
        bind(KeyCode::Char('f'), KeyModifiers::CONTROL, KeyAction::StartSearch);
        bind(KeyCode::Char('f'), KeyModifiers::NONE, KeyAction::CycleSearchField);
        bind(KeyCode::Esc, KeyModifiers::NONE, KeyAction::ClearSearch);

        // Dialogs
        bind(KeyCode::Char('a'), KeyModifiers::NONE, KeyAction::OpenAddForm);
        bind(KeyCode::Char('e'), KeyModifiers::NONE, KeyAction::OpenExportMenu);

        // Application controls
        bind(KeyCode::Char('r'), KeyModifiers::NONE, KeyAction::Refresh);
        bind(KeyCode::Char('?'), KeyModifiers::NONE, KeyAction::Help);
        bind(KeyCode::Char('?'), KeyModifiers::SHIFT, KeyAction::Help);
        bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        Self { bindings }
    }
}
