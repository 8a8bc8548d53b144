//! Domain-level keyboard actions independent of key bindings.

use crate::state::sort::Column;

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
/// Text entry inside the search bar and the add dialog bypasses this table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Row navigation
    /// Move the row cursor down. Default: j/↓
    SelectNext,
    /// Move the row cursor up. Default: k/↑
    SelectPrev,
    /// Move the row cursor down one page. Default: Ctrl+d/Page Down
    PageDown,
    /// Move the row cursor up one page. Default: Ctrl+u/Page Up
    PageUp,
    /// Jump to the first row. Default: g/Home
    SelectFirst,
    /// Jump to the last row. Default: G/End
    SelectLast,

    // Sorting
    /// Sort by a column; repeating toggles direction. Default: 1-6
    SortBy(Column),
    /// Restore server order. Default: 0
    ClearSort,

    // Search
    /// Open the search bar. Default: //Ctrl+f
    StartSearch,
    /// Cycle the search field selector. Default: f
    CycleSearchField,
    /// Remove the active filter. Default: Esc
    ClearSearch,

    // Dialogs
    /// Open the add-book dialog. Default: a
    OpenAddForm,
    /// Open the export menu. Default: e
    OpenExportMenu,

    // Application
    /// Re-fetch the catalog from the server. Default: r
    Refresh,
    /// Toggle the help overlay. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
