//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod add_form;
pub mod app_state;
pub mod export_menu;
pub mod search;
pub mod search_input_handler;
pub mod sort;

// Re-export for convenience
pub use add_form::{validate, AddDraft, AddFormState, FormField, ValidationErrors};
pub use app_state::{AppState, LoadState, StatusMessage, LOAD_FAILED_MESSAGE};
pub use export_menu::ExportMenuState;
pub use search::{filter, record_matches, SearchField, SearchQuery, SearchState};
pub use sort::{sort_records, toggle_sort, Column, SortDirection, SortState};
