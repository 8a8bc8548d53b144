//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state. Transitions are
//! plain methods with no IO; the view layer performs network calls and file
//! writes and feeds the outcomes back in through the `apply_*` methods.

use std::path::Path;

use chrono::NaiveDate;

use crate::model::{BookRecord, CatalogError, ExportError};
use crate::state::search::{filter, SearchField};
use crate::state::sort::{sort_records, toggle_sort, Column, SortState};
use crate::state::{AddFormState, ExportMenuState, SearchState};

/// Shown in place of the table when the first load fails.
pub const LOAD_FAILED_MESSAGE: &str = "Could not load books. Press r to retry.";

// ===== LoadState =====

/// Progress of the initial catalog load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Waiting for the first response.
    Loading,
    /// Records have been received at least once.
    Loaded,
    /// The load failed before any records arrived. Holds the reason.
    Failed(String),
}

// ===== StatusMessage =====

/// Transient message in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    /// Neutral feedback (export written, record added, ...).
    Info(String),
    /// Something went wrong but the app carries on.
    Error(String),
}

impl StatusMessage {
    /// Message text.
    pub fn text(&self) -> &str {
        match self {
            StatusMessage::Info(text) | StatusMessage::Error(text) => text,
        }
    }
}

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # State Machine
///
/// - **Load**: Loading → Loaded | Failed; Failed → Loading on retry
/// - **Search**: Inactive → Typing → Active → Inactive
/// - **Add dialog**: see [`AddFormState`]
/// - **Overlays**: export menu and help, at most one visible at a time
///
/// `visible` is always `records` filtered by the applied query and then
/// sorted by the active column; every transition that touches either input
/// recomputes it.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Full catalog as last fetched, plus records added since.
    records: Vec<BookRecord>,

    /// Rows shown in the table.
    visible: Vec<BookRecord>,

    /// Row cursor into `visible`.
    selected: usize,

    /// Initial load progress.
    pub load: LoadState,

    /// True while a fetch is outstanding.
    pub fetching: bool,

    /// Active column sort. `None` keeps server order.
    pub sort: Option<SortState>,

    /// Search bar state.
    pub search: SearchState,

    /// Field the search query is matched against.
    pub search_field: SearchField,

    /// Add dialog.
    pub add_form: AddFormState,

    /// Export format menu.
    pub export_menu: ExportMenuState,

    /// Whether the help overlay is visible.
    pub help_visible: bool,

    /// Last status bar message.
    pub status: Option<StatusMessage>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Fresh state, waiting for the first load.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            visible: Vec::new(),
            selected: 0,
            load: LoadState::Loading,
            fetching: false,
            sort: None,
            search: SearchState::Inactive,
            search_field: SearchField::All,
            add_form: AddFormState::Closed,
            export_menu: ExportMenuState::new(),
            help_visible: false,
            status: None,
        }
    }

    /// Start with a filter already applied (from the command line).
    pub fn with_initial_search(mut self, query: Option<&str>, field: SearchField) -> Self {
        self.search_field = field;
        self.search = match query.and_then(crate::state::SearchQuery::new) {
            Some(query) => SearchState::Active { query },
            None => SearchState::Inactive,
        };
        self.refresh_view();
        self
    }

    // ===== Accessors =====

    /// Full catalog.
    pub fn records(&self) -> &[BookRecord] {
        &self.records
    }

    /// Rows currently shown, filtered and sorted.
    pub fn visible_records(&self) -> &[BookRecord] {
        &self.visible
    }

    /// Row cursor.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Record under the row cursor.
    pub fn selected_record(&self) -> Option<&BookRecord> {
        self.visible.get(self.selected)
    }

    /// Whether a modal (add dialog, export menu, help) is on screen.
    pub fn modal_open(&self) -> bool {
        self.add_form.is_visible() || self.export_menu.is_visible() || self.help_visible
    }

    // ===== Fetch =====

    /// A fetch was sent.
    ///
    /// After a failed first load the table goes back to the loading
    /// indicator; once records exist they stay on screen while refreshing.
    pub fn begin_fetch(&mut self) {
        self.fetching = true;
        if let LoadState::Failed(_) = self.load {
            self.load = LoadState::Loading;
        }
        if self.load == LoadState::Loaded {
            self.status = Some(StatusMessage::Info("Refreshing...".to_string()));
        }
    }

    /// Apply the outcome of a fetch.
    ///
    /// Success replaces the catalog wholesale. Failure keeps whatever was
    /// loaded before; with nothing loaded the table shows the retry message.
    pub fn apply_fetch(&mut self, result: Result<Vec<BookRecord>, CatalogError>) {
        self.fetching = false;
        match result {
            Ok(records) => {
                self.records = records;
                self.load = LoadState::Loaded;
                self.status = None;
                self.refresh_view();
            }
            Err(e) if self.load == LoadState::Loaded => {
                self.status = Some(StatusMessage::Error(format!("Refresh failed: {e}")));
            }
            Err(e) => {
                self.records.clear();
                self.load = LoadState::Failed(e.to_string());
                self.refresh_view();
            }
        }
    }

    // ===== Add =====

    /// Open the add dialog seeded with the next EntryID.
    pub fn open_add_form(&mut self, today: NaiveDate) {
        self.export_menu.close();
        self.help_visible = false;
        self.add_form.open(&self.records, today);
    }

    /// Validate the dialog; a valid draft yields the record to post.
    pub fn submit_add_form(&mut self) -> Option<BookRecord> {
        self.add_form.submit()
    }

    /// Apply the outcome of an add.
    ///
    /// The echoed record is appended to the local catalog and the view
    /// recomputed, so it shows up under the current filter and sort without
    /// a reload. On failure the dialog reopens with the error; if the dialog
    /// was dismissed meanwhile the error goes to the status bar.
    pub fn apply_added(&mut self, result: Result<BookRecord, CatalogError>) {
        match result {
            Ok(record) => {
                self.status = Some(StatusMessage::Info(format!(
                    "Added #{} \"{}\"",
                    record.entry_id, record.title
                )));
                self.records.push(record);
                self.add_form.submit_succeeded();
                self.refresh_view();
            }
            Err(e) => {
                let reason = format!("Save failed: {e}");
                if let AddFormState::Submitting(_) = self.add_form {
                    self.add_form.submit_failed(reason);
                } else {
                    self.status = Some(StatusMessage::Error(reason));
                }
            }
        }
    }

    // ===== Export =====

    /// Record the outcome of an export in the status bar.
    pub fn apply_export(&mut self, result: Result<&Path, &ExportError>) {
        self.status = Some(match result {
            Ok(path) => StatusMessage::Info(format!("Exported to {}", path.display())),
            Err(e) => StatusMessage::Error(format!("Export failed: {e}")),
        });
    }

    // ===== Search and sort =====

    /// Replace the search state and recompute the view.
    pub fn set_search(&mut self, search: SearchState) {
        self.search = search;
        self.refresh_view();
    }

    /// Step the field selector. Re-filters if a query is applied.
    pub fn cycle_search_field(&mut self) {
        self.search_field = self.search_field.cycle_next();
        self.refresh_view();
    }

    /// Sort by a column, toggling direction on repeat.
    pub fn sort_by(&mut self, column: Column) {
        self.sort = Some(toggle_sort(self.sort, column));
        self.refresh_view();
    }

    /// Back to server order.
    pub fn clear_sort(&mut self) {
        self.sort = None;
        self.refresh_view();
    }

    /// Recompute `visible` from `records`, the applied query, and the sort.
    pub fn refresh_view(&mut self) {
        let query = self.search.applied_query().unwrap_or("");
        let mut visible = filter(&self.records, query, self.search_field);
        if let Some(sort) = self.sort {
            sort_records(&mut visible, sort);
        }
        self.visible = visible;
        self.clamp_selection();
    }

    // ===== Navigation =====

    /// Cursor down one row.
    pub fn select_next(&mut self) {
        self.move_selection(1);
    }

    /// Cursor up one row.
    pub fn select_prev(&mut self) {
        self.move_selection(-1);
    }

    /// Cursor down by a page of `rows`.
    pub fn page_down(&mut self, rows: usize) {
        self.move_selection(rows.max(1) as isize);
    }

    /// Cursor up by a page of `rows`.
    pub fn page_up(&mut self, rows: usize) {
        self.move_selection(-(rows.max(1) as isize));
    }

    /// Cursor to the first row.
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// Cursor to the last row.
    pub fn select_last(&mut self) {
        self.selected = self.visible.len().saturating_sub(1);
    }

    fn move_selection(&mut self, delta: isize) {
        let last = self.visible.len().saturating_sub(1);
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.visible.len().saturating_sub(1));
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
