//! TUI rendering and terminal management (impure shell)

mod add_form;
pub mod constants;
mod export_menu;
mod help;
mod layout;
mod search_input;
mod status_bar;
mod styles;
mod table;

pub use help::render_help_overlay;
pub use search_input::SearchInput;
pub use styles::{ColorConfig, Styles};

use crate::client::CatalogApi;
use crate::config::keybindings::KeyBindings;
use crate::export::{write_export, ExportFormat};
use crate::model::{AppError, KeyAction};
use crate::source::{CatalogEvent, CatalogSource};
use crate::state::{search_input_handler, AppState, LoadState, SearchField, SearchState, StatusMessage};
use chrono::{Local, Utc};
use constants::TICK_INTERVAL;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Page size used before the first frame has been laid out.
const DEFAULT_PAGE_ROWS: usize = 10;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<TuiError> for AppError {
    fn from(err: TuiError) -> Self {
        match err {
            TuiError::Io(e) => AppError::Terminal(e),
        }
    }
}

/// Startup options for the TUI, resolved from config and CLI.
#[derive(Debug, Clone)]
pub struct TuiOptions {
    /// Directory exports are written to.
    pub export_dir: PathBuf,
    /// Whether to use colors.
    pub colors: ColorConfig,
    /// Query applied on startup.
    pub initial_search: Option<String>,
    /// Field the query is matched against.
    pub search_field: SearchField,
}

impl Default for TuiOptions {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from("."),
            colors: ColorConfig::default(),
            initial_search: None,
            search_field: SearchField::All,
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    source: CatalogSource,
    key_bindings: KeyBindings,
    styles: Styles,
    export_dir: PathBuf,
    /// Table rows visible in the last frame, for paging
    page_rows: usize,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(api: Arc<dyn CatalogApi>, options: TuiOptions) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let app_state = AppState::new()
            .with_initial_search(options.initial_search.as_deref(), options.search_field);

        Ok(Self {
            terminal,
            app_state,
            source: CatalogSource::new(api),
            key_bindings: KeyBindings::default(),
            styles: Styles::new(options.colors),
            export_dir: options.export_dir,
            page_rows: DEFAULT_PAGE_ROWS,
        })
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Finished network requests are
    /// picked up on every tick.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.start_fetch();
        self.draw()?;

        loop {
            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(_, _) => self.draw()?,
                    _ => {}
                }
            }

            if self.poll_source() {
                self.draw()?;
            }
        }
    }

    /// Apply a finished request, if any. Returns true if state changed.
    fn poll_source(&mut self) -> bool {
        match self.source.poll() {
            Some(event) => {
                self.apply_event(event);
                true
            }
            None => false,
        }
    }

    fn apply_event(&mut self, event: CatalogEvent) {
        match event {
            CatalogEvent::Fetched(result) => {
                match &result {
                    Ok(records) => info!(count = records.len(), "Catalog loaded"),
                    Err(e) => warn!(error = %e, "Catalog load failed"),
                }
                self.app_state.apply_fetch(result);
            }
            CatalogEvent::Added(result) => {
                match &result {
                    Ok(record) => info!(entry_id = record.entry_id, "Record added"),
                    Err(e) => warn!(error = %e, "Add failed"),
                }
                self.app_state.apply_added(result);
            }
        }
    }

    fn start_fetch(&mut self) {
        if self.source.request_fetch() {
            self.app_state.begin_fetch();
        } else {
            self.app_state.status = Some(StatusMessage::Error(
                "Still waiting for the server...".to_string(),
            ));
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C should always quit, even inside dialogs
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.app_state.add_form.is_visible() {
            self.handle_add_form_key(key);
            return false;
        }

        if self.app_state.export_menu.is_visible() {
            self.handle_export_menu_key(key);
            return false;
        }

        if self.app_state.help_visible {
            match key.code {
                KeyCode::Esc | KeyCode::Char('?') => self.app_state.help_visible = false,
                KeyCode::Char('q') => return true,
                _ => {}
            }
            return false;
        }

        if let SearchState::Typing { .. } = self.app_state.search {
            if self.handle_search_typing_key(key) {
                return false;
            }
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        debug!(?action, "key action");
        self.dispatch(action)
    }

    /// Keys while the add dialog is open. Everything is consumed.
    fn handle_add_form_key(&mut self, key: KeyEvent) {
        let form = &mut self.app_state.add_form;
        match key.code {
            KeyCode::Esc => form.cancel(),
            KeyCode::Tab | KeyCode::Down => form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => {
                let Some(record) = self.app_state.submit_add_form() else {
                    return;
                };
                if !self.source.request_add(record) {
                    self.app_state
                        .add_form
                        .submit_failed("Another request is still running. Try again.");
                }
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.input_char(ch)
            }
            _ => {}
        }
    }

    /// Keys while the export menu is open. Everything is consumed.
    fn handle_export_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('e') => self.app_state.export_menu.close(),
            KeyCode::Up | KeyCode::Char('k') => self.app_state.export_menu.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.app_state.export_menu.select_next(),
            KeyCode::Enter => self.export_selected(),
            KeyCode::Char(digit @ '1'..='4') => {
                let index = digit as usize - '1' as usize;
                self.app_state
                    .export_menu
                    .select_format(ExportFormat::ALL[index]);
                self.export_selected();
            }
            _ => {}
        }
    }

    fn export_selected(&mut self) {
        let format = self.app_state.export_menu.selected_format();
        self.app_state.export_menu.close();

        let result = write_export(
            self.app_state.records(),
            format,
            &self.export_dir,
            Utc::now(),
        );
        if let Err(e) = &result {
            warn!(format = format.label(), error = %e, "Export failed");
        }
        self.app_state.apply_export(result.as_deref());
    }

    /// Text entry in the search bar. Returns true if the key was consumed.
    fn handle_search_typing_key(&mut self, key: KeyEvent) -> bool {
        let search = self.app_state.search.clone();
        let next = match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                search_input_handler::handle_char_input(search, ch)
            }
            KeyCode::Backspace => search_input_handler::handle_backspace(search),
            KeyCode::Left => search_input_handler::handle_cursor_left(search),
            KeyCode::Right => search_input_handler::handle_cursor_right(search),
            KeyCode::Enter => search_input_handler::submit_search(search),
            KeyCode::Esc => search_input_handler::cancel_search(search),
            KeyCode::Tab => {
                self.app_state.cycle_search_field();
                return true;
            }
            _ => return false,
        };
        self.app_state.set_search(next);
        true
    }

    /// Execute a bound action. Returns true on quit.
    fn dispatch(&mut self, action: KeyAction) -> bool {
        let state = &mut self.app_state;
        match action {
            KeyAction::SelectNext => state.select_next(),
            KeyAction::SelectPrev => state.select_prev(),
            KeyAction::PageDown => state.page_down(self.page_rows),
            KeyAction::PageUp => state.page_up(self.page_rows),
            KeyAction::SelectFirst => state.select_first(),
            KeyAction::SelectLast => state.select_last(),
            KeyAction::SortBy(column) => state.sort_by(column),
            KeyAction::ClearSort => state.clear_sort(),
            KeyAction::StartSearch => {
                let search = search_input_handler::activate_search_input(state.search.clone());
                state.set_search(search);
            }
            KeyAction::CycleSearchField => state.cycle_search_field(),
            KeyAction::ClearSearch => state.set_search(SearchState::Inactive),
            KeyAction::OpenAddForm => {
                if state.load == LoadState::Loaded {
                    state.open_add_form(Local::now().date_naive());
                } else {
                    state.status = Some(StatusMessage::Error(
                        "Wait for the catalog to load before adding.".to_string(),
                    ));
                }
            }
            KeyAction::OpenExportMenu => {
                if state.load == LoadState::Loaded {
                    state.export_menu.open();
                } else {
                    state.status = Some(StatusMessage::Error(
                        "Nothing to export until the catalog has loaded.".to_string(),
                    ));
                }
            }
            KeyAction::Refresh => self.start_fetch(),
            KeyAction::Help => state.help_visible = true,
            KeyAction::Quit => return true,
        }
        false
    }

    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let frame_area = Rect::new(0, 0, size.width, size.height);
        let areas = layout::calculate_areas(frame_area, &self.app_state);
        self.page_rows = layout::table_page_rows(areas.table);

        let state = &self.app_state;
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, state, styles);
        })?;

        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing and benchmarking within the crate.
// They are gated with cfg to ensure they're not accessible from outside the crate.
//
// DO NOT use these in production code.

#[cfg(any(test, feature = "bench-internals"))]
#[allow(dead_code)] // Not all helpers used in every context (tests vs benchmarks)
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without touching the real terminal.
    ///
    /// The initial fetch is not started; call [`Self::start_fetch_test`].
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        api: Arc<dyn CatalogApi>,
        export_dir: PathBuf,
    ) -> Self {
        Self {
            terminal,
            app_state,
            source: CatalogSource::new(api),
            key_bindings: KeyBindings::default(),
            styles: Styles::new(ColorConfig::new(false)),
            export_dir,
            page_rows: DEFAULT_PAGE_ROWS,
        }
    }

    /// Get reference to app state (test-only accessor)
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Handle a single keyboard event (test-only accessor)
    ///
    /// Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Issue the startup fetch (test-only accessor)
    pub(crate) fn start_fetch_test(&mut self) {
        self.start_fetch();
    }

    /// Block until the outstanding request finishes and apply it.
    ///
    /// Returns false if nothing was pending or the wait timed out.
    pub(crate) fn settle(&mut self, timeout: std::time::Duration) -> bool {
        match self.source.wait(timeout) {
            Some(event) => {
                self.apply_event(event);
                true
            }
            None => false,
        }
    }

    /// True while a request is outstanding (test-only accessor)
    pub(crate) fn is_busy(&self) -> bool {
        self.source.is_busy()
    }

    /// Render a single frame (test-only accessor)
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Get reference to terminal (test-only accessor)
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

// ===== Benchmark Helpers =====
//
// Public wrappers for benchmarks when bench-internals feature is enabled.

#[cfg(feature = "bench-internals")]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for benchmarking. Delegates to new_for_test.
    pub fn new_for_bench(
        terminal: Terminal<B>,
        app_state: AppState,
        api: Arc<dyn CatalogApi>,
        export_dir: PathBuf,
    ) -> Self {
        Self::new_for_test(terminal, app_state, api, export_dir)
    }

    /// Handle a single keyboard event. Delegates to handle_key_test.
    pub fn handle_key_bench(&mut self, key: KeyEvent) -> bool {
        self.handle_key_test(key)
    }

    /// Render a single frame. Delegates to render_test.
    pub fn render_bench(&mut self) -> Result<(), TuiError> {
        self.render_test()
    }
}

/// Initialize and run the TUI against a catalog API
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_client(api: Arc<dyn CatalogApi>, options: TuiOptions) -> Result<(), TuiError> {
    let mut app = TuiApp::new(api, options)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
