//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing user stories by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user interactions,
//! plus an in-memory [`FakeCatalog`] standing in for the HTTP API.

use crate::client::CatalogApi;
use crate::model::{BookRecord, CatalogError};
use crate::state::AppState;
use crate::view::{TuiApp, TuiError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::time::Duration;

/// How long harness helpers wait for a background request.
const SETTLE_TIMEOUT: Duration = Duration::from_secs(5);

// ===== FakeCatalog =====

/// In-memory catalog API.
///
/// Serves a fixed record list, echoes added records, and can be told to
/// fail or to hold requests until released.
#[derive(Debug, Default)]
pub struct FakeCatalog {
    records: Mutex<Vec<BookRecord>>,
    fetch_error: Mutex<Option<CatalogError>>,
    add_error: Mutex<Option<CatalogError>>,
    fetch_calls: AtomicUsize,
    add_calls: AtomicUsize,
    blocked: Mutex<bool>,
    gate: Condvar,
}

impl FakeCatalog {
    /// Serve these records.
    pub fn with_records(records: Vec<BookRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }

    /// Fail every request with `error`.
    pub fn failing(error: CatalogError) -> Self {
        let fake = Self::default();
        fake.fail_fetch(Some(error.clone()));
        fake.fail_add(Some(error));
        fake
    }

    /// Set or clear the error returned by `fetch_all`.
    pub fn fail_fetch(&self, error: Option<CatalogError>) {
        *self.fetch_error.lock().unwrap() = error;
    }

    /// Set or clear the error returned by `add`.
    pub fn fail_add(&self, error: Option<CatalogError>) {
        *self.add_error.lock().unwrap() = error;
    }

    /// Replace the served records.
    pub fn set_records(&self, records: Vec<BookRecord>) {
        *self.records.lock().unwrap() = records;
    }

    /// Hold requests until [`Self::release_requests`].
    pub fn block_requests(&self) {
        *self.blocked.lock().unwrap() = true;
    }

    /// Let held requests proceed.
    pub fn release_requests(&self) {
        *self.blocked.lock().unwrap() = false;
        self.gate.notify_all();
    }

    /// Number of `fetch_all` calls so far.
    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    /// Number of `add` calls so far.
    pub fn add_calls(&self) -> usize {
        self.add_calls.load(Ordering::SeqCst)
    }

    fn wait_for_gate(&self) {
        let mut blocked = self.blocked.lock().unwrap();
        while *blocked {
            blocked = self.gate.wait(blocked).unwrap();
        }
    }
}

impl CatalogApi for FakeCatalog {
    fn fetch_all(&self) -> Result<Vec<BookRecord>, CatalogError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.wait_for_gate();
        if let Some(err) = self.fetch_error.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(self.records.lock().unwrap().clone())
    }

    fn add(&self, record: &BookRecord) -> Result<BookRecord, CatalogError> {
        self.add_calls.fetch_add(1, Ordering::SeqCst);
        self.wait_for_gate();
        if let Some(err) = self.add_error.lock().unwrap().clone() {
            return Err(err);
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(record.clone())
    }
}

// ===== Rendering helpers =====

/// Convert a ratatui buffer to a string representation.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are removed.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

// ===== AcceptanceTestHarness =====

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    catalog: Arc<FakeCatalog>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Start the app against `catalog` with an 100x30 terminal and wait for
    /// the initial load to finish.
    pub fn start(catalog: FakeCatalog) -> Result<Self, TuiError> {
        Self::start_with(catalog, AppState::new(), std::env::temp_dir(), 100, 30)
    }

    /// Start with custom initial state, export directory and terminal size.
    pub fn start_with(
        catalog: FakeCatalog,
        app_state: AppState,
        export_dir: PathBuf,
        width: u16,
        height: u16,
    ) -> Result<Self, TuiError> {
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        let catalog = Arc::new(catalog);
        let api: Arc<dyn CatalogApi> = catalog.clone();
        let mut app = TuiApp::new_for_test(terminal, app_state, api, export_dir);

        app.start_fetch_test();
        app.settle(SETTLE_TIMEOUT);

        Ok(Self {
            app,
            catalog,
            running: true,
        })
    }

    /// The fake API behind the app.
    pub fn catalog(&self) -> &FakeCatalog {
        &self.catalog
    }

    /// Send a single key event
    ///
    /// Returns `true` if the app quit as a result of this key.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        }
        quit
    }

    /// Type text (sends individual character key events)
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break; // Quit encountered
            }
        }
    }

    /// Wait for the outstanding request, if any, and apply its result.
    pub fn settle(&mut self) -> bool {
        self.app.settle(SETTLE_TIMEOUT)
    }

    /// True while a request is outstanding.
    pub fn is_busy(&self) -> bool {
        self.app.is_busy()
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Check if app is still running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");
        buffer_to_string(self.app.terminal().backend().buffer())
    }
}
