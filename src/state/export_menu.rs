//! State for the export format menu.

use crate::export::ExportFormat;

/// State for the export menu overlay.
///
/// # Cardinality
/// - When closed: 1 state (visible = false)
/// - When open: one state per format in [`ExportFormat::ALL`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportMenuState {
    visible: bool,
    /// Index into [`ExportFormat::ALL`]. Only meaningful when visible.
    selected_index: usize,
}

impl ExportMenuState {
    /// Create new menu state (closed).
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the menu is visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Open the menu with the first format selected.
    pub fn open(&mut self) {
        self.visible = true;
        self.selected_index = 0;
    }

    /// Close the menu.
    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Currently selected row.
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Move selection up, wrapping to the bottom.
    pub fn select_prev(&mut self) {
        let len = ExportFormat::ALL.len();
        self.selected_index = (self.selected_index + len - 1) % len;
    }

    /// Move selection down, wrapping to the top.
    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % ExportFormat::ALL.len();
    }

    /// Format under the cursor.
    pub fn selected_format(&self) -> ExportFormat {
        ExportFormat::ALL[self.selected_index % ExportFormat::ALL.len()]
    }

    /// Jump straight to a format (menu hotkeys `c`, `x`, `p`, `j`).
    pub fn select_format(&mut self, format: ExportFormat) {
        if let Some(index) = ExportFormat::ALL.iter().position(|f| *f == format) {
            self.selected_index = index;
        }
    }
}
