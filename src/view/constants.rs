//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

use std::time::Duration;

/// How long the event loop waits for input before polling the network.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Height of the status bar in lines.
///
/// Single line for record counts, filter, and the last message.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the search input widget in lines (border + text).
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Lines of table chrome: top border, header row, bottom border.
pub const TABLE_CHROME_HEIGHT: u16 = 3;

/// Width of the add dialog in columns.
pub const ADD_FORM_WIDTH: u16 = 60;

/// Width of the export menu in columns.
pub const EXPORT_MENU_WIDTH: u16 = 36;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;
