//! Styling for the catalog view.
//!
//! Everything colored goes through [`Styles`] so `--no-color` and `NO_COLOR`
//! can strip color in one place. Modifiers (bold, reverse) survive without
//! color so the selection and headers stay readable.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Explicit setting, ignoring the environment.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::new(true)
    }
}

// ===== Styles =====

/// Resolved styles for every widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styles {
    /// Table header row.
    pub header: Style,
    /// Row under the cursor.
    pub selected: Style,
    /// Dialog and overlay borders.
    pub border: Style,
    /// Section titles in the help overlay.
    pub section: Style,
    /// Key names in hints and help.
    pub key: Style,
    /// Hints and secondary text.
    pub muted: Style,
    /// Error text.
    pub error: Style,
    /// Success and info text.
    pub info: Style,
    /// Focused input in the add dialog.
    pub focused_input: Style,
}

impl Styles {
    /// Build the style set for a color setting.
    pub fn new(colors: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        if colors.colors_enabled() {
            Self {
                header: bold.fg(Color::Cyan),
                selected: Style::default()
                    .bg(Color::Cyan)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                border: Style::default().fg(Color::Cyan),
                section: bold.fg(Color::Magenta),
                key: bold.fg(Color::Yellow),
                muted: Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
                error: Style::default().fg(Color::Red),
                info: Style::default().fg(Color::Green),
                focused_input: Style::default().bg(Color::DarkGray).fg(Color::White),
            }
        } else {
            Self {
                header: bold,
                selected: Style::default().add_modifier(Modifier::REVERSED),
                border: Style::default(),
                section: bold,
                key: bold,
                muted: Style::default(),
                error: bold,
                info: Style::default(),
                focused_input: Style::default().add_modifier(Modifier::REVERSED),
            }
        }
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self::new(ColorConfig::default())
    }
}

// ===== Tests =====
