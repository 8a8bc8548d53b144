//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::layout::centered_percent;
use super::styles::Styles;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Shortcut groups: (category, [(keys, description)]).
const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("j/↓", "Next row"),
            ("k/↑", "Previous row"),
            ("Ctrl+d/PgDn", "Page down"),
            ("Ctrl+u/PgUp", "Page up"),
            ("g/Home", "First row"),
            ("G/End", "Last row"),
        ],
    ),
    (
        "Sorting",
        &[
            ("1-6", "Sort by column (again to reverse)"),
            ("0", "Server order"),
        ],
    ),
    (
        "Search",
        &[
            ("/", "Edit search"),
            ("f", "Cycle search field"),
            ("Tab", "Cycle field while typing"),
            ("Enter", "Apply search"),
            ("Esc", "Clear search"),
        ],
    ),
    (
        "Catalog",
        &[
            ("a", "Add a book"),
            ("e", "Export all books"),
            ("r", "Reload from server"),
        ],
    ),
    (
        "Application",
        &[("?", "Toggle this help"), ("q/Ctrl+c", "Quit")],
    ),
];

/// Build the help content lines grouped by category.
fn build_help_content(styles: &Styles) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, (category, keys)) in SHORTCUTS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(*category, styles.section)));
        for (key, description) in keys.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<14}"), styles.key),
                Span::raw(*description),
            ]));
        }
    }
    lines
}

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, styles: &Styles) {
    let popup_area = centered_percent(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, frame.area());

    // Clear the background for the overlay
    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(styles))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(styles.border),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    // Dismissal hint on the bottom border
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };
    let hint = Paragraph::new(Line::from(Span::styled(" Press Esc or ? to close ", styles.muted)))
        .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}
