//! Bottom status bar: counts, active filter, last message, help hint.

use crate::state::{AppState, LoadState, StatusMessage};
use crate::view::styles::Styles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Record count and filter summary, e.g. `2/10 books | Title: "dune"`.
pub fn summary_text(state: &AppState) -> String {
    let mut text = format!(
        "{}/{} books",
        state.visible_records().len(),
        state.records().len()
    );
    if let Some(query) = state.search.applied_query() {
        text.push_str(&format!(" | {}: \"{}\"", state.search_field, query));
    }
    if state.fetching && state.load == LoadState::Loaded {
        text.push_str(" | refreshing");
    }
    text
}

/// Render the status bar.
pub fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &Styles) {
    let mut spans = vec![Span::raw(" "), Span::raw(summary_text(state))];

    if let Some(status) = &state.status {
        let style = match status {
            StatusMessage::Info(_) => styles.info,
            StatusMessage::Error(_) => styles.error,
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(status.text().to_string(), style));
    }

    spans.push(Span::styled("  ?: help  q: quit", styles.muted));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
