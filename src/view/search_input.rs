//! Search input widget for rendering the search bar.

use crate::state::{SearchField, SearchState};
use crate::view::styles::Styles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search input widget.
/// Renders the editable bar while typing and the applied query afterwards.
pub struct SearchInput<'a> {
    search_state: &'a SearchState,
    field: SearchField,
    styles: &'a Styles,
}

impl<'a> SearchInput<'a> {
    /// Create new SearchInput widget.
    pub fn new(search_state: &'a SearchState, field: SearchField, styles: &'a Styles) -> Self {
        Self {
            search_state,
            field,
            styles,
        }
    }
}

/// Split `query` around a character cursor into (before, at-cursor, after).
///
/// At the end of the text the cursor cell is a blank.
fn split_at_cursor(query: &str, cursor: usize) -> (String, String, String) {
    let before: String = query.chars().take(cursor).collect();
    let mut rest = query.chars().skip(cursor);
    let at = rest.next().map_or_else(|| " ".to_string(), |c| c.to_string());
    (before, at, rest.collect())
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.search_state {
            SearchState::Typing { query, cursor } => {
                let (before, at, after) = split_at_cursor(query, *cursor);
                let line = Line::from(vec![
                    Span::raw(before),
                    Span::styled(at, Style::default().add_modifier(Modifier::REVERSED)),
                    Span::raw(after),
                ]);
                let title = format!(
                    " Search [{}]  Tab: field  Enter: apply  Esc: clear ",
                    self.field
                );

                Paragraph::new(line)
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title(title)
                            .border_style(self.styles.border),
                    )
                    .render(area, buf);
            }
            SearchState::Active { query } => {
                let title = format!(" Search [{}] (applied)  /: edit  Esc: clear ", self.field);
                Paragraph::new(Line::from(query.as_str()))
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title(title)
                            .border_style(self.styles.muted),
                    )
                    .render(area, buf);
            }
            SearchState::Inactive => {
                // No search input to show
            }
        }
    }
}
