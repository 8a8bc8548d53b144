//! Screen layout: search bar (when shown), table, status bar, overlays.
//!
//! Pure layout logic plus the top-level render function. Overlays are drawn
//! last so they sit on top of the table.

use crate::state::{AppState, SearchState};
use crate::view::constants::{SEARCH_INPUT_HEIGHT, STATUS_BAR_HEIGHT, TABLE_CHROME_HEIGHT};
use crate::view::styles::Styles;
use crate::view::{add_form, export_menu, help, search_input::SearchInput, status_bar, table};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Regions of the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Search bar, present while typing or while a filter is applied.
    pub search: Option<Rect>,
    /// Catalog table.
    pub table: Rect,
    /// Status bar.
    pub status: Rect,
}

/// Split the frame for the current state.
pub fn calculate_areas(area: Rect, state: &AppState) -> ScreenAreas {
    let show_search = !matches!(state.search, SearchState::Inactive);
    let search_height = if show_search { SEARCH_INPUT_HEIGHT } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(search_height),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    ScreenAreas {
        search: show_search.then_some(chunks[0]),
        table: chunks[1],
        status: chunks[2],
    }
}

/// Data rows that fit in a table area (at least one).
pub fn table_page_rows(table_area: Rect) -> usize {
    table_area.height.saturating_sub(TABLE_CHROME_HEIGHT).max(1) as usize
}

/// Render the whole screen.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &Styles) {
    let areas = calculate_areas(frame.area(), state);

    if let Some(search_area) = areas.search {
        frame.render_widget(
            SearchInput::new(&state.search, state.search_field, styles),
            search_area,
        );
    }
    table::render_table(frame, areas.table, state, styles);
    status_bar::render_status_bar(frame, areas.status, state, styles);

    if state.add_form.is_visible() {
        add_form::render_add_form(frame, &state.add_form, styles);
    } else if state.export_menu.is_visible() {
        export_menu::render_export_menu(frame, &state.export_menu, styles);
    } else if state.help_visible {
        help::render_help_overlay(frame, styles);
    }
}

/// Rect of fixed width and height centered in `area`, clamped to fit.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Rect covering a percentage of `area`, centered.
pub fn centered_percent(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    centered_fixed(
        area.width * percent_x / 100,
        area.height * percent_y / 100,
        area,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SearchQuery;

    #[test]
    fn search_bar_hidden_when_inactive() {
        let state = AppState::new();
        let areas = calculate_areas(Rect::new(0, 0, 80, 24), &state);
        assert_eq!(areas.search, None);
        assert_eq!(areas.table.height, 23);
        assert_eq!(areas.status.y, 23);
    }

    #[test]
    fn search_bar_shown_while_filter_applied() {
        let mut state = AppState::new();
        state.search = SearchState::Active {
            query: SearchQuery::new("dune").unwrap(),
        };
        let areas = calculate_areas(Rect::new(0, 0, 80, 24), &state);
        assert_eq!(areas.search.map(|r| r.height), Some(SEARCH_INPUT_HEIGHT));
        assert_eq!(areas.table.height, 20);
    }

    #[test]
    fn page_rows_excludes_chrome() {
        assert_eq!(table_page_rows(Rect::new(0, 0, 80, 23)), 20);
        assert_eq!(table_page_rows(Rect::new(0, 0, 80, 2)), 1);
    }

    #[test]
    fn centered_fixed_clamps_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered_fixed(60, 20, area), area);
        assert_eq!(centered_fixed(20, 4, area), Rect::new(10, 3, 20, 4));
    }
}
