//! Catalog table rendering.
//!
//! Shows the loading indicator, the retry message after a failed first load,
//! or the filtered and sorted records with the row cursor highlighted.

use crate::state::{AppState, Column, LoadState, SortState, LOAD_FAILED_MESSAGE};
use crate::view::styles::Styles;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

/// Column widths in [`Column::ALL`] order.
const WIDTHS: [Constraint; 6] = [
    Constraint::Length(6),
    Constraint::Fill(3),
    Constraint::Fill(2),
    Constraint::Fill(1),
    Constraint::Length(10),
    Constraint::Length(13),
];

/// Header label with the sort arrow when this column is sorted.
pub fn header_label(column: Column, sort: Option<SortState>) -> String {
    match sort {
        Some(sort) if sort.column == column => {
            format!("{} {}", column.header(), sort.direction.indicator())
        }
        _ => column.header().to_string(),
    }
}

fn table_block(styles: &Styles) -> Block<'static> {
    Block::default()
        .title(" Books ")
        .borders(Borders::ALL)
        .border_style(styles.border)
}

fn render_message(frame: &mut Frame, area: Rect, lines: Vec<Line<'_>>, styles: &Styles) {
    let paragraph = Paragraph::new(lines)
        .block(table_block(styles))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Render the table area for the current load state.
pub fn render_table(frame: &mut Frame, area: Rect, state: &AppState, styles: &Styles) {
    match &state.load {
        LoadState::Loading => {
            render_message(frame, area, vec![Line::from("Loading books...")], styles);
            return;
        }
        LoadState::Failed(reason) => {
            let lines = vec![
                Line::from(Span::styled(LOAD_FAILED_MESSAGE, styles.error)),
                Line::from(Span::styled(reason.as_str(), styles.muted)),
            ];
            render_message(frame, area, lines, styles);
            return;
        }
        LoadState::Loaded => {}
    }

    let records = state.visible_records();
    if records.is_empty() {
        let text = if state.records().is_empty() {
            "The catalog is empty. Press a to add a book."
        } else {
            "No books match the current search."
        };
        render_message(frame, area, vec![Line::from(Span::styled(text, styles.muted))], styles);
        return;
    }

    let header = Row::new(
        Column::ALL
            .iter()
            .map(|column| Cell::from(header_label(*column, state.sort))),
    )
    .style(styles.header);

    let rows = records
        .iter()
        .map(|record| Row::new(Column::ALL.iter().map(|column| Cell::from(column.cell(record)))));

    let table = Table::new(rows, WIDTHS)
        .header(header)
        .block(table_block(styles))
        .row_highlight_style(styles.selected)
        .column_spacing(1);

    let mut table_state = TableState::default().with_selected(Some(state.selected_index()));
    frame.render_stateful_widget(table, area, &mut table_state);
}
