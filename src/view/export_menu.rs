//! Export format menu rendering.

use crate::export::ExportFormat;
use crate::state::ExportMenuState;
use crate::view::constants::EXPORT_MENU_WIDTH;
use crate::view::layout::centered_fixed;
use crate::view::styles::Styles;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState},
    Frame,
};

/// Render the export menu overlay centered on the screen.
///
/// Lists every format with its number hotkey and output file stem.
pub fn render_export_menu(frame: &mut Frame, menu: &ExportMenuState, styles: &Styles) {
    // formats + borders + footer
    let height = ExportFormat::ALL.len() as u16 + 4;
    let area = centered_fixed(EXPORT_MENU_WIDTH, height, frame.area());
    frame.render_widget(Clear, area);

    let items: Vec<ListItem> = ExportFormat::ALL
        .iter()
        .enumerate()
        .map(|(i, format)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", i + 1), styles.key),
                Span::raw(format!("{:<5}", format.label())),
                Span::styled(format!(" books*{}", format.extension()), styles.muted),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(Line::from(" Export all books ").alignment(Alignment::Center))
                .title_bottom(
                    Line::from(Span::styled(" Enter: export  Esc: close ", styles.muted))
                        .alignment(Alignment::Center),
                )
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(styles.border),
        )
        .highlight_style(styles.selected);

    let mut list_state = ListState::default().with_selected(Some(menu.selected_index()));
    frame.render_stateful_widget(list, area, &mut list_state);
}
