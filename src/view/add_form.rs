//! Add-book dialog rendering.
//!
//! One line per field, with the field's validation message directly under
//! it when the last submit rejected it. The EntryID row is read-only.

use crate::state::{AddDraft, AddFormState, FormField};
use crate::view::constants::ADD_FORM_WIDTH;
use crate::view::layout::centered_fixed;
use crate::view::styles::Styles;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

const LABEL_WIDTH: usize = 18;

/// Columns left for a value: dialog minus borders, focus marker, label and cursor.
const VALUE_WIDTH: usize = ADD_FORM_WIDTH as usize - 2 - 2 - LABEL_WIDTH - 1;

/// The end of `value` that fits in `max_width` terminal columns.
///
/// Long input scrolls left so the cursor at the end stays visible.
fn visible_tail(value: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = value.len();
    for (index, ch) in value.char_indices().rev() {
        width += ch.width().unwrap_or(0);
        if width > max_width {
            break;
        }
        start = index;
    }
    &value[start..]
}

/// Fields in display order: the read-only id first, then the editable ones.
fn display_fields() -> impl Iterator<Item = FormField> {
    std::iter::once(FormField::EntryId).chain(FormField::EDITABLE)
}

/// Dialog body lines for a draft.
pub fn form_lines(draft: &AddDraft, submitting: bool, styles: &Styles) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for field in display_fields() {
        let focused = !submitting && field == draft.focus;
        let marker = if focused { "> " } else { "  " };
        let mut value = visible_tail(&draft.value(field), VALUE_WIDTH).to_string();
        if focused {
            value.push('_');
        }
        let value_style = if focused {
            styles.focused_input
        } else if field == FormField::EntryId {
            styles.muted
        } else {
            Default::default()
        };

        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{:<LABEL_WIDTH$}", field.label()), styles.key),
            Span::styled(value, value_style),
        ]));

        if let Some(message) = draft.errors.get(field) {
            lines.push(Line::from(Span::styled(
                format!("  {:LABEL_WIDTH$}{message}", ""),
                styles.error,
            )));
        }
    }

    lines.push(Line::default());
    if submitting {
        lines.push(Line::from(Span::styled("Saving...", styles.info)));
    } else if let Some(reason) = &draft.submit_error {
        lines.push(Line::from(Span::styled(reason.clone(), styles.error)));
    }

    lines
}

/// Render the dialog if it is visible.
pub fn render_add_form(frame: &mut Frame, form: &AddFormState, styles: &Styles) {
    let (draft, submitting) = match form {
        AddFormState::Closed => return,
        AddFormState::Open(draft) => (draft, false),
        AddFormState::Submitting(draft) => (draft, true),
    };

    let lines = form_lines(draft, submitting, styles);
    let height = lines.len() as u16 + 3;
    let area = centered_fixed(ADD_FORM_WIDTH, height, frame.area());
    frame.render_widget(Clear, area);

    let hint = " Tab/↑/↓: field  Enter: save  Esc: cancel ";
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(Line::from(" Add Book ").alignment(Alignment::Center))
            .title_bottom(Line::from(Span::styled(hint, styles.muted)).alignment(Alignment::Center))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles.border),
    );
    frame.render_widget(paragraph, area);
}
