//! Input field playground: control panel on the left, live field preview on
//! the right.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Position, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph};

use crate::input_field::{FieldSize, InputField, Variant};
use crate::tui::state::{AppState, InputMode, PlaygroundControl};
use crate::tui::style::Styles;

pub fn render_playground(frame: &mut Frame, area: Rect, state: &AppState) {
    let styles = state.theme.styles();
    let chunks = Layout::horizontal([Constraint::Length(32), Constraint::Min(30)]).split(area);

    render_controls(frame, chunks[0], state, styles);
    render_preview(frame, chunks[1], state, styles);
}

fn render_controls(frame: &mut Frame, area: Rect, state: &AppState, styles: Styles) {
    let playground = &state.playground;
    let items: Vec<ListItem> = PlaygroundControl::all()
        .iter()
        .map(|control| {
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {:<13}", control.label()), styles.dim()),
                Span::styled(playground.setting(*control), styles.default()),
            ]))
        })
        .collect();

    let focused = state.input_mode == InputMode::Normal;
    let block = Block::default()
        .title(" Controls ")
        .borders(Borders::ALL)
        .border_style(if focused {
            styles.border_focused()
        } else {
            styles.border()
        })
        .style(styles.default());
    let list = List::new(items)
        .block(block)
        .highlight_style(styles.selected())
        .highlight_symbol("▶");

    let mut list_state = ListState::default().with_selected(Some(playground.focused));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Preview width and padding rows for a field size.
fn field_metrics(size: FieldSize) -> (u16, u16) {
    match size {
        FieldSize::Sm => (24, 0),
        FieldSize::Md => (36, 0),
        FieldSize::Lg => (48, 1),
    }
}

fn render_preview(frame: &mut Frame, area: Rect, state: &AppState, styles: Styles) {
    let field = &state.playground.field;
    let editing = state.input_mode == InputMode::Editing;

    let outer = Block::default()
        .title(" Preview ")
        .borders(Borders::ALL)
        .border_style(styles.border())
        .style(styles.default());
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let (width, padding) = field_metrics(field.size);
    let field_height = 3 + padding * 2;
    let rows = Layout::vertical([
        Constraint::Length(1),            // Label
        Constraint::Length(field_height), // Field
        Constraint::Length(1),            // Error message
        Constraint::Length(1),
        Constraint::Length(1), // Modifiers
        Constraint::Min(0),
    ])
    .split(inner.inner(Margin::new(2, 1)));

    frame.render_widget(
        Paragraph::new(Span::styled("Label", styles.dim())),
        rows[0],
    );

    let field_area = Rect {
        width: width.min(rows[1].width),
        ..rows[1]
    };
    let text_area = render_field_box(frame, field_area, field, editing, styles);

    if field.show_error() {
        frame.render_widget(
            Paragraph::new(Span::styled(InputField::ERROR_MESSAGE, styles.error())),
            rows[2],
        );
    }

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("classes: ", styles.dim()),
            Span::styled(field.modifiers().join(" "), styles.accent()),
        ])),
        rows[4],
    );

    if editing && text_area.width > 0 {
        let col = field.display_value().chars().count() as u16;
        frame.set_cursor_position(Position::new(
            text_area.x + col.min(text_area.width.saturating_sub(1)),
            text_area.y,
        ));
    }
}

/// Draws the field chrome and value, returning the text row.
fn render_field_box(
    frame: &mut Frame,
    area: Rect,
    field: &InputField,
    editing: bool,
    styles: Styles,
) -> Rect {
    let border_style = if field.invalid {
        styles.error()
    } else if editing {
        styles.border_focused()
    } else {
        styles.border()
    };

    let mut block = match field.variant {
        Variant::Outlined => Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
        Variant::Filled => Block::default()
            .borders(Borders::BOTTOM)
            .style(styles.field_filled()),
        Variant::Ghost => Block::default(),
    }
    .border_style(border_style);
    if field.disabled {
        block = block.style(styles.dim().add_modifier(Modifier::DIM));
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (_, padding) = field_metrics(field.size);
    let text_row = Rect {
        x: inner.x + 1,
        y: inner.y + padding.min(inner.height.saturating_sub(1)),
        width: inner.width.saturating_sub(2),
        height: 1.min(inner.height),
    };

    let mut trailing = Vec::new();
    if field.show_loading() {
        trailing.push(Span::styled(" ⟳", styles.accent()));
    }
    if field.show_clear_button() {
        trailing.push(Span::styled(" ✕", styles.dim()));
    }
    let trailing_width: u16 = trailing.iter().map(|s| s.width() as u16).sum();
    let chunks = Layout::horizontal([Constraint::Min(1), Constraint::Length(trailing_width)])
        .split(text_row);

    let value = if field.value().is_empty() {
        Span::styled(InputField::PLACEHOLDER, styles.dim())
    } else if field.disabled {
        Span::styled(field.display_value(), styles.dim())
    } else {
        Span::styled(field.display_value(), styles.default())
    };
    frame.render_widget(Paragraph::new(value), chunks[0]);
    frame.render_widget(Paragraph::new(Line::from(trailing)), chunks[1]);

    chunks[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn larger_sizes_are_wider() {
        let (sm, _) = field_metrics(FieldSize::Sm);
        let (md, _) = field_metrics(FieldSize::Md);
        let (lg, lg_pad) = field_metrics(FieldSize::Lg);
        assert!(sm < md && md < lg);
        assert_eq!(lg_pad, 1);
    }
}
