//! Landing page: the showcased components and their live state.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::dataset::TableName;
use crate::tui::state::AppState;

pub fn render_overview(frame: &mut Frame, area: Rect, state: &AppState) {
    let styles = state.theme.styles();

    let mut lines = vec![
        Line::from(Span::styled("Components", styles.section_header())),
        Line::from(""),
        Line::from(vec![
            Span::styled("  2 ", styles.help_key()),
            Span::styled("Input Field", styles.accent()),
            Span::styled(
                "  variants, sizes, input types, validation and clear button",
                styles.dim(),
            ),
        ]),
        Line::from(vec![
            Span::styled("  3 ", styles.help_key()),
            Span::styled("Data Table", styles.accent()),
            Span::styled(
                "  sortable columns, row selection, select all",
                styles.dim(),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled("Session", styles.section_header())),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Theme        ", styles.dim()),
            Span::styled(state.theme.name(), styles.default()),
        ]),
        Line::from(vec![
            Span::styled("  Input field  ", styles.dim()),
            Span::styled(
                state.playground.field.modifiers().join(" "),
                styles.default(),
            ),
        ]),
    ];

    for table in TableName::all() {
        let view = state.tables.view(*table);
        let sort = match &view.sort {
            Some(s) => format!(", sorted by {} {}", s.column.label(), s.direction.arrow()),
            None => String::new(),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<13}", table.title()), styles.dim()),
            Span::styled(
                format!("{} selected of {}{}", view.selected_count, view.rows.len(), sort),
                styles.default(),
            ),
        ]));
    }

    let block = Block::default()
        .title(" Overview ")
        .borders(Borders::ALL)
        .border_style(styles.border())
        .style(styles.default());
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
