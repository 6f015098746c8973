//! Footer line: status message or page key hints.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::{AppState, InputMode, Page};

pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let styles = state.theme.styles();

    if let Some(msg) = &state.status_message {
        frame.render_widget(
            Paragraph::new(format!(" {}", msg)).style(styles.warning()),
            area,
        );
        return;
    }

    let hints: &[(&str, &str)] = match (state.page, state.input_mode) {
        (_, InputMode::Editing) => &[("Esc/Enter", "done"), ("Ctrl+U", "erase")],
        (Page::Overview, _) => &[("Tab", "next page"), ("t", "theme")],
        (Page::InputField, _) => &[
            ("↑↓", "control"),
            ("Space", "change"),
            ("e", "edit"),
            ("x", "clear"),
        ],
        (Page::DataTable, _) => &[
            ("[ ]", "table"),
            ("←→", "column"),
            ("s", "sort"),
            ("Space", "select"),
            ("a", "all"),
        ],
    };

    let mut spans = vec![Span::raw(" ")];
    for (key, action) in hints.iter().chain(&[("?", "help"), ("q", "quit")]) {
        spans.push(Span::styled(*key, styles.help_key()));
        spans.push(Span::styled(format!(" {}  ", action), styles.dim()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
