//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Block;

use super::state::{AppState, Page};
use super::widgets::{
    render_data_table, render_footer, render_header, render_help, render_overview,
    render_playground, render_quit_confirm,
};

/// Main render function.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    let styles = state.theme.styles();

    // Paint the page background so the light scheme covers the terminal.
    frame.render_widget(Block::default().style(styles.default()), area);

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(5),    // Page
        Constraint::Length(1), // Footer
    ])
    .split(area);

    render_header(frame, chunks[0], state);
    render_content(frame, chunks[1], state);
    render_footer(frame, chunks[2], state);

    if state.show_help {
        render_help(frame, area, state.page, styles, &mut state.help_scroll);
    }

    // Quit confirmation popup (rendered last to overlay everything)
    if state.show_quit_confirm {
        render_quit_confirm(frame, area, styles);
    }
}

fn render_content(frame: &mut Frame, area: Rect, state: &mut AppState) {
    match state.page {
        Page::Overview => render_overview(frame, area, state),
        Page::InputField => render_playground(frame, area, state),
        Page::DataTable => render_data_table(frame, area, state),
    }
}
