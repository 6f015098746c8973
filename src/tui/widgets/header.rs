//! Header widget showing pages, theme toggle and clock.

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::{AppState, Page};

/// Renders the header bar.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let styles = state.theme.styles();
    let chunks = Layout::horizontal([
        Constraint::Length(12), // Title
        Constraint::Min(20),    // Pages
        Constraint::Length(14), // Theme toggle
        Constraint::Length(10), // Clock
    ])
    .split(area);

    frame.render_widget(
        Paragraph::new(" showroom ").style(styles.header()),
        chunks[0],
    );

    // Pages
    let pages: Vec<Span> = Page::all()
        .iter()
        .enumerate()
        .flat_map(|(i, page)| {
            let style = if *page == state.page {
                styles.tab_active().bg(styles.palette().header_bg)
            } else {
                styles.header()
            };
            vec![
                Span::styled(format!(" {}:", i + 1), styles.header()),
                Span::styled(format!("{} ", page.name()), style),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(pages)).style(styles.header()),
        chunks[1],
    );

    let toggle = format!("{} t:{} ", state.theme.icon(), state.theme.toggle().name());
    frame.render_widget(
        Paragraph::new(toggle)
            .alignment(Alignment::Right)
            .style(styles.header()),
        chunks[2],
    );

    let clock = Local::now().format("%H:%M:%S ").to_string();
    frame.render_widget(
        Paragraph::new(clock)
            .alignment(Alignment::Right)
            .style(styles.header()),
        chunks[3],
    );
}
