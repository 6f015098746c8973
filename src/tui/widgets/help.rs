//! Help popup widget with page-specific key bindings.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::state::Page;
use crate::tui::style::Styles;

use super::{centered_popup, percent_of};

/// Renders the help popup centered on screen with scroll support.
pub fn render_help(frame: &mut Frame, area: Rect, page: Page, styles: Styles, scroll: &mut usize) {
    // 60% width, 80% height, clamped to 40-80 x 10-30
    let popup_area = centered_popup(
        area,
        percent_of(area.width, 60).clamp(40, 80),
        percent_of(area.height, 80).clamp(10, 30),
    );

    // Clear the area behind popup
    frame.render_widget(Clear, popup_area);

    let (title, content) = help_content(page, styles);
    let content_lines = content.len();

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(styles.border_focused())
        .style(styles.default());

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::vertical([
        Constraint::Min(1),    // Content
        Constraint::Length(1), // Footer
    ])
    .split(inner);

    let visible_height = chunks[0].height as usize;

    // Clamp scroll to valid range
    let max_scroll = content_lines.saturating_sub(visible_height);
    if *scroll > max_scroll {
        *scroll = max_scroll;
    }

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .scroll((*scroll as u16, 0))
        .style(styles.default());
    frame.render_widget(paragraph, chunks[0]);

    let scroll_info = if max_scroll > 0 {
        format!(" [{}/{}]", *scroll + 1, max_scroll + 1)
    } else {
        String::new()
    };
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Press ", styles.dim()),
        Span::styled("?", styles.warning()),
        Span::styled(" or ", styles.dim()),
        Span::styled("Esc", styles.warning()),
        Span::styled(" to close, ", styles.dim()),
        Span::styled("↑↓", styles.warning()),
        Span::styled(" to scroll", styles.dim()),
        Span::styled(scroll_info, styles.dim()),
    ]));
    frame.render_widget(footer, chunks[1]);
}

fn key_line(key: &'static str, action: &'static str, styles: Styles) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<12}", key), styles.help_key()),
        Span::styled(action, styles.dim()),
    ])
}

/// Returns help title and content lines for the given page.
fn help_content(page: Page, styles: Styles) -> (&'static str, Vec<Line<'static>>) {
    let mut lines = vec![Line::from(Span::styled("Global", styles.section_header()))];
    lines.extend([
        key_line("Tab/S-Tab", "next / previous page", styles),
        key_line("1 2 3", "overview, input field, data table", styles),
        key_line("t", "toggle light / dark theme", styles),
        key_line("?", "this help", styles),
        key_line("Esc", "dismiss status message", styles),
        key_line("q", "quit (asks for confirmation)", styles),
        key_line("Ctrl+C", "quit immediately", styles),
    ]);
    lines.push(Line::from(""));

    let title = match page {
        Page::Overview => {
            lines.push(Line::from(Span::styled(
                "The overview lists the showcased components and a live summary of their state.",
                styles.dim(),
            )));
            "Overview Help"
        }
        Page::InputField => {
            lines.push(Line::from(Span::styled("Controls", styles.section_header())));
            lines.extend([
                key_line("↑↓ / j k", "move between controls", styles),
                key_line("Space ←→", "cycle option or flip flag", styles),
                key_line("Enter / e", "edit the field", styles),
                key_line("x", "press the clear button", styles),
            ]);
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Editing", styles.section_header())));
            lines.extend([
                key_line("Esc / Enter", "stop editing", styles),
                key_line("Backspace", "delete last character", styles),
                key_line("Ctrl+U", "erase the value", styles),
            ]);
            lines.push(Line::from(""));
            lines.extend([
                Line::from(Span::styled(
                    "Number fields accept digits, '.' and '-' only. Passwords are masked.",
                    styles.dim(),
                )),
                Line::from(Span::styled(
                    "The clear button appears once the field has a value.",
                    styles.dim(),
                )),
            ]);
            "Input Field Help"
        }
        Page::DataTable => {
            lines.push(Line::from(Span::styled("Table", styles.section_header())));
            lines.extend([
                key_line("[ ] / u p o", "switch demo table", styles),
                key_line("←→ / h l", "focus column header", styles),
                key_line("s / Enter", "sort by focused column", styles),
                key_line("↑↓ / j k", "move row cursor", styles),
                key_line("PgUp PgDn", "move by page", styles),
                key_line("Home End", "first / last row", styles),
                key_line("Space", "select row", styles),
                key_line("a", "select / deselect all", styles),
            ]);
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Sorting the same column again reverses the direction.",
                styles.dim(),
            )));
            "Data Table Help"
        }
    };
    (title, lines)
}
