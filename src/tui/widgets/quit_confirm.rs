//! Quit confirmation popup widget.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::style::Styles;

use super::{centered_popup, percent_of};

/// Renders a centered quit confirmation popup.
pub fn render_quit_confirm(frame: &mut Frame, area: Rect, styles: Styles) {
    let popup_area = centered_popup(
        area,
        percent_of(area.width, 50).clamp(40, 60),
        area.height.clamp(7, 9),
    );

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Exit showroom ")
        .borders(Borders::ALL)
        .border_style(styles.border_focused())
        .style(styles.default());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let content = vec![
        Line::from(Span::styled(
            "Are you sure you want to quit?",
            styles.default(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", styles.warning()),
            Span::styled(" or ", styles.dim()),
            Span::styled("q", styles.warning()),
            Span::styled(" → quit", styles.dim()),
        ]),
        Line::from(vec![
            Span::styled("Esc", styles.warning()),
            Span::styled(" or ", styles.dim()),
            Span::styled("n", styles.warning()),
            Span::styled(" → cancel", styles.dim()),
        ]),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}
