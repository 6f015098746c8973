//! Data table page: demo tabs, a sortable table with row checkboxes and the
//! selection count.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use crate::dataset::{ColumnKey, TableName};
use crate::table::SelectState;
use crate::tui::state::AppState;
use crate::tui::style::Styles;
use crate::tui::table::{TableView, format_cell};

pub fn render_data_table(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let styles = state.theme.styles();
    let chunks = Layout::vertical([
        Constraint::Length(1), // Demo tabs
        Constraint::Min(3),    // Table
        Constraint::Length(1), // Selection count
    ])
    .split(area);

    render_demo_tabs(frame, chunks[0], state.demo_table, styles);

    let table = state.demo_table;
    let view = state.tables.view_mut(table);
    render_table(frame, chunks[1], table, view, styles);

    let count = Paragraph::new(Line::from(vec![
        Span::styled(format!(" {} selected", view.selected_count), styles.accent()),
        Span::styled(format!(" of {}", view.rows.len()), styles.dim()),
    ]));
    frame.render_widget(count, chunks[2]);
}

fn render_demo_tabs(frame: &mut Frame, area: Rect, active: TableName, styles: Styles) {
    let spans: Vec<Span> = TableName::all()
        .iter()
        .flat_map(|table| {
            let style = if *table == active {
                styles.tab_active()
            } else {
                styles.tab_inactive()
            };
            vec![
                Span::raw(" "),
                Span::styled(format!("[{}]", table.title()), style),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Header label with the sort arrow when this column is the sorted one.
fn header_label(view: &TableView, column: ColumnKey) -> String {
    match &view.sort {
        Some(sort) if sort.column == column => {
            format!("{} {}", column.label(), sort.direction.arrow())
        }
        _ => column.label().to_string(),
    }
}

fn column_width(column: ColumnKey) -> Constraint {
    match column {
        ColumnKey::Email => Constraint::Min(20),
        ColumnKey::Name | ColumnKey::Customer => Constraint::Min(18),
        ColumnKey::Id | ColumnKey::Category | ColumnKey::Status => Constraint::Length(12),
        ColumnKey::Date => Constraint::Length(12),
        _ => Constraint::Length(10),
    }
}

fn render_table(
    frame: &mut Frame,
    area: Rect,
    table: TableName,
    view: &mut TableView,
    styles: Styles,
) {
    let columns = table.columns();

    let mut headers = vec![Span::styled(view.select_all.glyph(), styles.table_header())];
    headers.extend(columns.iter().enumerate().map(|(i, column)| {
        let style = if i == view.focused_column {
            styles.focused_column()
        } else {
            styles.table_header()
        };
        Span::styled(header_label(view, *column), style)
    }));
    let header = Row::new(headers).style(styles.table_header()).height(1);

    let rows: Vec<Row> = view
        .rows
        .iter()
        .map(|row| {
            let glyph = if row.checked {
                SelectState::All.glyph()
            } else {
                SelectState::None.glyph()
            };
            let mut cells = vec![Span::styled(glyph, styles.accent())];
            cells.extend(columns.iter().map(|column| {
                let text = format_cell(*column, row.record.get(*column));
                if *column == ColumnKey::Status {
                    let style = styles.status(&text);
                    Span::styled(text, style)
                } else {
                    Span::styled(text, styles.default())
                }
            }));
            Row::new(cells).height(1)
        })
        .collect();

    let mut constraints = vec![Constraint::Length(3)];
    constraints.extend(columns.iter().map(|c| column_width(*c)));

    let block = Block::default()
        .title(format!(" {} ", table.title()))
        .borders(Borders::ALL)
        .border_style(styles.border())
        .style(styles.default());
    let widget = Table::new(rows, constraints)
        .header(header)
        .block(block)
        .column_spacing(2)
        .row_highlight_style(styles.selected());

    frame.render_stateful_widget(widget, area, &mut view.ratatui_state);
}
