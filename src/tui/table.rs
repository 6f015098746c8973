//! Terminal rendering surface for the demo tables: mirrored rows, checkbox
//! states and a row cursor that follows its record across re-sorts.

use ratatui::widgets::TableState as RatatuiTableState;

use crate::dataset::{ColumnKey, Record, RecordId, TableName, Value};
use crate::table::{RenderSurface, SelectState, SelectionSet, SortState};


/// Rendered row: the record plus its checkbox.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub record: Record,
    pub checked: bool,
}

/// Screen state of one demo table.
#[derive(Debug, Clone, Default)]
pub struct TableView {
    pub rows: Vec<RowView>,
    pub select_all: SelectState,
    pub selected_count: usize,
    pub sort: Option<SortState>,
    /// Row cursor index.
    pub cursor: usize,
    /// Header column with keyboard focus.
    pub focused_column: usize,
    /// Record under the cursor; followed across re-orders.
    pub tracked_id: Option<RecordId>,
    pub ratatui_state: RatatuiTableState,
}

impl TableView {
    pub fn current_row(&self) -> Option<&RowView> {
        self.rows.get(self.cursor)
    }

    pub fn current_row_mut(&mut self) -> Option<&mut RowView> {
        self.rows.get_mut(self.cursor)
    }

    pub fn focus_next_column(&mut self, columns: usize) {
        if columns > 0 {
            self.focused_column = (self.focused_column + 1) % columns;
        }
    }

    pub fn focus_prev_column(&mut self, columns: usize) {
        if columns > 0 {
            self.focused_column = (self.focused_column + columns - 1) % columns;
        }
    }

    /// Moves the cursor by `delta` rows, clamped to the table, and tracks the
    /// record it lands on.
    pub fn move_cursor(&mut self, delta: isize) {
        self.place_cursor(self.cursor.saturating_add_signed(delta));
    }

    pub fn cursor_to_first(&mut self) {
        self.place_cursor(0);
    }

    pub fn cursor_to_last(&mut self) {
        self.place_cursor(self.rows.len().saturating_sub(1));
    }

    /// Explicit movement wins over the tracked record.
    fn place_cursor(&mut self, index: usize) {
        self.cursor = index;
        self.tracked_id = None;
        self.resolve_cursor();
    }

    /// Moves the cursor onto the tracked record if it is still present,
    /// otherwise clamps it. Always re-tracks the record under the cursor.
    pub fn resolve_cursor(&mut self) {
        let len = self.rows.len();
        if len == 0 {
            self.cursor = 0;
            self.tracked_id = None;
            self.ratatui_state.select(None);
            return;
        }

        let tracked_pos = self
            .tracked_id
            .as_ref()
            .and_then(|tid| self.rows.iter().position(|r| r.record.id() == tid));
        match tracked_pos {
            Some(pos) => self.cursor = pos,
            None => {
                self.tracked_id = None;
                self.cursor = self.cursor.min(len - 1);
            }
        }

        self.tracked_id = self.rows.get(self.cursor).map(|r| r.record.id().clone());
        self.ratatui_state.select(Some(self.cursor));
    }
}

/// Views of all demo tables. This is the TUI's [`RenderSurface`].
#[derive(Debug, Clone, Default)]
pub struct TableViews {
    users: TableView,
    products: TableView,
    orders: TableView,
}

impl TableViews {
    pub fn view(&self, table: TableName) -> &TableView {
        match table {
            TableName::Users => &self.users,
            TableName::Products => &self.products,
            TableName::Orders => &self.orders,
        }
    }

    pub fn view_mut(&mut self, table: TableName) -> &mut TableView {
        match table {
            TableName::Users => &mut self.users,
            TableName::Products => &mut self.products,
            TableName::Orders => &mut self.orders,
        }
    }
}

impl RenderSurface for TableViews {
    fn render_rows(&mut self, table: TableName, records: &[Record], selection: &SelectionSet) {
        let view = self.view_mut(table);
        view.rows = records
            .iter()
            .map(|r| RowView {
                record: r.clone(),
                checked: selection.contains(r.id()),
            })
            .collect();
        view.resolve_cursor();
    }

    fn set_select_all_state(&mut self, table: TableName, state: SelectState) {
        self.view_mut(table).select_all = state;
    }

    fn set_selected_count(&mut self, table: TableName, count: usize) {
        self.view_mut(table).selected_count = count;
    }

    fn set_rows_checked(&mut self, table: TableName, checked: bool) {
        for row in &mut self.view_mut(table).rows {
            row.checked = checked;
        }
    }

    fn set_sort_indicator(&mut self, table: TableName, sort: Option<SortState>) {
        self.view_mut(table).sort = sort;
    }
}

/// Formats a cell for display. Currency columns get a dollar sign and two
/// decimals.
pub fn format_cell(column: ColumnKey, value: Option<&Value>) -> String {
    match value {
        Some(Value::Number(n)) if column.is_currency() => format!("${:.2}", n),
        Some(v) => v.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DatasetStore;
    use crate::table::{TableController, TableEvent};

    fn setup() -> (TableController, TableViews) {
        let controller = TableController::new(DatasetStore::sample().unwrap());
        let mut views = TableViews::default();
        controller.render_all(&mut views);
        (controller, views)
    }

    #[test]
    fn initial_render_mirrors_store() {
        let (_, views) = setup();
        let users = views.view(TableName::Users);
        assert_eq!(users.rows.len(), 5);
        assert!(users.rows.iter().all(|r| !r.checked));
        assert_eq!(users.select_all, SelectState::None);
        assert_eq!(users.tracked_id, Some(RecordId::Number(1)));
    }

    #[test]
    fn cursor_follows_record_across_sort() {
        let (mut controller, mut views) = setup();
        let view = views.view_mut(TableName::Users);
        view.move_cursor(1);
        assert_eq!(view.tracked_id, Some(RecordId::Number(2)));

        controller.handle(
            TableEvent::SortRequested {
                table: TableName::Users,
                column: ColumnKey::Name,
            },
            &mut views,
        );
        let view = views.view(TableName::Users);
        // Jane Smith is fourth by name.
        assert_eq!(view.cursor, 3);
        assert_eq!(
            view.current_row().map(|r| r.record.id().clone()),
            Some(RecordId::Number(2))
        );
        assert!(view.sort.is_some());
    }

    #[test]
    fn navigation_clamps_to_rows() {
        let (_, mut views) = setup();
        let view = views.view_mut(TableName::Orders);
        view.cursor_to_last();
        assert_eq!(view.cursor, 4);
        assert_eq!(view.tracked_id, Some(RecordId::from("ORD-005")));
        view.move_cursor(20);
        assert_eq!(view.cursor, 4);
        view.move_cursor(-2);
        assert_eq!(view.tracked_id, Some(RecordId::from("ORD-003")));
        view.move_cursor(-20);
        assert_eq!(view.cursor, 0);
        view.cursor_to_first();
        assert_eq!(view.ratatui_state.selected(), Some(0));
    }

    #[test]
    fn select_all_checks_every_row() {
        let (mut controller, mut views) = setup();
        controller.handle(
            TableEvent::AllToggled {
                table: TableName::Products,
                checked: true,
            },
            &mut views,
        );
        let view = views.view(TableName::Products);
        assert!(view.rows.iter().all(|r| r.checked));
        assert_eq!(view.selected_count, 5);
        assert_eq!(view.select_all, SelectState::All);
    }

    #[test]
    fn cursor_on_empty_table_stays_at_zero() {
        let mut view = TableView::default();
        view.move_cursor(3);
        view.cursor_to_last();
        assert_eq!(view.cursor, 0);
        assert_eq!(view.tracked_id, None);
        assert_eq!(view.ratatui_state.selected(), None);
    }

    #[test]
    fn column_focus_wraps() {
        let mut view = TableView::default();
        view.focus_prev_column(4);
        assert_eq!(view.focused_column, 3);
        view.focus_next_column(4);
        assert_eq!(view.focused_column, 0);
    }

    #[test]
    fn currency_cells_have_two_decimals() {
        assert_eq!(
            format_cell(ColumnKey::Price, Some(&Value::Number(39.99))),
            "$39.99"
        );
        assert_eq!(
            format_cell(ColumnKey::Amount, Some(&Value::Number(300.0))),
            "$300.00"
        );
        assert_eq!(format_cell(ColumnKey::Stock, Some(&Value::Number(12.0))), "12");
        assert_eq!(format_cell(ColumnKey::Email, None), "");
    }
}
