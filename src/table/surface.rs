//! Boundary between the table core and whatever draws it.

use crate::dataset::{ColumnKey, Record, RecordId, TableName, UnknownReference};

use super::selection::{SelectState, SelectionSet};
use super::sort::SortState;

/// User actions raised by a rendering surface.
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent {
    /// A sortable column header was activated.
    SortRequested { table: TableName, column: ColumnKey },
    /// A row checkbox changed to `checked`.
    RowToggled {
        table: TableName,
        id: RecordId,
        checked: bool,
    },
    /// The "select all" checkbox changed to `checked`.
    AllToggled { table: TableName, checked: bool },
}

impl TableEvent {
    /// Table the event refers to.
    pub fn table(&self) -> TableName {
        match self {
            TableEvent::SortRequested { table, .. }
            | TableEvent::RowToggled { table, .. }
            | TableEvent::AllToggled { table, .. } => *table,
        }
    }
}

/// String-keyed form of [`TableEvent`], as reported by untyped handles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawTableEvent {
    SortRequested { table: String, column: String },
    RowToggled {
        table: String,
        id: String,
        checked: bool,
    },
    AllToggled { table: String, checked: bool },
}

impl RawTableEvent {
    /// Resolves names against the closed table and column sets.
    pub fn resolve(&self) -> Result<TableEvent, UnknownReference> {
        Ok(match self {
            RawTableEvent::SortRequested { table, column } => TableEvent::SortRequested {
                table: table.parse()?,
                column: column.parse()?,
            },
            RawTableEvent::RowToggled { table, id, checked } => TableEvent::RowToggled {
                table: table.parse()?,
                id: RecordId::parse(id),
                checked: *checked,
            },
            RawTableEvent::AllToggled { table, checked } => TableEvent::AllToggled {
                table: table.parse()?,
                checked: *checked,
            },
        })
    }
}

/// Drawing side of a table. Implementations only mirror state; they never
/// mutate the core.
pub trait RenderSurface {
    /// Redraws every row of `table` in the given order, checking the rows
    /// whose id is in `selection`.
    fn render_rows(&mut self, table: TableName, records: &[Record], selection: &SelectionSet);

    /// Updates the tri-state header checkbox.
    fn set_select_all_state(&mut self, table: TableName, state: SelectState);

    /// Updates the "N selected" label.
    fn set_selected_count(&mut self, table: TableName, count: usize);

    /// Sets every row checkbox of `table` to `checked`.
    fn set_rows_checked(&mut self, table: TableName, checked: bool);

    /// Marks the header of the active sort column.
    fn set_sort_indicator(&mut self, _table: TableName, _sort: Option<SortState>) {}
}
