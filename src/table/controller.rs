//! Orchestrates sorting and selection for all demo tables.

use tracing::{error, warn};

use crate::dataset::{DatasetStore, RecordId, TableName};

use super::selection::{SelectionSummary, SelectionTracker};
use super::sort::{SortEngine, SortState};
use super::surface::{RawTableEvent, RenderSurface, TableEvent};

/// Session state for every table plus the event handlers that mutate it.
///
/// State changes first, then the surface is asked to mirror the result.
#[derive(Debug, Clone)]
pub struct TableController {
    store: DatasetStore,
    sort: SortEngine,
    selection: SelectionTracker,
}

impl TableController {
    pub fn new(store: DatasetStore) -> Self {
        Self {
            store,
            sort: SortEngine::new(),
            selection: SelectionTracker::new(),
        }
    }

    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    pub fn sort_state(&self, table: TableName) -> Option<SortState> {
        self.sort.state(table)
    }

    pub fn summary(&self, table: TableName) -> SelectionSummary {
        self.selection.summary(&self.store, table)
    }

    pub fn is_selected(&self, table: TableName, id: &RecordId) -> bool {
        self.selection.is_selected(table, id)
    }

    /// Draws every table from the current state.
    pub fn render_all<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        for table in TableName::all() {
            self.render_table(*table, surface);
        }
    }

    fn render_table<S: RenderSurface + ?Sized>(&self, table: TableName, surface: &mut S) {
        surface.render_rows(
            table,
            self.store.get(table),
            self.selection.selection(table),
        );
        surface.set_sort_indicator(table, self.sort.state(table));
        self.render_selection(table, surface);
    }

    fn render_selection<S: RenderSurface + ?Sized>(&self, table: TableName, surface: &mut S) {
        let summary = self.summary(table);
        surface.set_selected_count(table, summary.count);
        surface.set_select_all_state(table, summary.state);
    }

    /// Applies a surface event and pushes the affected updates back.
    pub fn handle<S: RenderSurface + ?Sized>(&mut self, event: TableEvent, surface: &mut S) {
        match event {
            TableEvent::SortRequested { table, column } => {
                let order = self.sort.sort_by(&self.store, table, column);
                if let Err(e) = self.store.replace(table, order) {
                    error!(table = %table, error = %e, "sorted order rejected");
                }
                surface.render_rows(
                    table,
                    self.store.get(table),
                    self.selection.selection(table),
                );
                surface.set_sort_indicator(table, self.sort.state(table));
            }
            TableEvent::RowToggled { table, id, checked } => {
                if self.selection.is_selected(table, &id) != checked {
                    self.selection.toggle_row(&self.store, table, &id);
                }
                self.render_selection(table, surface);
            }
            TableEvent::AllToggled { table, checked } => {
                self.selection.toggle_all(&self.store, table, checked);
                surface.set_rows_checked(table, checked);
                self.render_selection(table, surface);
            }
        }
    }

    /// Resolves a string-keyed event. Unknown references are logged and
    /// ignored.
    pub fn handle_raw<S: RenderSurface + ?Sized>(&mut self, event: &RawTableEvent, surface: &mut S) {
        match event.resolve() {
            Ok(event) => self.handle(event, surface),
            Err(e) => warn!(error = %e, ?event, "table event ignored"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{ColumnKey, Record};
    use crate::table::selection::{SelectState, SelectionSet};

    /// Surface that records every call.
    #[derive(Debug, Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Rows {
            table: TableName,
            ids: Vec<RecordId>,
            checked: Vec<bool>,
        },
        SelectAll(TableName, SelectState),
        Count(TableName, usize),
        RowsChecked(TableName, bool),
        Sort(TableName, Option<SortState>),
    }

    impl RenderSurface for Recorder {
        fn render_rows(&mut self, table: TableName, records: &[Record], selection: &SelectionSet) {
            self.calls.push(Call::Rows {
                table,
                ids: records.iter().map(|r| r.id().clone()).collect(),
                checked: records.iter().map(|r| selection.contains(r.id())).collect(),
            });
        }

        fn set_select_all_state(&mut self, table: TableName, state: SelectState) {
            self.calls.push(Call::SelectAll(table, state));
        }

        fn set_selected_count(&mut self, table: TableName, count: usize) {
            self.calls.push(Call::Count(table, count));
        }

        fn set_rows_checked(&mut self, table: TableName, checked: bool) {
            self.calls.push(Call::RowsChecked(table, checked));
        }

        fn set_sort_indicator(&mut self, table: TableName, sort: Option<SortState>) {
            self.calls.push(Call::Sort(table, sort));
        }
    }

    fn controller() -> TableController {
        TableController::new(DatasetStore::sample().unwrap())
    }

    #[test]
    fn render_all_draws_every_table() {
        let c = controller();
        let mut surface = Recorder::default();
        c.render_all(&mut surface);
        let drawn: Vec<TableName> = surface
            .calls
            .iter()
            .filter_map(|call| match call {
                Call::Rows { table, .. } => Some(*table),
                _ => None,
            })
            .collect();
        assert_eq!(drawn, TableName::all());
        assert!(surface.calls.contains(&Call::Count(TableName::Orders, 0)));
    }

    #[test]
    fn sort_rerenders_with_selection_preserved() {
        let mut c = controller();
        let mut surface = Recorder::default();
        c.handle(
            TableEvent::RowToggled {
                table: TableName::Users,
                id: RecordId::Number(4),
                checked: true,
            },
            &mut surface,
        );
        surface.calls.clear();

        c.handle(
            TableEvent::SortRequested {
                table: TableName::Users,
                column: ColumnKey::Name,
            },
            &mut surface,
        );

        let expected_ids: Vec<RecordId> = [4, 3, 5, 2, 1].into_iter().map(RecordId::Number).collect();
        assert_eq!(
            surface.calls,
            vec![
                Call::Rows {
                    table: TableName::Users,
                    ids: expected_ids.clone(),
                    checked: vec![true, false, false, false, false],
                },
                Call::Sort(
                    TableName::Users,
                    Some(SortState {
                        column: ColumnKey::Name,
                        direction: crate::table::SortDirection::Ascending
                    })
                ),
            ]
        );
        let stored: Vec<RecordId> = c.store().ids(TableName::Users).cloned().collect();
        assert_eq!(stored, expected_ids);
    }

    #[test]
    fn row_toggle_updates_labels_without_rerender() {
        let mut c = controller();
        let mut surface = Recorder::default();
        c.handle(
            TableEvent::RowToggled {
                table: TableName::Products,
                id: RecordId::Number(2),
                checked: true,
            },
            &mut surface,
        );
        assert_eq!(
            surface.calls,
            vec![
                Call::Count(TableName::Products, 1),
                Call::SelectAll(TableName::Products, SelectState::Some),
            ]
        );
    }

    #[test]
    fn repeated_row_event_is_idempotent() {
        let mut c = controller();
        let mut surface = Recorder::default();
        let event = TableEvent::RowToggled {
            table: TableName::Users,
            id: RecordId::Number(1),
            checked: true,
        };
        c.handle(event.clone(), &mut surface);
        c.handle(event, &mut surface);
        assert_eq!(c.summary(TableName::Users).count, 1);
    }

    #[test]
    fn orders_select_all_then_deselect_one() {
        let mut c = controller();
        let mut surface = Recorder::default();
        c.handle(
            TableEvent::AllToggled {
                table: TableName::Orders,
                checked: true,
            },
            &mut surface,
        );
        assert_eq!(
            surface.calls,
            vec![
                Call::RowsChecked(TableName::Orders, true),
                Call::Count(TableName::Orders, 5),
                Call::SelectAll(TableName::Orders, SelectState::All),
            ]
        );

        surface.calls.clear();
        c.handle(
            TableEvent::RowToggled {
                table: TableName::Orders,
                id: RecordId::from("ORD-003"),
                checked: false,
            },
            &mut surface,
        );
        assert_eq!(
            surface.calls,
            vec![
                Call::Count(TableName::Orders, 4),
                Call::SelectAll(TableName::Orders, SelectState::Some),
            ]
        );
    }

    #[test]
    fn unknown_raw_references_are_ignored() {
        let mut c = controller();
        let mut surface = Recorder::default();
        c.handle_raw(
            &RawTableEvent::AllToggled {
                table: "invoices".to_string(),
                checked: true,
            },
            &mut surface,
        );
        c.handle_raw(
            &RawTableEvent::SortRequested {
                table: "users".to_string(),
                column: "salary".to_string(),
            },
            &mut surface,
        );
        assert!(surface.calls.is_empty());

        c.handle_raw(
            &RawTableEvent::RowToggled {
                table: "orders".to_string(),
                id: "ORD-005".to_string(),
                checked: true,
            },
            &mut surface,
        );
        assert!(c.is_selected(TableName::Orders, &RecordId::from("ORD-005")));
    }

    #[test]
    fn sort_by_column_of_other_table_keeps_order() {
        let mut c = controller();
        let mut surface = Recorder::default();
        let before: Vec<RecordId> = c.store().ids(TableName::Users).cloned().collect();
        c.handle(
            TableEvent::SortRequested {
                table: TableName::Users,
                column: ColumnKey::Amount,
            },
            &mut surface,
        );
        let after: Vec<RecordId> = c.store().ids(TableName::Users).cloned().collect();
        assert_eq!(before, after);
        assert_eq!(c.sort_state(TableName::Users), None);
    }
}
