//! Per-table row selection with a tri-state summary.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::dataset::{DatasetStore, RecordId, TableName};

/// Selected record ids of one table.
pub type SelectionSet = HashSet<RecordId>;

/// Aggregate selection state, driving the "select all" checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectState {
    /// Unchecked.
    #[default]
    None,
    /// Indeterminate.
    Some,
    /// Checked.
    All,
}

impl SelectState {
    /// Checkbox glyph: unchecked, indeterminate, checked.
    pub fn glyph(self) -> &'static str {
        match self {
            SelectState::None => "[ ]",
            SelectState::Some => "[-]",
            SelectState::All => "[x]",
        }
    }
}

/// Selection count plus tri-state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSummary {
    pub count: usize,
    pub state: SelectState,
}

impl SelectionSummary {
    fn new(count: usize, total: usize) -> Self {
        let state = if count == 0 {
            SelectState::None
        } else if count == total {
            SelectState::All
        } else {
            SelectState::Some
        };
        Self { count, state }
    }
}

/// Tracks selected ids per table.
///
/// Ids are checked against the store, so a set never references a record the
/// table does not hold.
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    sets: HashMap<TableName, SelectionSet>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` if absent, removes it otherwise. Unknown ids are ignored.
    pub fn toggle_row(&mut self, store: &DatasetStore, table: TableName, id: &RecordId) {
        if !store.contains(table, id) {
            warn!(table = %table, id = %id, "toggle of unknown row ignored");
            return;
        }
        let set = self.sets.entry(table).or_default();
        if !set.remove(id) {
            set.insert(id.clone());
        }
        debug!(table = %table, id = %id, selected = set.len(), "row toggled");
    }

    /// Selects every row of `table` when `checked`, clears the selection
    /// otherwise.
    pub fn toggle_all(&mut self, store: &DatasetStore, table: TableName, checked: bool) {
        let set: SelectionSet = if checked {
            store.ids(table).cloned().collect()
        } else {
            SelectionSet::new()
        };
        debug!(table = %table, checked, selected = set.len(), "all rows toggled");
        self.sets.insert(table, set);
    }

    pub fn summary(&self, store: &DatasetStore, table: TableName) -> SelectionSummary {
        SelectionSummary::new(self.count(table), store.len(table))
    }

    pub fn count(&self, table: TableName) -> usize {
        self.sets.get(&table).map(HashSet::len).unwrap_or(0)
    }

    pub fn is_selected(&self, table: TableName, id: &RecordId) -> bool {
        self.sets.get(&table).is_some_and(|s| s.contains(id))
    }

    /// Selected ids of `table`.
    pub fn selection(&self, table: TableName) -> &SelectionSet {
        static EMPTY: std::sync::LazyLock<SelectionSet> =
            std::sync::LazyLock::new(SelectionSet::new);
        self.sets.get(&table).unwrap_or(&EMPTY)
    }

    /// Drops ids that are no longer present in `table`.
    pub fn prune(&mut self, store: &DatasetStore, table: TableName) {
        if let Some(set) = self.sets.get_mut(&table) {
            let before = set.len();
            set.retain(|id| store.contains(table, id));
            if set.len() != before {
                debug!(table = %table, removed = before - set.len(), "stale selection pruned");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{ColumnKey, Record, Value};

    fn store() -> DatasetStore {
        DatasetStore::sample().unwrap()
    }

    #[test]
    fn select_all_then_none() {
        let store = store();
        let mut tracker = SelectionTracker::new();
        for table in TableName::all() {
            tracker.toggle_all(&store, *table, true);
            assert_eq!(
                tracker.summary(&store, *table),
                SelectionSummary {
                    count: 5,
                    state: SelectState::All
                }
            );
            tracker.toggle_all(&store, *table, false);
            assert_eq!(
                tracker.summary(&store, *table),
                SelectionSummary {
                    count: 0,
                    state: SelectState::None
                }
            );
        }
    }

    #[test]
    fn deselecting_one_from_full_gives_some() {
        let store = store();
        let mut tracker = SelectionTracker::new();
        tracker.toggle_all(&store, TableName::Orders, true);
        tracker.toggle_row(&store, TableName::Orders, &RecordId::from("ORD-003"));
        assert_eq!(
            tracker.summary(&store, TableName::Orders),
            SelectionSummary {
                count: 4,
                state: SelectState::Some
            }
        );
        assert!(!tracker.is_selected(TableName::Orders, &RecordId::from("ORD-003")));
        assert!(tracker.is_selected(TableName::Orders, &RecordId::from("ORD-004")));
    }

    #[test]
    fn toggle_row_is_its_own_inverse() {
        let store = store();
        let mut tracker = SelectionTracker::new();
        tracker.toggle_row(&store, TableName::Users, &RecordId::Number(2));
        let before = tracker.selection(TableName::Users).clone();

        tracker.toggle_row(&store, TableName::Users, &RecordId::Number(4));
        assert_eq!(tracker.count(TableName::Users), 2);
        tracker.toggle_row(&store, TableName::Users, &RecordId::Number(4));
        assert_eq!(tracker.selection(TableName::Users), &before);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let store = store();
        let mut tracker = SelectionTracker::new();
        tracker.toggle_row(&store, TableName::Users, &RecordId::Number(42));
        // Numeric and text ids never alias.
        tracker.toggle_row(&store, TableName::Users, &RecordId::from("1"));
        assert_eq!(tracker.count(TableName::Users), 0);
    }

    #[test]
    fn toggle_all_replaces_rather_than_merges() {
        let store = store();
        let mut tracker = SelectionTracker::new();
        tracker.toggle_row(&store, TableName::Products, &RecordId::Number(1));
        tracker.toggle_all(&store, TableName::Products, false);
        assert!(tracker.selection(TableName::Products).is_empty());
    }

    #[test]
    fn tables_are_independent() {
        let store = store();
        let mut tracker = SelectionTracker::new();
        tracker.toggle_all(&store, TableName::Users, true);
        assert_eq!(tracker.count(TableName::Products), 0);
        assert_eq!(
            tracker.summary(&store, TableName::Products).state,
            SelectState::None
        );
    }

    #[test]
    fn prune_drops_removed_records() {
        let mut tracker = SelectionTracker::new();
        let full = store();
        tracker.toggle_all(&full, TableName::Users, true);

        let shrunk = DatasetStore::from_tables([(
            TableName::Users,
            vec![Record::new(
                RecordId::Number(1),
                vec![(ColumnKey::Name, Value::from("John Doe"))],
            )],
        )]);
        tracker.prune(&shrunk, TableName::Users);
        assert_eq!(tracker.count(TableName::Users), 1);
        assert_eq!(tracker.summary(&shrunk, TableName::Users).state, SelectState::All);
    }

    #[test]
    fn empty_table_summary_is_none() {
        let store = DatasetStore::new();
        let tracker = SelectionTracker::new();
        assert_eq!(
            tracker.summary(&store, TableName::Orders).state,
            SelectState::None
        );
    }
}
