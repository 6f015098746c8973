//! Single-column sorting with per-table direction tracking.

use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::{debug, warn};

use crate::dataset::{ColumnKey, DatasetStore, Record, TableName, Value};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Header indicator.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Last-applied sort of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: ColumnKey,
    pub direction: SortDirection,
}

/// Comparison key derived from a field value.
#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    Number(f64),
    Text(String),
}

impl SortKey {
    fn of(value: Option<&Value>) -> SortKey {
        match value {
            Some(Value::Number(n)) => SortKey::Number(*n),
            Some(v) => SortKey::Text(v.to_string().to_lowercase()),
            None => SortKey::Text(String::new()),
        }
    }

    fn text(&self) -> String {
        match self {
            SortKey::Number(n) => n.to_string(),
            SortKey::Text(s) => s.clone(),
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.partial_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.partial_cmp(b),
            // Mixed kinds compare as text.
            _ => self.text().partial_cmp(&other.text()),
        }
    }
}

/// Compares two field values: numerically when both are numbers, otherwise
/// by their lower-cased text. Incomparable values (NaN) are ties.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    SortKey::of(a)
        .partial_cmp(&SortKey::of(b))
        .unwrap_or(Ordering::Equal)
}

/// Produces sorted orders and remembers the last sort of each table.
#[derive(Debug, Clone, Default)]
pub struct SortEngine {
    states: HashMap<TableName, SortState>,
}

impl SortEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current sort of `table`, if the table was ever sorted.
    pub fn state(&self, table: TableName) -> Option<SortState> {
        self.states.get(&table).copied()
    }

    /// Returns `table`'s records sorted by `column`.
    ///
    /// Sorting by the active column flips the direction, any other column
    /// starts ascending. A column outside the table's schema leaves both the
    /// order and the sort state untouched. Ties keep their load order. The
    /// caller stores the result with
    /// [`DatasetStore::replace`].
    pub fn sort_by(
        &mut self,
        store: &DatasetStore,
        table: TableName,
        column: ColumnKey,
    ) -> Vec<Record> {
        if !table.has_column(column) {
            warn!(table = %table, column = %column, "sort by undeclared column ignored");
            return store.get(table).to_vec();
        }

        // Always sort the load order, so ties come out the same way whatever
        // was sorted before.
        let mut records = store.loaded_order(table).to_vec();

        let direction = match self.states.get(&table) {
            Some(current) if current.column == column => current.direction.flip(),
            _ => SortDirection::Ascending,
        };

        records.sort_by(|a, b| {
            let cmp = compare_values(a.get(column), b.get(column));
            match direction {
                SortDirection::Ascending => cmp,
                SortDirection::Descending => cmp.reverse(),
            }
        });

        self.states.insert(table, SortState { column, direction });
        debug!(table = %table, column = %column, ?direction, "sorted");
        records
    }
}
