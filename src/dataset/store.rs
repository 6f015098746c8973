//! Canonical record order per table.

use std::collections::{HashMap, HashSet};
use std::fmt;

use super::{Record, RecordId, TableName};

/// Errors returned by [`DatasetStore::replace`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The new order is not a permutation of the table's current records.
    NotAPermutation {
        table: TableName,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotAPermutation {
                table,
                expected,
                actual,
            } => write!(
                f,
                "invalid argument: new order for '{}' is not a permutation ({} records expected, {} given)",
                table, expected, actual
            ),
        }
    }
}

impl std::error::Error for StoreError {}

/// Ordered records for every demo table.
///
/// Populated once at startup. Afterwards only the current order changes; the
/// load order is kept as the base for every sort.
#[derive(Debug, Clone, Default)]
pub struct DatasetStore {
    tables: HashMap<TableName, Vec<Record>>,
    loaded: HashMap<TableName, Vec<Record>>,
}

impl DatasetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from per-table record lists. Missing tables are empty.
    pub fn from_tables(tables: impl IntoIterator<Item = (TableName, Vec<Record>)>) -> Self {
        let tables: HashMap<TableName, Vec<Record>> = tables.into_iter().collect();
        Self {
            loaded: tables.clone(),
            tables,
        }
    }

    /// Records of `table` in their current order.
    pub fn get(&self, table: TableName) -> &[Record] {
        self.tables.get(&table).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Records of `table` in the order they were loaded, regardless of any
    /// later [`replace`](Self::replace).
    pub fn loaded_order(&self, table: TableName) -> &[Record] {
        self.loaded.get(&table).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self, table: TableName) -> usize {
        self.get(table).len()
    }

    pub fn is_empty(&self, table: TableName) -> bool {
        self.get(table).is_empty()
    }

    pub fn contains(&self, table: TableName, id: &RecordId) -> bool {
        self.get(table).iter().any(|r| r.id() == id)
    }

    pub fn ids(&self, table: TableName) -> impl Iterator<Item = &RecordId> {
        self.get(table).iter().map(Record::id)
    }

    /// Replaces the order of `table`.
    ///
    /// `new_order` must hold exactly the same ids as the current records.
    pub fn replace(&mut self, table: TableName, new_order: Vec<Record>) -> Result<(), StoreError> {
        let current = self.get(table);
        let not_permutation = || StoreError::NotAPermutation {
            table,
            expected: current.len(),
            actual: new_order.len(),
        };

        if current.len() != new_order.len() {
            return Err(not_permutation());
        }

        let mut remaining: HashSet<&RecordId> = current.iter().map(Record::id).collect();
        for record in &new_order {
            if !remaining.remove(record.id()) {
                return Err(not_permutation());
            }
        }

        self.tables.insert(table, new_order);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{ColumnKey, Value};

    fn rec(id: u64, name: &str) -> Record {
        Record::new(
            RecordId::Number(id),
            vec![(ColumnKey::Name, Value::from(name))],
        )
    }

    fn store() -> DatasetStore {
        DatasetStore::from_tables([(
            TableName::Users,
            vec![rec(1, "a"), rec(2, "b"), rec(3, "c")],
        )])
    }

    fn ids(store: &DatasetStore, table: TableName) -> Vec<RecordId> {
        store.ids(table).cloned().collect()
    }

    #[test]
    fn replace_accepts_permutation() {
        let mut s = store();
        s.replace(TableName::Users, vec![rec(3, "c"), rec(1, "a"), rec(2, "b")])
            .unwrap();
        assert_eq!(
            ids(&s, TableName::Users),
            vec![RecordId::Number(3), RecordId::Number(1), RecordId::Number(2)]
        );
    }

    #[test]
    fn replace_rejects_different_cardinality() {
        let mut s = store();
        let err = s
            .replace(TableName::Users, vec![rec(1, "a"), rec(2, "b")])
            .unwrap_err();
        assert_eq!(
            err,
            StoreError::NotAPermutation {
                table: TableName::Users,
                expected: 3,
                actual: 2
            }
        );
        assert_eq!(s.len(TableName::Users), 3);
    }

    #[test]
    fn replace_rejects_foreign_or_duplicate_ids() {
        let mut s = store();
        assert!(
            s.replace(TableName::Users, vec![rec(1, "a"), rec(2, "b"), rec(9, "z")])
                .is_err()
        );
        assert!(
            s.replace(TableName::Users, vec![rec(1, "a"), rec(1, "a"), rec(2, "b")])
                .is_err()
        );
        assert_eq!(
            ids(&s, TableName::Users),
            vec![RecordId::Number(1), RecordId::Number(2), RecordId::Number(3)]
        );
    }

    #[test]
    fn replace_keeps_loaded_order() {
        let mut s = store();
        s.replace(TableName::Users, vec![rec(2, "b"), rec(3, "c"), rec(1, "a")])
            .unwrap();
        let loaded: Vec<RecordId> = s
            .loaded_order(TableName::Users)
            .iter()
            .map(|r| r.id().clone())
            .collect();
        assert_eq!(
            loaded,
            vec![RecordId::Number(1), RecordId::Number(2), RecordId::Number(3)]
        );
        assert_eq!(ids(&s, TableName::Users)[0], RecordId::Number(2));
    }

    #[test]
    fn missing_table_reads_as_empty() {
        let s = store();
        assert!(s.is_empty(TableName::Orders));
        assert!(!s.contains(TableName::Orders, &RecordId::Number(1)));
        assert!(s.contains(TableName::Users, &RecordId::Number(2)));
    }
}
