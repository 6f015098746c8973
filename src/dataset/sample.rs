//! Dataset loading from the JSON sample document.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use super::{ColumnKey, DatasetStore, Record, RecordId, TableName, Value};

/// Reference sample data shipped with the binary.
pub const SAMPLE_DATA: &str = include_str!("../../data/sample.json");

/// Errors that can occur while loading a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    /// The dataset file could not be read.
    Io { path: PathBuf, message: String },
    /// The document is not valid JSON or does not match the table schemas.
    Parse(String),
    /// Two records of one table share an id.
    DuplicateId { table: TableName, id: RecordId },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Io { path, message } => {
                write!(f, "cannot read '{}': {}", path.display(), message)
            }
            DatasetError::Parse(msg) => write!(f, "invalid dataset: {}", msg),
            DatasetError::DuplicateId { table, id } => {
                write!(f, "duplicate id '{}' in table '{}'", id, table)
            }
        }
    }
}

impl std::error::Error for DatasetError {}

#[derive(Debug, Deserialize)]
struct UserRow {
    id: u64,
    name: String,
    email: String,
    role: String,
    status: String,
}

#[derive(Debug, Deserialize)]
struct ProductRow {
    id: u64,
    name: String,
    category: String,
    price: f64,
    stock: u32,
}

#[derive(Debug, Deserialize)]
struct OrderRow {
    id: String,
    customer: String,
    date: String,
    amount: f64,
    status: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Document {
    users: Vec<UserRow>,
    products: Vec<ProductRow>,
    orders: Vec<OrderRow>,
}

impl From<UserRow> for Record {
    fn from(u: UserRow) -> Self {
        Record::new(
            RecordId::Number(u.id),
            vec![
                (ColumnKey::Name, Value::from(u.name)),
                (ColumnKey::Email, Value::from(u.email)),
                (ColumnKey::Role, Value::from(u.role)),
                (ColumnKey::Status, Value::from(u.status)),
            ],
        )
    }
}

impl From<ProductRow> for Record {
    fn from(p: ProductRow) -> Self {
        Record::new(
            RecordId::Number(p.id),
            vec![
                (ColumnKey::Name, Value::from(p.name)),
                (ColumnKey::Category, Value::from(p.category)),
                (ColumnKey::Price, Value::from(p.price)),
                (ColumnKey::Stock, Value::from(p.stock)),
            ],
        )
    }
}

impl From<OrderRow> for Record {
    fn from(o: OrderRow) -> Self {
        Record::new(
            RecordId::Text(o.id.clone()),
            vec![
                (ColumnKey::Id, Value::from(o.id)),
                (ColumnKey::Customer, Value::from(o.customer)),
                (ColumnKey::Date, Value::from(o.date)),
                (ColumnKey::Amount, Value::from(o.amount)),
                (ColumnKey::Status, Value::from(o.status)),
            ],
        )
    }
}

fn collect_unique<T: Into<Record>>(
    table: TableName,
    rows: Vec<T>,
) -> Result<(TableName, Vec<Record>), DatasetError> {
    let records: Vec<Record> = rows.into_iter().map(Into::into).collect();
    let mut seen = HashSet::new();
    for record in &records {
        if !seen.insert(record.id()) {
            return Err(DatasetError::DuplicateId {
                table,
                id: record.id().clone(),
            });
        }
    }
    Ok((table, records))
}

impl DatasetStore {
    /// Store populated with the reference sample data.
    pub fn sample() -> Result<Self, DatasetError> {
        Self::from_json(SAMPLE_DATA)
    }

    /// Parses a dataset document with one array per table.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let doc: Document =
            serde_json::from_str(json).map_err(|e| DatasetError::Parse(e.to_string()))?;

        let tables = [
            collect_unique(TableName::Users, doc.users)?,
            collect_unique(TableName::Products, doc.products)?,
            collect_unique(TableName::Orders, doc.orders)?,
        ];
        for (table, records) in &tables {
            debug!(table = %table, records = records.len(), "table loaded");
        }
        Ok(Self::from_tables(tables))
    }

    /// Reads and parses a dataset document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| DatasetError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn sample_has_five_rows_per_table() {
        let store = DatasetStore::sample().unwrap();
        for table in TableName::all() {
            assert_eq!(store.len(*table), 5, "table {}", table);
        }
    }

    #[test]
    fn sample_records_follow_table_schemas() {
        let store = DatasetStore::sample().unwrap();
        for table in TableName::all() {
            for record in store.get(*table) {
                let keys: Vec<ColumnKey> = record.fields().iter().map(|(k, _)| *k).collect();
                assert_eq!(keys, table.columns());
            }
        }
    }

    #[test]
    fn order_ids_are_text_and_product_prices_are_numbers() {
        let store = DatasetStore::sample().unwrap();
        let order = &store.get(TableName::Orders)[2];
        assert_eq!(order.id(), &RecordId::from("ORD-003"));
        assert_eq!(order.get(ColumnKey::Id), Some(&Value::from("ORD-003")));

        let product = &store.get(TableName::Products)[3];
        assert_eq!(product.get(ColumnKey::Price), Some(&Value::Number(39.99)));
        assert_eq!(product.get(ColumnKey::Stock), Some(&Value::Number(12.0)));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"{"users": [
            {"id": 1, "name": "A", "email": "a@x", "role": "User", "status": "Active"},
            {"id": 1, "name": "B", "email": "b@x", "role": "User", "status": "Active"}
        ]}"#;
        assert_eq!(
            DatasetStore::from_json(json).unwrap_err(),
            DatasetError::DuplicateId {
                table: TableName::Users,
                id: RecordId::Number(1)
            }
        );
    }

    #[test]
    fn schema_mismatch_is_a_parse_error() {
        let json = r#"{"products": [{"id": 1, "name": "X", "category": "Y", "price": "cheap", "stock": 1}]}"#;
        assert!(matches!(
            DatasetStore::from_json(json),
            Err(DatasetError::Parse(_))
        ));
        assert!(matches!(
            DatasetStore::from_json(r#"{"invoices": []}"#),
            Err(DatasetError::Parse(_))
        ));
    }

    #[test]
    fn missing_tables_load_empty() {
        let store = DatasetStore::from_json("{}").unwrap();
        assert!(store.is_empty(TableName::Orders));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_DATA.as_bytes()).unwrap();
        let store = DatasetStore::from_path(file.path()).unwrap();
        assert_eq!(store.len(TableName::Orders), 5);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DatasetStore::from_path(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }
}
