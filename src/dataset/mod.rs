//! Typed sample data: table names, column keys, scalar values and records.
//!
//! Every table has a fixed schema declared by [`TableName::columns`]. Records
//! carry a [`RecordId`] that is unique within their table and is only used for
//! selection membership.

mod sample;
mod store;

pub use sample::{DatasetError, SAMPLE_DATA};
pub use store::{DatasetStore, StoreError};

use std::fmt;
use std::str::FromStr;

/// Reference to a table, column or record outside the known set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnknownReference {
    /// Table name not in [`TableName::all`].
    Table(String),
    /// Column key not declared by any schema.
    Column(String),
}

impl fmt::Display for UnknownReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnknownReference::Table(name) => write!(f, "unknown table '{}'", name),
            UnknownReference::Column(name) => write!(f, "unknown column '{}'", name),
        }
    }
}

impl std::error::Error for UnknownReference {}

/// Demo tables. The set is closed and known at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum TableName {
    #[default]
    Users,
    Products,
    Orders,
}

impl TableName {
    pub fn all() -> &'static [TableName] {
        &[TableName::Users, TableName::Products, TableName::Orders]
    }

    /// Key used in the dataset document and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            TableName::Users => "users",
            TableName::Products => "products",
            TableName::Orders => "orders",
        }
    }

    /// Display title for demo tabs.
    pub fn title(&self) -> &'static str {
        match self {
            TableName::Users => "Users",
            TableName::Products => "Products",
            TableName::Orders => "Orders",
        }
    }

    /// Declared columns, in display order.
    pub fn columns(&self) -> &'static [ColumnKey] {
        match self {
            TableName::Users => &[
                ColumnKey::Name,
                ColumnKey::Email,
                ColumnKey::Role,
                ColumnKey::Status,
            ],
            TableName::Products => &[
                ColumnKey::Name,
                ColumnKey::Category,
                ColumnKey::Price,
                ColumnKey::Stock,
            ],
            TableName::Orders => &[
                ColumnKey::Id,
                ColumnKey::Customer,
                ColumnKey::Date,
                ColumnKey::Amount,
                ColumnKey::Status,
            ],
        }
    }

    pub fn has_column(&self, column: ColumnKey) -> bool {
        self.columns().contains(&column)
    }

    pub fn next(&self) -> TableName {
        match self {
            TableName::Users => TableName::Products,
            TableName::Products => TableName::Orders,
            TableName::Orders => TableName::Users,
        }
    }

    pub fn prev(&self) -> TableName {
        match self {
            TableName::Users => TableName::Orders,
            TableName::Products => TableName::Users,
            TableName::Orders => TableName::Products,
        }
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableName {
    type Err = UnknownReference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TableName::all()
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownReference::Table(s.to_string()))
    }
}

/// Column keys across all table schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKey {
    Id,
    Name,
    Email,
    Role,
    Status,
    Category,
    Price,
    Stock,
    Customer,
    Date,
    Amount,
}

impl ColumnKey {
    const ALL: [ColumnKey; 11] = [
        ColumnKey::Id,
        ColumnKey::Name,
        ColumnKey::Email,
        ColumnKey::Role,
        ColumnKey::Status,
        ColumnKey::Category,
        ColumnKey::Price,
        ColumnKey::Stock,
        ColumnKey::Customer,
        ColumnKey::Date,
        ColumnKey::Amount,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKey::Id => "id",
            ColumnKey::Name => "name",
            ColumnKey::Email => "email",
            ColumnKey::Role => "role",
            ColumnKey::Status => "status",
            ColumnKey::Category => "category",
            ColumnKey::Price => "price",
            ColumnKey::Stock => "stock",
            ColumnKey::Customer => "customer",
            ColumnKey::Date => "date",
            ColumnKey::Amount => "amount",
        }
    }

    /// Header label.
    pub fn label(&self) -> &'static str {
        match self {
            ColumnKey::Id => "Order ID",
            ColumnKey::Name => "Name",
            ColumnKey::Email => "Email",
            ColumnKey::Role => "Role",
            ColumnKey::Status => "Status",
            ColumnKey::Category => "Category",
            ColumnKey::Price => "Price",
            ColumnKey::Stock => "Stock",
            ColumnKey::Customer => "Customer",
            ColumnKey::Date => "Date",
            ColumnKey::Amount => "Amount",
        }
    }

    /// Columns rendered as currency.
    pub fn is_currency(&self) -> bool {
        matches!(self, ColumnKey::Price | ColumnKey::Amount)
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnKey {
    type Err = UnknownReference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColumnKey::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| UnknownReference::Column(s.to_string()))
    }
}

/// Scalar field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

/// Stable record identifier, unique within a table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(u64),
    Text(String),
}

impl RecordId {
    /// Parses an id as reported by a surface handle. Numeric strings become
    /// numeric ids.
    pub fn parse(raw: &str) -> RecordId {
        let raw = raw.trim();
        raw.parse::<u64>()
            .map(RecordId::Number)
            .unwrap_or_else(|_| RecordId::Text(raw.to_string()))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for RecordId {
    fn from(n: u64) -> Self {
        RecordId::Number(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

/// One row: an identifier plus ordered field values.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: RecordId,
    fields: Vec<(ColumnKey, Value)>,
}

impl Record {
    pub fn new(id: RecordId, fields: Vec<(ColumnKey, Value)>) -> Self {
        Self { id, fields }
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn get(&self, column: ColumnKey) -> Option<&Value> {
        self.fields
            .iter()
            .find_map(|(key, value)| (*key == column).then_some(value))
    }

    pub fn fields(&self) -> &[(ColumnKey, Value)] {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_name_parses_case_insensitively() {
        assert_eq!("Orders".parse::<TableName>(), Ok(TableName::Orders));
        assert_eq!(" users ".parse::<TableName>(), Ok(TableName::Users));
        assert_eq!(
            "invoices".parse::<TableName>(),
            Err(UnknownReference::Table("invoices".to_string()))
        );
    }

    #[test]
    fn table_cycle_wraps() {
        assert_eq!(TableName::Orders.next(), TableName::Users);
        assert_eq!(TableName::Users.prev(), TableName::Orders);
        for t in TableName::all() {
            assert_eq!(t.next().prev(), *t);
        }
    }

    #[test]
    fn column_key_round_trips_through_str() {
        for c in ColumnKey::ALL {
            assert_eq!(c.as_str().parse::<ColumnKey>(), Ok(c));
        }
        assert!("salary".parse::<ColumnKey>().is_err());
    }

    #[test]
    fn record_id_parse_prefers_numbers() {
        assert_eq!(RecordId::parse("3"), RecordId::Number(3));
        assert_eq!(RecordId::parse("ORD-003"), RecordId::from("ORD-003"));
    }

    #[test]
    fn number_values_display_shortest_form() {
        assert_eq!(Value::Number(45.0).to_string(), "45");
        assert_eq!(Value::Number(199.99).to_string(), "199.99");
    }

    #[test]
    fn record_get_finds_declared_field() {
        let r = Record::new(
            RecordId::Number(1),
            vec![
                (ColumnKey::Name, Value::from("Desk Lamp")),
                (ColumnKey::Price, Value::from(39.99)),
            ],
        );
        assert_eq!(r.get(ColumnKey::Price), Some(&Value::Number(39.99)));
        assert_eq!(r.get(ColumnKey::Email), None);
    }
}
