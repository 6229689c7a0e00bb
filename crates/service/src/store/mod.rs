//! Narrow table-scoped store interface.
//!
//! Rows travel as JSON objects; the only query shape is an equality filter on
//! one column. Implementations:
//! - `postgrest::PostgrestStore` talks to a PostgREST / Supabase REST endpoint
//! - `memory::MemoryStore` keeps tables in process, used by tests and local runs

pub mod memory;
pub mod postgrest;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use memory::MemoryStore;
pub use postgrest::PostgrestStore;

/// A table row as a JSON object.
pub type Row = Value;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Single-row fetch did not match exactly one row.
    #[error("no rows returned")]
    NoRows,
    #[error("transport error: {0}")]
    Transport(String),
    #[error("store responded {status}: {message}")]
    Api { status: u16, code: Option<String>, message: String },
    #[error("decode error: {0}")]
    Decode(String),
}

/// Equality filter `column = value`.
#[derive(Clone, Debug, PartialEq)]
pub struct Filter {
    pub column: String,
    pub value: Value,
}

impl Filter {
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self { column: column.into(), value: value.into() }
    }

    /// Textual operand as it appears in a query string (`sku=eq.<operand>`).
    pub fn operand(&self) -> String {
        render(&self.value)
    }

    pub fn matches(&self, row: &Row) -> bool {
        row.get(&self.column).map(render).as_deref() == Some(self.operand().as_str())
    }
}

fn render(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[async_trait]
pub trait TableStore: Send + Sync {
    /// All rows of `table`, optionally restricted by `filter`.
    async fn select(&self, table: &str, filter: Option<&Filter>) -> Result<Vec<Row>, StoreError>;
    /// Exactly one matching row, otherwise `StoreError::NoRows`.
    async fn select_single(&self, table: &str, filter: &Filter) -> Result<Row, StoreError>;
    /// Insert one row and return it as stored.
    async fn insert(&self, table: &str, row: Row) -> Result<Row, StoreError>;
    /// Apply `changes` to every matching row and return the updated rows.
    async fn update(&self, table: &str, filter: &Filter, changes: Row) -> Result<Vec<Row>, StoreError>;
    async fn delete(&self, table: &str, filter: &Filter) -> Result<(), StoreError>;
}

pub fn decode<T: DeserializeOwned>(row: Row) -> Result<T, StoreError> {
    serde_json::from_value(row).map_err(|e| StoreError::Decode(e.to_string()))
}

pub fn encode<T: Serialize>(value: &T) -> Result<Row, StoreError> {
    serde_json::to_value(value).map_err(|e| StoreError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn filter_matches_strings_and_numbers_by_text() {
        assert!(Filter::eq("sku", "A-1").matches(&json!({"sku": "A-1"})));
        assert!(!Filter::eq("sku", "A-1").matches(&json!({"sku": "A-2"})));
        assert!(Filter::eq("weeks", 4u32).matches(&json!({"weeks": 4})));
        assert!(!Filter::eq("weeks", 4u32).matches(&json!({"price": 4})));
    }

    #[test]
    fn operand_renders_without_json_quotes() {
        assert_eq!(Filter::eq("sku", "A-1").operand(), "A-1");
        assert_eq!(Filter::eq("weeks", 12u32).operand(), "12");
    }
}
