use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::{Filter, Row, StoreError, TableStore};

/// In-process table store with PostgREST-like semantics.
///
/// Unique key columns are opt-in per table; a duplicate insert fails the way
/// Postgres reports a unique violation (`23505`).
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<String, Vec<Row>>>,
    unique: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self { Self::default() }

    pub fn with_unique_key(mut self, table: &str, column: &str) -> Self {
        self.unique.insert(table.to_string(), column.to_string());
        self
    }

    /// Number of rows currently stored in `table`.
    pub async fn len(&self, table: &str) -> usize {
        self.tables.read().await.get(table).map_or(0, Vec::len)
    }
}

fn not_an_object() -> StoreError {
    StoreError::Api { status: 400, code: None, message: "row must be a JSON object".into() }
}

#[async_trait]
impl TableStore for MemoryStore {
    async fn select(&self, table: &str, filter: Option<&Filter>) -> Result<Vec<Row>, StoreError> {
        let tables = self.tables.read().await;
        let rows = tables.get(table).map(Vec::as_slice).unwrap_or_default();
        Ok(rows
            .iter()
            .filter(|r| filter.map_or(true, |f| f.matches(r)))
            .cloned()
            .collect())
    }

    async fn select_single(&self, table: &str, filter: &Filter) -> Result<Row, StoreError> {
        let mut rows = self.select(table, Some(filter)).await?;
        if rows.len() != 1 {
            return Err(StoreError::NoRows);
        }
        Ok(rows.remove(0))
    }

    async fn insert(&self, table: &str, row: Row) -> Result<Row, StoreError> {
        if !row.is_object() {
            return Err(not_an_object());
        }
        let mut tables = self.tables.write().await;
        let rows = tables.entry(table.to_string()).or_default();
        if let Some(column) = self.unique.get(table) {
            let key = Filter { column: column.clone(), value: row.get(column).cloned().unwrap_or(Value::Null) };
            if rows.iter().any(|r| key.matches(r)) {
                return Err(StoreError::Api {
                    status: 409,
                    code: Some("23505".into()),
                    message: format!("duplicate key value violates unique constraint on {table}.{column}"),
                });
            }
        }
        rows.push(row.clone());
        Ok(row)
    }

    async fn update(&self, table: &str, filter: &Filter, changes: Row) -> Result<Vec<Row>, StoreError> {
        let Value::Object(changes) = changes else {
            return Err(not_an_object());
        };
        let mut tables = self.tables.write().await;
        let mut updated = Vec::new();
        if let Some(rows) = tables.get_mut(table) {
            for row in rows.iter_mut().filter(|r| filter.matches(r)) {
                if let Value::Object(fields) = row {
                    for (k, v) in &changes {
                        fields.insert(k.clone(), v.clone());
                    }
                }
                updated.push(row.clone());
            }
        }
        Ok(updated)
    }

    async fn delete(&self, table: &str, filter: &Filter) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        if let Some(rows) = tables.get_mut(table) {
            rows.retain(|r| !filter.matches(r));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn insert_select_update_delete() {
        let store = MemoryStore::new();
        store.insert("products", json!({"sku": "A", "price": 1})).await.unwrap();
        store.insert("products", json!({"sku": "B", "price": 2})).await.unwrap();
        assert_eq!(store.select("products", None).await.unwrap().len(), 2);

        let updated = store
            .update("products", &Filter::eq("sku", "A"), json!({"price": 5}))
            .await
            .unwrap();
        assert_eq!(updated, vec![json!({"sku": "A", "price": 5})]);

        store.delete("products", &Filter::eq("sku", "A")).await.unwrap();
        assert_eq!(store.len("products").await, 1);
    }

    #[tokio::test]
    async fn select_single_reports_no_rows() {
        let store = MemoryStore::new();
        let err = store.select_single("products", &Filter::eq("sku", "missing")).await.unwrap_err();
        assert!(matches!(err, StoreError::NoRows));
    }

    #[tokio::test]
    async fn unique_key_rejects_duplicates() {
        let store = MemoryStore::new().with_unique_key("products", "sku");
        store.insert("products", json!({"sku": "A"})).await.unwrap();
        let err = store.insert("products", json!({"sku": "A"})).await.unwrap_err();
        assert!(matches!(err, StoreError::Api { status: 409, .. }));
        assert_eq!(store.len("products").await, 1);
    }

    #[tokio::test]
    async fn update_without_match_returns_empty() {
        let store = MemoryStore::new();
        let rows = store.update("terms", &Filter::eq("weeks", 4u32), json!({"normal_rate": 1})).await.unwrap();
        assert!(rows.is_empty());
    }
}
