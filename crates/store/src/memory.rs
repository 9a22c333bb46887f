use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value;

use atelier_core::Row;

use super::r#trait::{Filter, RecordStore, StoreError, StoreResult};

#[derive(Debug)]
struct TableState {
    id_column: String,
    next_id: i64,
    rows: Vec<Row>,
}

impl TableState {
    fn new(id_column: &str) -> Self {
        Self {
            id_column: id_column.to_string(),
            next_id: 1,
            rows: Vec::new(),
        }
    }
}

/// In-memory record store.
///
/// Intended for tests/dev. Tables must be registered up front with the column
/// the hosted store would fill from its serial primary key; `insert` assigns
/// sequential ids the same way.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    tables: RwLock<HashMap<String, TableState>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tables(tables: &[(&str, &str)]) -> Self {
        let map = tables
            .iter()
            .map(|(name, id_column)| ((*name).to_string(), TableState::new(id_column)))
            .collect();
        Self {
            tables: RwLock::new(map),
        }
    }
}

fn values_eq(a: &Value, b: &Value) -> bool {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => a == b,
    }
}

fn cmp_values(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::String(x), Value::String(y)) => Some(x.as_str().cmp(y.as_str())),
        _ => match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => x.partial_cmp(&y),
            _ => None,
        },
    }
}

fn matches(row: &Row, filters: &[Filter]) -> bool {
    filters.iter().all(|filter| match filter {
        Filter::Eq(field, value) => row.get(field).is_some_and(|v| values_eq(v, value)),
        Filter::Lt(field, value) => row
            .get(field)
            .and_then(|v| cmp_values(v, value))
            .is_some_and(|ord| ord == Ordering::Less),
        Filter::Gte(field, value) => row
            .get(field)
            .and_then(|v| cmp_values(v, value))
            .is_some_and(|ord| ord != Ordering::Less),
    })
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn select(&self, table: &str, filters: &[Filter]) -> StoreResult<Vec<Row>> {
        let tables = self
            .tables
            .read()
            .map_err(|_| StoreError::backend("lock poisoned"))?;

        // Unknown tables read as empty, matching how a dev store behaves
        // before any row lands in a rollup view.
        let Some(state) = tables.get(table) else {
            return Ok(Vec::new());
        };

        Ok(state
            .rows
            .iter()
            .filter(|row| matches(row, filters))
            .cloned()
            .collect())
    }

    async fn insert(&self, table: &str, mut row: Row) -> StoreResult<Row> {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| StoreError::backend("lock poisoned"))?;

        let state = tables
            .get_mut(table)
            .ok_or_else(|| StoreError::backend(format!("unknown table '{table}'")))?;

        if !row.contains_key(&state.id_column) {
            row.insert(state.id_column.clone(), Value::from(state.next_id));
        }
        state.next_id += 1;
        state.rows.push(row.clone());

        Ok(row)
    }

    async fn update(&self, table: &str, filters: &[Filter], patch: Row) -> StoreResult<Vec<Row>> {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| StoreError::backend("lock poisoned"))?;

        let state = tables
            .get_mut(table)
            .ok_or_else(|| StoreError::backend(format!("unknown table '{table}'")))?;

        let mut updated = Vec::new();
        for row in state.rows.iter_mut().filter(|row| matches(row, filters)) {
            for (key, value) in &patch {
                row.insert(key.clone(), value.clone());
            }
            updated.push(row.clone());
        }

        Ok(updated)
    }

    async fn delete(&self, table: &str, filters: &[Filter]) -> StoreResult<Vec<Row>> {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| StoreError::backend("lock poisoned"))?;

        let state = tables
            .get_mut(table)
            .ok_or_else(|| StoreError::backend(format!("unknown table '{table}'")))?;

        let mut removed = Vec::new();
        state.rows.retain(|row| {
            if matches(row, filters) {
                removed.push(row.clone());
                false
            } else {
                true
            }
        });

        Ok(removed)
    }

    async fn count(&self, table: &str, filters: &[Filter]) -> StoreResult<u64> {
        Ok(self.select(table, filters).await?.len() as u64)
    }
}
