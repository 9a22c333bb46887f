//! Dynamic record row.
//!
//! The managers are pass-through CRUD with partial-field updates, and the
//! hosted store speaks JSON rows, so rows stay dynamic JSON objects end to
//! end rather than per-entity structs full of `Option` fields.

use serde_json::Value;

/// One record as returned by (or sent to) the record store.
pub type Row = serde_json::Map<String, Value>;

/// Numeric field accessor (integers widen to f64).
pub fn get_f64(row: &Row, key: &str) -> Option<f64> {
    row.get(key).and_then(Value::as_f64)
}

/// Boolean field accessor.
pub fn get_bool(row: &Row, key: &str) -> Option<bool> {
    row.get(key).and_then(Value::as_bool)
}
