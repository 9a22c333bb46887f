//! Input validation helpers.

use crate::error::{DomainError, DomainResult};
use crate::row::Row;

/// Check that every required field is present in `data`.
///
/// Reports **all** missing fields in one error, not just the first, so a
/// client can fix its payload in a single round trip. Presence is what is
/// checked; a field explicitly set to `null` counts as supplied.
pub fn require_fields(data: &Row, required: &[&str]) -> DomainResult<()> {
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|field| !data.contains_key(*field))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DomainError::validation(format!(
            "missing required fields: {}",
            missing.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: serde_json::Value) -> Row {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn all_fields_present_passes() {
        let data = row(json!({ "item_name": "kurta", "quantity": 3 }));
        assert!(require_fields(&data, &["item_name", "quantity"]).is_ok());
    }

    #[test]
    fn every_missing_field_is_listed() {
        let data = row(json!({ "item_name": "kurta" }));
        let err = require_fields(&data, &["item_name", "quantity", "size"]).unwrap_err();
        match err {
            DomainError::Validation(msg) => {
                assert!(msg.contains("quantity"));
                assert!(msg.contains("size"));
                assert!(!msg.contains("item_name"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn null_counts_as_supplied() {
        let data = row(json!({ "size": null }));
        assert!(require_fields(&data, &["size"]).is_ok());
    }
}
