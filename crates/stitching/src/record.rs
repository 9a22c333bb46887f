use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use atelier_core::{tables, DomainError, DomainResult, Row, require_fields};
use atelier_store::{Filter, RecordStore};

const REQUIRED_FIELDS: &[&str] = &[
    "stitching_preference",
    "tailor_price",
    "selling_price",
    "expected_date",
    "cust_name",
];

/// CRUD over the `stitching` table.
#[derive(Clone)]
pub struct StitchingManager {
    store: Arc<dyn RecordStore>,
}

impl StitchingManager {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Create a stitching order.
    ///
    /// A non-null `item_id` must reference an existing sale at this moment;
    /// the link is a lookup key, not a managed foreign key.
    pub async fn create(&self, mut data: Row) -> DomainResult<Row> {
        require_fields(&data, REQUIRED_FIELDS)?;

        if let Some(item_id) = data.get("item_id").filter(|v| !v.is_null()).cloned() {
            let matching = self
                .store
                .select(tables::SALES, &[Filter::eq(tables::SALES_ID, item_id.clone())])
                .await?;
            if matching.is_empty() {
                return Err(DomainError::validation(format!(
                    "invalid item_id {item_id}: no matching sale found"
                )));
            }
        }

        data.entry("order_date")
            .or_insert_with(|| Value::String(Utc::now().to_rfc3339()));

        Ok(self.store.insert(tables::STITCHING, data).await?)
    }

    pub async fn get_all(&self) -> DomainResult<Vec<Row>> {
        Ok(self.store.select(tables::STITCHING, &[]).await?)
    }

    pub async fn get_by_id(&self, stitching_id: i64) -> DomainResult<Row> {
        let rows = self
            .store
            .select(
                tables::STITCHING,
                &[Filter::eq(tables::STITCHING_ID, stitching_id)],
            )
            .await?;

        rows.into_iter().next().ok_or_else(|| {
            DomainError::not_found(format!("stitching record {stitching_id} not found"))
        })
    }

    pub async fn update(&self, stitching_id: i64, patch: Row) -> DomainResult<Row> {
        self.get_by_id(stitching_id).await?;

        let rows = self
            .store
            .update(
                tables::STITCHING,
                &[Filter::eq(tables::STITCHING_ID, stitching_id)],
                patch,
            )
            .await?;

        rows.into_iter()
            .next()
            .ok_or_else(|| DomainError::operation("store returned no row for update"))
    }

    pub async fn delete(&self, stitching_id: i64) -> DomainResult<Row> {
        self.get_by_id(stitching_id).await?;

        let rows = self
            .store
            .delete(
                tables::STITCHING,
                &[Filter::eq(tables::STITCHING_ID, stitching_id)],
            )
            .await?;

        rows.into_iter()
            .next()
            .ok_or_else(|| DomainError::operation("store returned no row for delete"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_store::InMemoryRecordStore;
    use serde_json::json;

    fn setup() -> (StitchingManager, Arc<InMemoryRecordStore>) {
        let store = Arc::new(InMemoryRecordStore::with_tables(&[
            (tables::SALES, tables::SALES_ID),
            (tables::STITCHING, tables::STITCHING_ID),
        ]));
        (StitchingManager::new(store.clone()), store)
    }

    fn valid_record() -> Row {
        json!({
            "stitching_preference": "slim fit",
            "tailor_price": 500,
            "selling_price": 900,
            "expected_date": "2024-06-15",
            "cust_name": "Bilal",
        })
        .as_object()
        .unwrap()
        .clone()
    }

    #[tokio::test]
    async fn create_without_item_id_succeeds() {
        let (manager, _) = setup();

        let created = manager.create(valid_record()).await.unwrap();
        assert_eq!(created["stitching_id"], json!(1));
        assert!(created["order_date"].is_string());
    }

    #[tokio::test]
    async fn create_with_unknown_item_id_fails_validation() {
        let (manager, _) = setup();

        let mut data = valid_record();
        data.insert("item_id".to_string(), json!(77));
        let err = manager.create(data).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn create_with_matching_sale_keeps_the_weak_link() {
        let (manager, store) = setup();
        store
            .insert(
                tables::SALES,
                json!({ "item_name": "kurta" }).as_object().unwrap().clone(),
            )
            .await
            .unwrap();

        let mut data = valid_record();
        data.insert("item_id".to_string(), json!(1));
        let created = manager.create(data).await.unwrap();
        assert_eq!(created["item_id"], json!(1));
    }

    #[tokio::test]
    async fn null_item_id_skips_the_sale_check() {
        let (manager, _) = setup();

        let mut data = valid_record();
        data.insert("item_id".to_string(), json!(null));
        assert!(manager.create(data).await.is_ok());
    }

    #[tokio::test]
    async fn create_reports_every_missing_field() {
        let (manager, _) = setup();

        let err = manager
            .create(json!({ "cust_name": "Bilal" }).as_object().unwrap().clone())
            .await
            .unwrap_err();

        match err {
            DomainError::Validation(msg) => {
                for field in ["stitching_preference", "tailor_price", "selling_price", "expected_date"] {
                    assert!(msg.contains(field), "missing '{field}' in: {msg}");
                }
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn get_update_delete_on_unknown_id_fail_not_found() {
        let (manager, _) = setup();

        assert!(matches!(
            manager.get_by_id(9).await.unwrap_err(),
            DomainError::NotFound(_)
        ));
        assert!(matches!(
            manager.update(9, Row::new()).await.unwrap_err(),
            DomainError::NotFound(_)
        ));
        assert!(matches!(
            manager.delete(9).await.unwrap_err(),
            DomainError::NotFound(_)
        ));
    }
}
