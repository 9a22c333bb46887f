use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use atelier_core::{tables, DomainError, DomainResult, Row, require_fields};
use atelier_store::{Filter, RecordStore};

const REQUIRED_FIELDS: &[&str] = &[
    "vendor_id",
    "selling_price",
    "cost_price",
    "item_name",
    "quantity",
    "size",
];

/// CRUD over the `stock` table.
#[derive(Clone)]
pub struct StockManager {
    store: Arc<dyn RecordStore>,
}

impl StockManager {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Create a stock item.
    ///
    /// Defaults: `order_date` ← now, `sold` ← false. A client-supplied
    /// `margin` is stripped; it is derived, not stored.
    pub async fn create(&self, mut data: Row) -> DomainResult<Row> {
        require_fields(&data, REQUIRED_FIELDS)?;

        data.remove("margin");
        data.entry("order_date")
            .or_insert_with(|| Value::String(Utc::now().to_rfc3339()));
        data.entry("sold").or_insert(Value::Bool(false));

        Ok(self.store.insert(tables::STOCK, data).await?)
    }

    pub async fn get_all(&self) -> DomainResult<Vec<Row>> {
        Ok(self.store.select(tables::STOCK, &[]).await?)
    }

    pub async fn get_by_id(&self, item_id: i64) -> DomainResult<Row> {
        let rows = self
            .store
            .select(tables::STOCK, &[Filter::eq(tables::STOCK_ID, item_id)])
            .await?;

        rows.into_iter()
            .next()
            .ok_or_else(|| DomainError::not_found(format!("stock item {item_id} not found")))
    }

    /// Partial-field update. The existence check runs first, so an unknown
    /// id fails without touching the store.
    pub async fn update(&self, item_id: i64, mut patch: Row) -> DomainResult<Row> {
        self.get_by_id(item_id).await?;

        patch.remove("margin");
        let rows = self
            .store
            .update(
                tables::STOCK,
                &[Filter::eq(tables::STOCK_ID, item_id)],
                patch,
            )
            .await?;

        rows.into_iter()
            .next()
            .ok_or_else(|| DomainError::operation("store returned no row for update"))
    }

    pub async fn delete(&self, item_id: i64) -> DomainResult<Row> {
        self.get_by_id(item_id).await?;

        let rows = self
            .store
            .delete(tables::STOCK, &[Filter::eq(tables::STOCK_ID, item_id)])
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

    fn manager() -> StockManager {
        let store = InMemoryRecordStore::with_tables(&[(tables::STOCK, tables::STOCK_ID)]);
        StockManager::new(Arc::new(store))
    }

    fn valid_item() -> Row {
        json!({
            "vendor_id": 4,
            "selling_price": 1200,
            "cost_price": 800,
            "item_name": "embroidered kurta",
            "quantity": 5,
            "size": "M",
        })
        .as_object()
        .unwrap()
        .clone()
    }

    #[tokio::test]
    async fn create_then_get_preserves_fields_and_applies_defaults() {
        let manager = manager();

        let created = manager.create(valid_item()).await.unwrap();
        let item_id = created["item_id"].as_i64().unwrap();

        let fetched = manager.get_by_id(item_id).await.unwrap();
        assert_eq!(fetched["item_name"], json!("embroidered kurta"));
        assert_eq!(fetched["quantity"], json!(5));
        assert_eq!(fetched["sold"], json!(false));
        assert!(fetched["order_date"].is_string());
    }

    #[tokio::test]
    async fn create_reports_every_missing_field() {
        let manager = manager();

        let err = manager
            .create(json!({ "item_name": "kurta" }).as_object().unwrap().clone())
            .await
            .unwrap_err();

        match err {
            DomainError::Validation(msg) => {
                for field in ["vendor_id", "selling_price", "cost_price", "quantity", "size"] {
                    assert!(msg.contains(field), "missing '{field}' in: {msg}");
                }
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_strips_client_supplied_margin() {
        let manager = manager();

        let mut data = valid_item();
        data.insert("margin".to_string(), json!(400));
        let created = manager.create(data).await.unwrap();

        assert!(!created.contains_key("margin"));
    }

    #[tokio::test]
    async fn get_by_id_on_unknown_id_fails_not_found() {
        let manager = manager();
        let err = manager.get_by_id(99).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_patches_only_given_fields() {
        let manager = manager();
        let created = manager.create(valid_item()).await.unwrap();
        let item_id = created["item_id"].as_i64().unwrap();

        let updated = manager
            .update(item_id, json!({ "quantity": 2 }).as_object().unwrap().clone())
            .await
            .unwrap();

        assert_eq!(updated["quantity"], json!(2));
        assert_eq!(updated["item_name"], json!("embroidered kurta"));
    }

    #[tokio::test]
    async fn update_and_delete_on_unknown_id_fail_without_mutation() {
        let manager = manager();
        manager.create(valid_item()).await.unwrap();

        let err = manager
            .update(99, json!({ "quantity": 0 }).as_object().unwrap().clone())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));

        let err = manager.delete(99).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));

        let all = manager.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0]["quantity"], json!(5));
    }

    #[tokio::test]
    async fn delete_returns_the_removed_row() {
        let manager = manager();
        let created = manager.create(valid_item()).await.unwrap();
        let item_id = created["item_id"].as_i64().unwrap();

        let removed = manager.delete(item_id).await.unwrap();
        assert_eq!(removed["item_id"], json!(item_id));
        assert!(manager.get_all().await.unwrap().is_empty());
    }
}
