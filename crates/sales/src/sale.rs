use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use atelier_core::{tables, DomainError, DomainResult, Row, require_fields, row};
use atelier_store::{Filter, RecordStore};

const REQUIRED_FIELDS: &[&str] = &[
    "item_name",
    "cost_price",
    "selling_price",
    "mode",
    "cust_name",
    "order_date",
];

/// CRUD over the `sales` table.
#[derive(Clone)]
pub struct SalesManager {
    store: Arc<dyn RecordStore>,
}

impl SalesManager {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Create a sale.
    ///
    /// When the input flags `stitching = true`, a linked stitching record is
    /// inserted *after* the sale commit succeeds. If that second insert
    /// fails, the sale stays committed — there is no compensating rollback;
    /// the failure is logged and propagated.
    pub async fn create(&self, mut data: Row) -> DomainResult<Row> {
        require_fields(&data, REQUIRED_FIELDS)?;

        data.entry("stitching").or_insert(Value::Bool(false));
        let wants_stitching = row::get_bool(&data, "stitching").unwrap_or(false);

        let sale = self.store.insert(tables::SALES, data).await?;

        if wants_stitching {
            let linked = placeholder_stitching(&sale);
            if let Err(err) = self.store.insert(tables::STITCHING, linked).await {
                tracing::warn!(
                    error = %err,
                    sale_id = ?sale.get(tables::SALES_ID),
                    "sale committed but linked stitching insert failed; no rollback"
                );
                return Err(err.into());
            }
        }

        Ok(sale)
    }

    pub async fn get_all(&self) -> DomainResult<Vec<Row>> {
        Ok(self.store.select(tables::SALES, &[]).await?)
    }

    pub async fn get_by_id(&self, sale_id: i64) -> DomainResult<Row> {
        let rows = self
            .store
            .select(tables::SALES, &[Filter::eq(tables::SALES_ID, sale_id)])
            .await?;

        rows.into_iter()
            .next()
            .ok_or_else(|| DomainError::not_found(format!("sale record {sale_id} not found")))
    }

    pub async fn update(&self, sale_id: i64, patch: Row) -> DomainResult<Row> {
        self.get_by_id(sale_id).await?;

        let rows = self
            .store
            .update(tables::SALES, &[Filter::eq(tables::SALES_ID, sale_id)], patch)
            .await?;

        rows.into_iter()
            .next()
            .ok_or_else(|| DomainError::operation("store returned no row for update"))
    }

    pub async fn delete(&self, sale_id: i64) -> DomainResult<Row> {
        self.get_by_id(sale_id).await?;

        let rows = self
            .store
            .delete(tables::SALES, &[Filter::eq(tables::SALES_ID, sale_id)])
            .await?;

        rows.into_iter()
            .next()
            .ok_or_else(|| DomainError::operation("store returned no row for delete"))
    }
}

/// Placeholder stitching order for a freshly committed sale: preference still
/// to be decided, zero prices, dates copied from the sale.
fn placeholder_stitching(sale: &Row) -> Row {
    let order_date = sale
        .get("order_date")
        .cloned()
        .unwrap_or_else(|| Value::String(Utc::now().to_rfc3339()));

    let mut linked = Row::new();
    linked.insert(
        "item_id".to_string(),
        sale.get(tables::SALES_ID).cloned().unwrap_or(Value::Null),
    );
    linked.insert(
        "stitching_preference".to_string(),
        Value::String("TBD".to_string()),
    );
    linked.insert("tailor_price".to_string(), Value::from(0));
    linked.insert("selling_price".to_string(), Value::from(0));
    linked.insert(
        "item_name".to_string(),
        sale.get("item_name").cloned().unwrap_or(Value::Null),
    );
    linked.insert(
        "cust_name".to_string(),
        sale.get("cust_name").cloned().unwrap_or(Value::Null),
    );
    linked.insert("expected_date".to_string(), order_date.clone());
    linked.insert("order_date".to_string(), order_date);
    linked
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_store::InMemoryRecordStore;
    use serde_json::json;

    fn setup() -> (SalesManager, Arc<InMemoryRecordStore>) {
        let store = Arc::new(InMemoryRecordStore::with_tables(&[
            (tables::SALES, tables::SALES_ID),
            (tables::STITCHING, tables::STITCHING_ID),
        ]));
        (SalesManager::new(store.clone()), store)
    }

    fn valid_sale() -> Row {
        json!({
            "item_name": "bridal lehenga",
            "cost_price": 8000,
            "selling_price": 12000,
            "mode": "cash",
            "cust_name": "Amina",
            "order_date": "2024-05-20",
        })
        .as_object()
        .unwrap()
        .clone()
    }

    #[tokio::test]
    async fn create_defaults_stitching_flag_to_false() {
        let (manager, store) = setup();

        let sale = manager.create(valid_sale()).await.unwrap();
        assert_eq!(sale["stitching"], json!(false));

        let stitching = store.select(tables::STITCHING, &[]).await.unwrap();
        assert!(stitching.is_empty());
    }

    #[tokio::test]
    async fn create_with_stitching_flag_spawns_exactly_one_linked_record() {
        let (manager, store) = setup();

        let mut data = valid_sale();
        data.insert("stitching".to_string(), json!(true));
        let sale = manager.create(data).await.unwrap();

        let stitching = store.select(tables::STITCHING, &[]).await.unwrap();
        assert_eq!(stitching.len(), 1);
        assert_eq!(stitching[0]["item_id"], sale["item_id"]);
        assert_eq!(stitching[0]["stitching_preference"], json!("TBD"));
        assert_eq!(stitching[0]["tailor_price"], json!(0));
        assert_eq!(stitching[0]["selling_price"], json!(0));
        assert_eq!(stitching[0]["cust_name"], json!("Amina"));
        assert_eq!(stitching[0]["expected_date"], json!("2024-05-20"));
    }

    #[tokio::test]
    async fn failed_cascade_leaves_the_sale_committed() {
        // Stitching table not registered: its insert fails, the sale stays.
        let store = Arc::new(InMemoryRecordStore::with_tables(&[(
            tables::SALES,
            tables::SALES_ID,
        )]));
        let manager = SalesManager::new(store.clone());

        let mut data = valid_sale();
        data.insert("stitching".to_string(), json!(true));
        let err = manager.create(data).await.unwrap_err();
        assert!(matches!(err, DomainError::Operation(_)));

        let sales = store.select(tables::SALES, &[]).await.unwrap();
        assert_eq!(sales.len(), 1);
    }

    #[tokio::test]
    async fn create_reports_every_missing_field() {
        let (manager, _) = setup();

        let err = manager
            .create(json!({ "mode": "card" }).as_object().unwrap().clone())
            .await
            .unwrap_err();

        match err {
            DomainError::Validation(msg) => {
                for field in ["item_name", "cost_price", "selling_price", "cust_name", "order_date"] {
                    assert!(msg.contains(field), "missing '{field}' in: {msg}");
                }
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn update_and_delete_on_unknown_id_fail_not_found() {
        let (manager, _) = setup();

        let err = manager
            .update(42, json!({ "mode": "card" }).as_object().unwrap().clone())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));

        let err = manager.delete(42).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }
}
