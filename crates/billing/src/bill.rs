use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;

use atelier_core::{tables, DomainError, DomainResult, Row, row};
use atelier_store::{Filter, RecordStore};

/// Bill row as persisted to the `billing` table. The only entity this
/// system constructs itself rather than passing through from the client.
#[derive(Debug, Clone, Serialize)]
pub struct NewBill {
    pub item_id: Value,
    pub total_amount: f64,
    pub bill_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stitching_id: Option<Value>,
}

/// Joins stitching and sales charges by shared `item_id` into bill snapshots.
#[derive(Clone)]
pub struct BillingAggregator {
    store: Arc<dyn RecordStore>,
}

impl BillingAggregator {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Create a bill for an item.
    ///
    /// Gathers the first matching stitching and sales record (at most one
    /// each expected; uniqueness is not enforced, first match wins), sums
    /// whichever selling prices are found, persists the snapshot and returns
    /// the merged detail mapping plus the persisted fields.
    pub async fn create_bill(&self, data: Row) -> DomainResult<Row> {
        let item_id = match data.get("item_id") {
            None | Some(Value::Null) => {
                return Err(DomainError::validation("item_id is required for billing"));
            }
            Some(Value::String(s)) if s.trim().is_empty() => {
                return Err(DomainError::validation("item_id is required for billing"));
            }
            Some(value) => value.clone(),
        };

        let mut total_amount = 0.0;
        let mut details = Row::new();

        let stitching = self
            .store
            .select(tables::STITCHING, &[Filter::eq("item_id", item_id.clone())])
            .await?;
        if let Some(record) = stitching.into_iter().next() {
            let price = row::get_f64(&record, "selling_price").ok_or_else(|| {
                DomainError::operation("stitching record has no numeric selling_price")
            })?;
            total_amount += price;
            details.insert(
                "stitching_id".to_string(),
                record.get(tables::STITCHING_ID).cloned().unwrap_or(Value::Null),
            );
            details.insert("stitching_price".to_string(), Value::from(price));
            details.insert(
                "stitching_preference".to_string(),
                record.get("stitching_preference").cloned().unwrap_or(Value::Null),
            );
        }

        let sales = self
            .store
            .select(tables::SALES, &[Filter::eq("item_id", item_id.clone())])
            .await?;
        if let Some(record) = sales.into_iter().next() {
            let price = row::get_f64(&record, "selling_price").ok_or_else(|| {
                DomainError::operation("sale record has no numeric selling_price")
            })?;
            total_amount += price;
            details.insert("sale_price".to_string(), Value::from(price));
            details.insert(
                "customer_name".to_string(),
                record.get("cust_name").cloned().unwrap_or(Value::Null),
            );
            details.insert(
                "order_date".to_string(),
                record.get("order_date").cloned().unwrap_or(Value::Null),
            );
        }

        if details.is_empty() {
            return Err(DomainError::not_found(format!(
                "no stitching or sales record found for item_id {item_id}"
            )));
        }

        let bill = NewBill {
            item_id,
            total_amount,
            bill_date: Utc::now().date_naive(),
            stitching_id: details.get("stitching_id").cloned(),
        };
        let bill_row = serde_json::to_value(&bill)
            .ok()
            .and_then(|v| v.as_object().cloned())
            .ok_or_else(|| DomainError::operation("bill row did not serialize to an object"))?;

        let persisted = self.store.insert(tables::BILLING, bill_row).await?;
        for (key, value) in persisted {
            details.insert(key, value);
        }

        Ok(details)
    }

    pub async fn get_all_bills(&self) -> DomainResult<Vec<Row>> {
        Ok(self.store.select(tables::BILLING, &[]).await?)
    }

    pub async fn get_bill_by_id(&self, bill_id: i64) -> DomainResult<Row> {
        let rows = self
            .store
            .select(tables::BILLING, &[Filter::eq(tables::BILLING_ID, bill_id)])
            .await?;

        rows.into_iter()
            .next()
            .ok_or_else(|| DomainError::not_found(format!("bill record {bill_id} not found")))
    }

    /// Bills are immutable once created; deletion is the only mutation.
    pub async fn delete_bill(&self, bill_id: i64) -> DomainResult<Row> {
        self.get_bill_by_id(bill_id).await?;

        let rows = self
            .store
            .delete(tables::BILLING, &[Filter::eq(tables::BILLING_ID, bill_id)])
            .await?;

        rows.into_iter()
            .next()
            .ok_or_else(|| DomainError::operation("store returned no row for delete"))
    }
}
