use std::sync::Arc;

use atelier_analytics::DashboardAnalytics;
use atelier_billing::BillingAggregator;
use atelier_core::tables;
use atelier_sales::SalesManager;
use atelier_stitching::StitchingManager;
use atelier_stock::StockManager;
use atelier_store::{InMemoryRecordStore, PostgrestRecordStore, RecordStore};

/// Composition root: one store handle, stateless managers built around it.
pub struct AppServices {
    pub stock: StockManager,
    pub sales: SalesManager,
    pub stitching: StitchingManager,
    pub billing: BillingAggregator,
    pub analytics: DashboardAnalytics,
}

impl AppServices {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            stock: StockManager::new(store.clone()),
            sales: SalesManager::new(store.clone()),
            stitching: StitchingManager::new(store.clone()),
            billing: BillingAggregator::new(store.clone()),
            analytics: DashboardAnalytics::new(store),
        }
    }
}

/// Build services from the environment.
///
/// `ATELIER_STORE_URL` (the hosted store's REST base, e.g.
/// `https://<project>.supabase.co/rest/v1`) plus `ATELIER_STORE_API_KEY`
/// select the hosted store. Without a URL the API runs against the
/// in-memory store, which is only suitable for development.
pub fn build_services() -> AppServices {
    let store: Arc<dyn RecordStore> = match std::env::var("ATELIER_STORE_URL") {
        Ok(url) => {
            let api_key = std::env::var("ATELIER_STORE_API_KEY").unwrap_or_else(|_| {
                tracing::warn!("ATELIER_STORE_API_KEY not set; sending unauthenticated requests");
                String::new()
            });
            tracing::info!(url, "using hosted record store");
            Arc::new(PostgrestRecordStore::new(url, api_key))
        }
        Err(_) => {
            tracing::warn!("ATELIER_STORE_URL not set; using in-memory store (data is not persisted)");
            in_memory_store()
        }
    };

    AppServices::new(store)
}

/// In-memory store with every table registered. Used for dev fallback and by
/// the black-box API tests.
pub fn in_memory_store() -> Arc<dyn RecordStore> {
    Arc::new(InMemoryRecordStore::with_tables(&[
        (tables::STOCK, tables::STOCK_ID),
        (tables::SALES, tables::SALES_ID),
        (tables::STITCHING, tables::STITCHING_ID),
        (tables::BILLING, tables::BILLING_ID),
        (tables::MONTHLY_SALES, "id"),
    ]))
}
