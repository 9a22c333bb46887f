use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use atelier_core::{tables, DomainResult, Row, row};
use atelier_store::{Filter, RecordStore};

/// Open orders partitioned by expected date, per table.
#[derive(Debug, Default, Serialize)]
pub struct PendingOrders {
    pub pending_sales: Vec<Row>,
    pub working_sales: Vec<Row>,
    pub pending_stitching: Vec<Row>,
    pub working_stitching: Vec<Row>,
}

/// Dashboard counts and revenue.
#[derive(Debug, PartialEq, Serialize)]
pub struct SummaryMetrics {
    pub total_sales: u64,
    pub total_stitching_orders: u64,
    pub total_revenue: f64,
}

/// Read-only analytics over the sales and stitching tables.
#[derive(Clone)]
pub struct DashboardAnalytics {
    store: Arc<dyn RecordStore>,
}

impl DashboardAnalytics {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Partition open orders around `today`.
    ///
    /// A record is **pending** when `expected_date < today` and **working**
    /// when `expected_date >= today`: the boundary day is still working.
    /// ISO date strings make both a lexical and a date comparison agree.
    pub async fn pending_orders(&self, today: NaiveDate) -> DomainResult<PendingOrders> {
        let today = today.format("%Y-%m-%d").to_string();

        let pending_sales = self
            .store
            .select(tables::SALES, &[Filter::lt("expected_date", today.clone())])
            .await?;
        let working_sales = self
            .store
            .select(tables::SALES, &[Filter::gte("expected_date", today.clone())])
            .await?;
        let pending_stitching = self
            .store
            .select(tables::STITCHING, &[Filter::lt("expected_date", today.clone())])
            .await?;
        let working_stitching = self
            .store
            .select(tables::STITCHING, &[Filter::gte("expected_date", today)])
            .await?;

        Ok(PendingOrders {
            pending_sales,
            working_sales,
            pending_stitching,
            working_stitching,
        })
    }

    /// Dashboard totals.
    ///
    /// Revenue sums selling prices across sales *and* stitching. A sale with
    /// a linked stitching order contributes twice: they are two billable
    /// line items, not one.
    pub async fn summary_metrics(&self) -> DomainResult<SummaryMetrics> {
        let total_sales = self.store.count(tables::SALES, &[]).await?;
        let total_stitching_orders = self.store.count(tables::STITCHING, &[]).await?;

        let mut total_revenue = 0.0;
        for record in self.store.select(tables::SALES, &[]).await? {
            total_revenue += row::get_f64(&record, "selling_price").unwrap_or(0.0);
        }
        for record in self.store.select(tables::STITCHING, &[]).await? {
            total_revenue += row::get_f64(&record, "selling_price").unwrap_or(0.0);
        }

        Ok(SummaryMetrics {
            total_sales,
            total_stitching_orders,
            total_revenue,
        })
    }

    /// Pass-through read of the store-maintained monthly rollup.
    pub async fn monthly_sales(&self) -> DomainResult<Vec<Row>> {
        Ok(self.store.select(tables::MONTHLY_SALES, &[]).await?)
    }
}
