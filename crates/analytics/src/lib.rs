//! Dashboard analytics: order status classification and summary metrics.
//!
//! Read-only fan-out over the sales and stitching tables. No record-level
//! join is performed anywhere here; the two tables are always classified and
//! aggregated independently.

pub mod dashboard;

pub use dashboard::{DashboardAnalytics, PendingOrders, SummaryMetrics};
