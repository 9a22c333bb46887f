//! Table vocabulary of the hosted record store.
//!
//! Identifiers are store-assigned (serial primary keys); nothing in this
//! process mints ids. Cross-entity relations are resolved at read time by
//! shared `item_id`, never by managed foreign keys.

/// Stock items.
pub const STOCK: &str = "stock";
pub const STOCK_ID: &str = "item_id";

/// Sale records.
pub const SALES: &str = "sales";
pub const SALES_ID: &str = "item_id";

/// Stitching orders. `item_id` here is a weak, optional reference to a sale.
pub const STITCHING: &str = "stitching";
pub const STITCHING_ID: &str = "stitching_id";

/// Denormalized bill snapshots.
pub const BILLING: &str = "billing";
pub const BILLING_ID: &str = "bill_id";

/// Read-only monthly sales rollup maintained by the store.
pub const MONTHLY_SALES: &str = "monthly_sales";
