//! Billing domain module.
//!
//! A bill is a denormalized, point-in-time snapshot of whatever stitching
//! and sales charges currently exist for one item — not a normalized ledger.
//! Re-billing the same item after either source changes produces a new,
//! possibly divergent bill.

pub mod bill;

pub use bill::{BillingAggregator, NewBill};
