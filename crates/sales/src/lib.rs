//! Sales domain module.
//!
//! Field-validated CRUD over the `sales` table, plus the sale→stitching
//! cascade: a sale flagged `stitching = true` spawns a placeholder stitching
//! order linked by the new sale's `item_id`.

pub mod sale;

pub use sale::SalesManager;
