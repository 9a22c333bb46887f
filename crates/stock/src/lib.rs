//! Stock domain module.
//!
//! Field-validated CRUD over the `stock` table. Margin is derived
//! (selling − cost), never stored authoritatively.

pub mod item;

pub use item::StockManager;
