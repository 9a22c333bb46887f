//! Stitching domain module.
//!
//! Field-validated CRUD over the `stitching` table. A stitching order may
//! carry a weak `item_id` reference to a sale: validated at creation time,
//! never enforced afterwards (no cascade in either direction).

pub mod record;

pub use record::StitchingManager;
