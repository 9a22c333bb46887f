//! `atelier-store` — the record store collaborator.
//!
//! The hosted relational store is reached over its REST surface and treated
//! as an opaque dependency: read-committed semantics assumed, no cross-table
//! atomicity, isolation level not ours to control. Every call is attempted
//! exactly once; failures surface synchronously to the caller.

pub mod memory;
pub mod postgrest;
mod r#trait;

pub use memory::InMemoryRecordStore;
pub use postgrest::PostgrestRecordStore;
pub use r#trait::{Filter, RecordStore, StoreError, StoreResult};
