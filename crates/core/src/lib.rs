//! `atelier-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the closed error set, the dynamic row type the managers pass around, table
//! vocabulary, and input validation helpers.

pub mod error;
pub mod row;
pub mod tables;
pub mod validate;

pub use error::{DomainError, DomainResult};
pub use row::Row;
pub use validate::require_fields;
