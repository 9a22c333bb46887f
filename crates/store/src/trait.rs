use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use atelier_core::{DomainError, Row};

pub type StoreResult<T> = Result<T, StoreError>;

/// Record store failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The request never completed (connection, timeout, ...).
    #[error("store transport error: {0}")]
    Transport(String),

    /// The store answered with a failure.
    #[error("store error: {0}")]
    Backend(String),

    /// The store answered with something we could not interpret.
    #[error("store decode error: {0}")]
    Decode(String),
}

impl StoreError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        DomainError::operation(err.to_string())
    }
}

/// Row filter. Everything this system needs is equality-on-identifier plus
/// the two date-range comparisons the order classifier uses.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Eq(String, Value),
    Lt(String, Value),
    Gte(String, Value),
}

impl Filter {
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Eq(field.into(), value.into())
    }

    pub fn lt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Lt(field.into(), value.into())
    }

    pub fn gte(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Gte(field.into(), value.into())
    }
}

/// Contract with the record store: pass-through table operations.
///
/// Implementations return the rows the store reports as affected: `insert`
/// the inserted row (with its assigned id), `update`/`delete` the post-update
/// / removed rows.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn select(&self, table: &str, filters: &[Filter]) -> StoreResult<Vec<Row>>;

    async fn insert(&self, table: &str, row: Row) -> StoreResult<Row>;

    async fn update(&self, table: &str, filters: &[Filter], patch: Row) -> StoreResult<Vec<Row>>;

    async fn delete(&self, table: &str, filters: &[Filter]) -> StoreResult<Vec<Row>>;

    async fn count(&self, table: &str, filters: &[Filter]) -> StoreResult<u64>;
}
