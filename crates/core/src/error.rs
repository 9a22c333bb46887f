//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// This is a deliberately closed set: callers branch on the kind, never on a
/// parsed message string. `Validation` and `NotFound` are client-caused;
/// everything else (store faults, unexpected row shapes) is wrapped into
/// `Operation` with the original cause's message preserved.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed or incomplete input (e.g. missing required fields).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A referenced entity does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Any other failure: remote-store faults, unexpected nulls, bad shapes.
    #[error("operation failed: {0}")]
    Operation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn operation(msg: impl Into<String>) -> Self {
        Self::Operation(msg.into())
    }
}
