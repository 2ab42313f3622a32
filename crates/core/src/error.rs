//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure here is deterministic: the same catalog state and the same
/// input always produce the same error. There is no transient category and
/// nothing to retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (malformed or out-of-range input, or a
    /// reference to an undefined taxonomy entry).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Creation of an entity whose unique identifier already exists.
    #[error("duplicate: {0}")]
    Duplicate(String),

    /// An operation addressed an entity that does not exist.
    #[error("not found: {0}")]
    NotFound(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn duplicate(msg: impl Into<String>) -> Self {
        Self::Duplicate(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
