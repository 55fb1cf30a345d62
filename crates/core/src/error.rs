//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable and reported to the immediate caller. Nothing
/// in the domain layer retries on its own.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required value was missing or malformed (blank id/name, negative
    /// initial quantity, unknown movement kind).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A product with the same identifier already exists.
    #[error("duplicate id: {0}")]
    DuplicateId(String),

    /// A requested product was not found.
    #[error("not found")]
    NotFound,

    /// A stock movement carried a negative quantity.
    #[error("invalid quantity: {0} (must be >= 0)")]
    InvalidQuantity(i64),

    /// A removal asked for more than is currently in stock.
    #[error("insufficient stock (available: {available}, requested: {requested})")]
    InsufficientStock { available: i64, requested: i64 },

    /// A bounded history was constructed with a non-positive capacity.
    #[error("invalid capacity: {0} (must be > 0)")]
    InvalidCapacity(usize),
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId(id.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn insufficient_stock(available: i64, requested: i64) -> Self {
        Self::InsufficientStock {
            available,
            requested,
        }
    }

    /// Stable, machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::InvalidInput(_) => "invalid_input",
            DomainError::DuplicateId(_) => "duplicate_id",
            DomainError::NotFound => "not_found",
            DomainError::InvalidQuantity(_) => "invalid_quantity",
            DomainError::InsufficientStock { .. } => "insufficient_stock",
            DomainError::InvalidCapacity(_) => "invalid_capacity",
        }
    }
}
