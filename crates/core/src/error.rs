//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Structural/input failures only. Business-rule validation outcomes travel
/// as code lists (data), not as this type, so callers can re-prompt without
/// losing state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed direct input to an operation (unassigned product,
    /// non-positive quantity). The operation has no effect.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A positional id fell outside `[1, count]` of the catalog listing.
    #[error("Invalid id")]
    IndexOutOfRange,

    /// A mutation would violate a stock invariant.
    #[error("{0}")]
    InvalidOperation(String),

    /// A referenced record was not found (domain-level).
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invalid_operation(msg: impl Into<String>) -> Self {
        Self::InvalidOperation(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_out_of_range_message_is_stable() {
        // Callers match on this message at the presentation boundary.
        assert_eq!(DomainError::IndexOutOfRange.to_string(), "Invalid id");
    }

    #[test]
    fn invalid_operation_carries_its_message_verbatim() {
        let err = DomainError::invalid_operation("stock too low");
        assert_eq!(err.to_string(), "stock too low");
    }
}
