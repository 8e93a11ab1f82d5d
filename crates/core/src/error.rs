//! Domain error model.

use thiserror::Error;

/// Result type used across the catalog crates.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic failures of pure catalog computations and
/// of decoding records at the product-store boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An operation needs at least one element (e.g. a price range over no variations).
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// A criterion label was not recognized (strict parsing only).
    #[error("invalid criterion: {0}")]
    InvalidCriterion(String),

    /// A product record is missing required fields or carries out-of-range values.
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    /// An identifier was invalid (e.g. empty).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn empty_input(msg: impl Into<String>) -> Self {
        Self::EmptyInput(msg.into())
    }

    pub fn invalid_criterion(msg: impl Into<String>) -> Self {
        Self::InvalidCriterion(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedRecord(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = DomainError::empty_input("no variations to price");
        assert_eq!(err.to_string(), "empty input: no variations to price");

        let err = DomainError::malformed("missing field `expiryDate`");
        assert_eq!(err.to_string(), "malformed record: missing field `expiryDate`");
    }
}
