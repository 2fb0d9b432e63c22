//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable by the immediate caller. Stores never swallow
/// these; skipping and continuing is a decision for the facade.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation at construction time (empty name, malformed
    /// email, negative price, check-in after check-out).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A customer with the same email is already registered.
    #[error("customer already exists: {0}")]
    CustomerAlreadyExists(String),

    /// No customer is registered under the given email.
    #[error("customer not found: {0}")]
    CustomerNotFound(String),

    /// A room with the same room number is already stored.
    #[error("room already exists: {0}")]
    RoomAlreadyExists(String),

    /// The room has a reservation overlapping the requested dates.
    #[error("room already reserved: {0}")]
    RoomAlreadyReserved(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn customer_already_exists(email: impl Into<String>) -> Self {
        Self::CustomerAlreadyExists(email.into())
    }

    pub fn customer_not_found(email: impl Into<String>) -> Self {
        Self::CustomerNotFound(email.into())
    }

    pub fn room_already_exists(room_number: impl Into<String>) -> Self {
        Self::RoomAlreadyExists(room_number.into())
    }

    pub fn room_already_reserved(msg: impl Into<String>) -> Self {
        Self::RoomAlreadyReserved(msg.into())
    }

    /// Whether this error is a key/interval conflict rather than bad input.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::CustomerAlreadyExists(_) | Self::RoomAlreadyExists(_) | Self::RoomAlreadyReserved(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflicts_are_distinguished_from_validation() {
        assert!(DomainError::room_already_reserved("101").is_conflict());
        assert!(DomainError::customer_already_exists("a@b.cd").is_conflict());
        assert!(!DomainError::invalid_argument("bad").is_conflict());
        assert!(!DomainError::customer_not_found("a@b.cd").is_conflict());
    }

    #[test]
    fn messages_carry_the_offending_key() {
        let err = DomainError::room_already_exists("101");
        assert_eq!(err.to_string(), "room already exists: 101");
    }
}
