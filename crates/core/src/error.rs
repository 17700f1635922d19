//! Service error model.

use thiserror::Error;

/// Result type used across the workflow and its collaborators.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service-level error.
///
/// The three recoverable kinds map directly onto the caller contract:
/// malformed input, missing referent, violated business rule. Anything
/// unexpected (poisoned locks, storage faults) is reported as `Internal`
/// and must not leak its detail past the boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Malformed or empty input (e.g. an order with no lines).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// A referenced user, product, inventory row, or order does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A business rule was violated (inactive product, insufficient stock).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Unexpected failure; opaque to callers.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether a caller can act on this error (retry with corrected input)
    /// as opposed to an opaque internal fault.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Internal(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_the_kind() {
        let err = ServiceError::conflict("insufficient stock");
        assert_eq!(err.to_string(), "conflict: insufficient stock");
    }

    #[test]
    fn internal_is_not_recoverable() {
        assert!(ServiceError::bad_request("x").is_recoverable());
        assert!(ServiceError::not_found("x").is_recoverable());
        assert!(ServiceError::conflict("x").is_recoverable());
        assert!(!ServiceError::internal("x").is_recoverable());
    }
}
