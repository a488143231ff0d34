//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use std::fmt;

use todo_core::DomainError;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain rule violation
    Domain(DomainError),

    /// Resource not found
    NotFound { resource: &'static str, id: String },

    /// Validation error
    Validation(String),

    /// Conflict (e.g., duplicate resource)
    Conflict(String),

    /// Internal error
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::NotFound { resource, id } => write!(f, "{resource} not found: {id}"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
            Self::Conflict(msg) => write!(f, "Conflict: {msg}"),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Create a not found error
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether this error reports a missing resource
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Domain(e) => e.is_not_found(),
            Self::NotFound { .. } => true,
            _ => false,
        }
    }

    /// Whether this error reports a conflicting write
    pub fn is_conflict(&self) -> bool {
        match self {
            Self::Domain(e) => e.is_conflict(),
            Self::Conflict(_) => true,
            _ => false,
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use todo_core::UserId;

    #[test]
    fn test_not_found_error() {
        let err = ServiceError::not_found("User", "123");
        assert!(err.is_not_found());
        assert!(err.to_string().contains("User not found: 123"));
    }

    #[test]
    fn test_domain_error_classification() {
        let err = ServiceError::from(DomainError::ReactionAlreadyExists);
        assert!(err.is_conflict());
        assert!(!err.is_not_found());

        let err = ServiceError::from(DomainError::UserNotFound(UserId::new(7)));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_validation_error_display() {
        let err = ServiceError::validation("cannot follow yourself");
        assert_eq!(err.to_string(), "Validation error: cannot follow yourself");
    }
}
