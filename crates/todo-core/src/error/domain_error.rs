//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{AlarmId, TodoId, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Public todo not found: {0}")]
    TodoNotFound(TodoId),

    #[error("Alarm not found: {0}")]
    AlarmNotFound(AlarmId),

    #[error("Reaction not found")]
    ReactionNotFound,

    #[error("Follow edge not found")]
    FollowNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid nickname: {0:?}")]
    InvalidNickname(String),

    #[error("Status message too long: max {max} characters")]
    StatusMessageTooLong { max: usize },

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Reaction already exists")]
    ReactionAlreadyExists,

    #[error("Already following this user")]
    AlreadyFollowing,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),
}

impl DomainError {
    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::TodoNotFound(_)
                | Self::AlarmNotFound(_)
                | Self::ReactionNotFound
                | Self::FollowNotFound
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidNickname(_)
                | Self::StatusMessageTooLong { .. }
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::ReactionAlreadyExists | Self::AlreadyFollowing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::UserNotFound(UserId::new(1)).is_not_found());
        assert!(DomainError::ReactionNotFound.is_not_found());
        assert!(!DomainError::ReactionAlreadyExists.is_not_found());
    }

    #[test]
    fn test_is_conflict() {
        assert!(DomainError::ReactionAlreadyExists.is_conflict());
        assert!(DomainError::AlreadyFollowing.is_conflict());
        assert!(!DomainError::FollowNotFound.is_conflict());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::TodoNotFound(TodoId::new(123));
        assert_eq!(err.to_string(), "Public todo not found: 123");
    }
}
