//! User entity - represents a registered account

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::UserId;

/// Maximum length of a user's status message
pub const STATUS_MESSAGE_MAX: usize = 100;

/// User entity
///
/// Identity is immutable after registration; the status message is the only
/// owner-mutable field this core touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub nickname: String,
    pub status_message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with an empty status message
    pub fn new(id: UserId, nickname: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            nickname,
            status_message: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the status message, enforcing the length bound
    pub fn set_status_message(&mut self, message: String) -> Result<(), DomainError> {
        if message.chars().count() > STATUS_MESSAGE_MAX {
            return Err(DomainError::StatusMessageTooLong {
                max: STATUS_MESSAGE_MAX,
            });
        }
        self.status_message = message;
        self.updated_at = Utc::now();
        Ok(())
    }
}

/// Validate a nickname: non-empty, lowercase letters and digits only
pub fn validate_nickname(nickname: &str) -> Result<(), DomainError> {
    if nickname.is_empty() {
        return Err(DomainError::InvalidNickname(nickname.to_string()));
    }
    if !nickname
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    {
        return Err(DomainError::InvalidNickname(nickname.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_nicknames() {
        assert!(validate_nickname("alice").is_ok());
        assert!(validate_nickname("bob42").is_ok());
        assert!(validate_nickname("7").is_ok());
    }

    #[test]
    fn test_invalid_nicknames() {
        assert!(validate_nickname("").is_err());
        assert!(validate_nickname("Alice").is_err());
        assert!(validate_nickname("bob smith").is_err());
        assert!(validate_nickname("bob_42").is_err());
        assert!(validate_nickname("café").is_err());
    }

    #[test]
    fn test_status_message_bound() {
        let mut user = User::new(UserId::new(1), "alice".to_string());
        assert!(user.set_status_message("shipping it".to_string()).is_ok());
        assert_eq!(user.status_message, "shipping it");

        let too_long = "x".repeat(STATUS_MESSAGE_MAX + 1);
        assert!(matches!(
            user.set_status_message(too_long),
            Err(DomainError::StatusMessageTooLong { .. })
        ));
        // previous message survives a rejected update
        assert_eq!(user.status_message, "shipping it");
    }
}
