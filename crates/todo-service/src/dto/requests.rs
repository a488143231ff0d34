//! Request DTOs
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

/// Update the caller's status message
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateStatusMessageRequest {
    #[validate(length(max = 100, message = "Status message must be at most 100 characters"))]
    pub status_message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_length_bound() {
        let ok = UpdateStatusMessageRequest {
            status_message: "a".repeat(100),
        };
        assert!(ok.validate().is_ok());

        let too_long = UpdateStatusMessageRequest {
            status_message: "a".repeat(101),
        };
        assert!(too_long.validate().is_err());
    }
}
