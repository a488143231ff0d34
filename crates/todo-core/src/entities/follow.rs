//! Follow entity - a directed edge in the follow graph

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

/// Directed follow edge: sender follows receiver
///
/// The (sender, receiver) pair is unique; self-loops are rejected by the
/// calling layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Follow {
    pub sender_id: UserId,
    pub receiver_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Follow {
    /// Create a new follow edge
    pub fn new(sender_id: UserId, receiver_id: UserId) -> Self {
        Self {
            sender_id,
            receiver_id,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_creation() {
        let follow = Follow::new(UserId::new(1), UserId::new(2));
        assert_eq!(follow.sender_id, UserId::new(1));
        assert_eq!(follow.receiver_id, UserId::new(2));
    }
}
