//! Public to-do entity - a task visible to followers

use chrono::{DateTime, NaiveDate, Utc};

use crate::value_objects::{TodoId, UserId};

/// Public to-do item
///
/// Reaction counts are not stored here; they are looked up from the counter
/// cache at read time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicTodo {
    pub id: TodoId,
    pub author_id: UserId,
    pub content: String,
    pub deadline: NaiveDate,
    pub finished: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PublicTodo {
    /// Create a new, unfinished to-do
    pub fn new(id: TodoId, author_id: UserId, content: String, deadline: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id,
            author_id,
            content,
            deadline,
            finished: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this item is pending on the given date
    pub fn is_pending_on(&self, date: NaiveDate) -> bool {
        !self.finished && self.deadline == date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_todo() -> PublicTodo {
        PublicTodo::new(
            TodoId::new(1),
            UserId::new(10),
            "write the report".to_string(),
            NaiveDate::from_ymd_opt(2026, 8, 28).unwrap(),
        )
    }

    #[test]
    fn test_new_todo_starts_unfinished() {
        let todo = sample_todo();
        assert!(!todo.finished);
    }

    #[test]
    fn test_is_pending_on() {
        let mut todo = sample_todo();
        let due = todo.deadline;
        assert!(todo.is_pending_on(due));
        assert!(!todo.is_pending_on(due.succ_opt().unwrap()));
        todo.finished = true;
        assert!(!todo.is_pending_on(due));
    }
}
