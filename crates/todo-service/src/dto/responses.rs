//! Response DTOs
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use todo_core::{AlarmId, AlarmKind, TodoId, UserId};

/// Public view of a user
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub nickname: String,
    pub status_message: String,
    pub created_at: DateTime<Utc>,
}

/// One entry in a viewer's timeline: a followee's to-do due today,
/// decorated with its current reaction counts
#[derive(Debug, Clone, Serialize)]
pub struct TimelineItem {
    pub todo_id: TodoId,
    pub author_id: UserId,
    pub author_nickname: String,
    pub content: String,
    pub deadline: NaiveDate,
    pub support_count: i64,
    pub nag_count: i64,
}

/// One alarm row shown to its receiver
#[derive(Debug, Clone, Serialize)]
pub struct AlarmResponse {
    pub id: AlarmId,
    pub kind: AlarmKind,
    pub content: String,
    pub people_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_todo_id: Option<TodoId>,
    pub modified_at: DateTime<Utc>,
}
