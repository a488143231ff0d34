//! Alarm database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the alarms table
#[derive(Debug, Clone, FromRow)]
pub struct AlarmModel {
    pub id: i64,
    pub receiver_user_id: i64,
    pub sender_user_id: Option<i64>,
    pub people_count: i64,
    pub related_todo_id: Option<i64>,
    pub kind: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}
