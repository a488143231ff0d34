//! Public to-do database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for the public_todos table
#[derive(Debug, Clone, FromRow)]
pub struct TodoModel {
    pub id: i64,
    pub author_user_id: i64,
    pub content: String,
    pub deadline_date: NaiveDate,
    pub finished: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
