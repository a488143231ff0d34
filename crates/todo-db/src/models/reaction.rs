//! Reaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the reactions table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub reactor_user_id: i64,
    pub todo_id: i64,
    pub kind: String,
    pub created_at: DateTime<Utc>,
}
