//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use todo_core::{PageRequest, RepoResult, User, UserId, UserRepository};

use crate::models::UserModel;

use super::error::map_db_error;

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT id, nickname, status_message, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn search_by_nickname(&self, term: &str, page: &PageRequest) -> RepoResult<Vec<User>> {
        let results = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT id, nickname, status_message, created_at, updated_at
            FROM users
            WHERE nickname LIKE '%' || $1 || '%'
            ORDER BY nickname
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(term)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn update_status_message(&self, id: UserId, message: &str) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE users SET status_message = $2, updated_at = NOW() WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .bind(message)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
