//! PostgreSQL implementation of FollowRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use todo_core::{DomainError, Follow, FollowRepository, RepoResult, UserId};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of FollowRepository
#[derive(Clone)]
pub struct PgFollowRepository {
    pool: PgPool,
}

impl PgFollowRepository {
    /// Create a new PgFollowRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepository for PgFollowRepository {
    #[instrument(skip(self))]
    async fn find_followee_ids(&self, sender_id: UserId) -> RepoResult<Vec<UserId>> {
        let results = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT receiver_user_id
            FROM follows
            WHERE sender_user_id = $1
            ORDER BY receiver_user_id
            "#,
        )
        .bind(sender_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(UserId::new).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, follow: &Follow) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO follows (sender_user_id, receiver_user_id, created_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(follow.sender_id.into_inner())
        .bind(follow.receiver_id.into_inner())
        .bind(follow.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyFollowing))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, sender_id: UserId, receiver_id: UserId) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM follows WHERE sender_user_id = $1 AND receiver_user_id = $2
            "#,
        )
        .bind(sender_id.into_inner())
        .bind(receiver_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgFollowRepository>();
    }
}
