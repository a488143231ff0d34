//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use todo_core::{
    DomainError, PageRequest, Reaction, ReactionKind, ReactionRepository, RepoResult, TodoId,
    UserId,
};

use crate::models::ReactionModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find(
        &self,
        reactor_id: UserId,
        todo_id: TodoId,
        kind: ReactionKind,
    ) -> RepoResult<Option<Reaction>> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT reactor_user_id, todo_id, kind, created_at
            FROM reactions
            WHERE reactor_user_id = $1 AND todo_id = $2 AND kind = $3
            "#,
        )
        .bind(reactor_id.into_inner())
        .bind(todo_id.into_inner())
        .bind(kind.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Reaction::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn create(&self, reaction: &Reaction) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO reactions (reactor_user_id, todo_id, kind, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(reaction.reactor_id.into_inner())
        .bind(reaction.todo_id.into_inner())
        .bind(reaction.kind.as_str())
        .bind(reaction.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::ReactionAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(
        &self,
        reactor_id: UserId,
        todo_id: TodoId,
        kind: ReactionKind,
    ) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM reactions
            WHERE reactor_user_id = $1 AND todo_id = $2 AND kind = $3
            "#,
        )
        .bind(reactor_id.into_inner())
        .bind(todo_id.into_inner())
        .bind(kind.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn count(&self, todo_id: TodoId, kind: ReactionKind) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM reactions WHERE todo_id = $1 AND kind = $2
            "#,
        )
        .bind(todo_id.into_inner())
        .bind(kind.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn find_reactor_ids(
        &self,
        todo_id: TodoId,
        kind: ReactionKind,
        page: &PageRequest,
    ) -> RepoResult<Vec<UserId>> {
        let results = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT reactor_user_id
            FROM reactions
            WHERE todo_id = $1 AND kind = $2
            ORDER BY created_at, reactor_user_id
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(todo_id.into_inner())
        .bind(kind.as_str())
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(UserId::new).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgReactionRepository>();
    }
}
