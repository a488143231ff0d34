//! PostgreSQL implementation of TodoRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;

use todo_core::{PageRequest, PublicTodo, RepoResult, TodoId, TodoRepository, UserId};

use crate::models::TodoModel;

use super::error::map_db_error;

/// PostgreSQL implementation of TodoRepository
#[derive(Clone)]
pub struct PgTodoRepository {
    pool: PgPool,
}

impl PgTodoRepository {
    /// Create a new PgTodoRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for PgTodoRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: TodoId) -> RepoResult<Option<PublicTodo>> {
        let result = sqlx::query_as::<_, TodoModel>(
            r#"
            SELECT id, author_user_id, content, deadline_date, finished, created_at, updated_at
            FROM public_todos
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(PublicTodo::from))
    }

    #[instrument(skip(self, author_ids), fields(author_count = author_ids.len()))]
    async fn find_pending(
        &self,
        deadline: NaiveDate,
        author_ids: &[UserId],
        page: &PageRequest,
    ) -> RepoResult<Vec<PublicTodo>> {
        if author_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = author_ids.iter().map(|id| id.into_inner()).collect();

        let results = sqlx::query_as::<_, TodoModel>(
            r#"
            SELECT id, author_user_id, content, deadline_date, finished, created_at, updated_at
            FROM public_todos
            WHERE finished = FALSE
              AND deadline_date = $1
              AND author_user_id = ANY($2)
            ORDER BY id
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(deadline)
        .bind(&ids)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(PublicTodo::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgTodoRepository>();
    }
}
