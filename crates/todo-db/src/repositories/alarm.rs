//! PostgreSQL implementation of AlarmRepository
//!
//! The aggregate upsert leans on a partial unique index over
//! `(related_todo_id, kind)` so that concurrent senders racing on the same
//! to-do converge on a single row with an accurate people-count.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use todo_core::{
    AggregateAlarmUpsert, Alarm, AlarmId, AlarmKind, AlarmRepository, PageRequest, RepoResult,
    TodoId, UserId,
};

use crate::models::AlarmModel;

use super::error::map_db_error;

const ALARM_COLUMNS: &str =
    "id, receiver_user_id, sender_user_id, people_count, related_todo_id, kind, content, \
     created_at, modified_at";

/// PostgreSQL implementation of AlarmRepository
#[derive(Clone)]
pub struct PgAlarmRepository {
    pool: PgPool,
}

impl PgAlarmRepository {
    /// Create a new PgAlarmRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AlarmRepository for PgAlarmRepository {
    #[instrument(skip(self))]
    async fn find_by_todo_and_kind(
        &self,
        todo_id: TodoId,
        kind: AlarmKind,
    ) -> RepoResult<Option<Alarm>> {
        let result = sqlx::query_as::<_, AlarmModel>(&format!(
            "SELECT {ALARM_COLUMNS} FROM alarms WHERE related_todo_id = $1 AND kind = $2"
        ))
        .bind(todo_id.into_inner())
        .bind(kind.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Alarm::try_from).transpose()
    }

    #[instrument(skip(self, upsert), fields(todo_id = %upsert.todo_id, kind = %upsert.kind))]
    async fn upsert_aggregate(&self, upsert: &AggregateAlarmUpsert<'_>) -> RepoResult<Alarm> {
        // Single statement so check-then-insert cannot race: the conflict arm
        // increments people_count and rewrites the content from the new count.
        // An aggregate row with more than one sender carries no sender id.
        let model = sqlx::query_as::<_, AlarmModel>(&format!(
            r#"
            INSERT INTO alarms
                (receiver_user_id, sender_user_id, people_count, related_todo_id, kind, content,
                 created_at, modified_at)
            VALUES ($1, $2, 1, $3, $4, $5, NOW(), NOW())
            ON CONFLICT (related_todo_id, kind) WHERE related_todo_id IS NOT NULL
            DO UPDATE SET
                people_count = alarms.people_count + 1,
                sender_user_id = NULL,
                content = (alarms.people_count + 1)::text || $6,
                modified_at = NOW()
            RETURNING {ALARM_COLUMNS}
            "#
        ))
        .bind(upsert.receiver_id.into_inner())
        .bind(upsert.sender_id.into_inner())
        .bind(upsert.todo_id.into_inner())
        .bind(upsert.kind.as_str())
        .bind(upsert.initial_content)
        .bind(upsert.aggregate_suffix)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Alarm::try_from(model)
    }

    #[instrument(skip(self, alarm), fields(receiver_id = %alarm.receiver_id, kind = %alarm.kind))]
    async fn create(&self, alarm: &Alarm) -> RepoResult<Alarm> {
        let model = sqlx::query_as::<_, AlarmModel>(&format!(
            r#"
            INSERT INTO alarms
                (receiver_user_id, sender_user_id, people_count, related_todo_id, kind, content,
                 created_at, modified_at)
            VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW())
            RETURNING {ALARM_COLUMNS}
            "#
        ))
        .bind(alarm.receiver_id.into_inner())
        .bind(alarm.sender_id.map(UserId::into_inner))
        .bind(alarm.people_count)
        .bind(alarm.related_todo_id.map(TodoId::into_inner))
        .bind(alarm.kind.as_str())
        .bind(&alarm.content)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Alarm::try_from(model)
    }

    #[instrument(skip(self))]
    async fn find_by_receiver(
        &self,
        receiver_id: UserId,
        page: &PageRequest,
    ) -> RepoResult<Vec<Alarm>> {
        let results = sqlx::query_as::<_, AlarmModel>(&format!(
            r#"
            SELECT {ALARM_COLUMNS}
            FROM alarms
            WHERE receiver_user_id = $1
            ORDER BY modified_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#
        ))
        .bind(receiver_id.into_inner())
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Alarm::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: AlarmId, receiver_id: UserId) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM alarms WHERE id = $1 AND receiver_user_id = $2
            "#,
        )
        .bind(id.into_inner())
        .bind(receiver_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete_all_for_receiver(&self, receiver_id: UserId) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM alarms WHERE receiver_user_id = $1
            "#,
        )
        .bind(receiver_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
