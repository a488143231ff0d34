//! Alarm service
//!
//! Reaction alarms are aggregated: all supports (or nags) on one to-do fold
//! into a single alarm row whose people-count grows with each event. The
//! fold happens in one durable upsert, so concurrent senders cannot create
//! duplicate rows. New-follower alarms are plain rows, one per event.

use tracing::{info, instrument};

use todo_core::{
    AggregateAlarmUpsert, Alarm, AlarmId, AlarmKind, DomainError, PageRequest, ReactionKind,
    TodoId, UserId,
};

use crate::dto::AlarmResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Alarm service
pub struct AlarmService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AlarmService<'a> {
    /// Create a new AlarmService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a reaction event against the to-do's aggregate alarm
    ///
    /// Creates the aggregate row on the first event and increments its
    /// people-count on every later one, in a single atomic write.
    #[instrument(skip(self))]
    pub async fn send_reaction_alarm(
        &self,
        sender_id: UserId,
        todo_id: TodoId,
        kind: ReactionKind,
    ) -> ServiceResult<Alarm> {
        let todo = self
            .ctx
            .todo_repo()
            .find_by_id(todo_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Todo", todo_id.to_string()))?;

        let nickname = self.sender_nickname(sender_id).await;
        let (initial_content, aggregate_suffix) = match kind {
            ReactionKind::Support => (
                format!("{nickname} is cheering for your todo!"),
                " people are cheering for your todo!",
            ),
            ReactionKind::Nag => (
                format!("{nickname} is nagging you to hurry up!"),
                " people are nagging you to hurry up!",
            ),
        };

        let alarm = self
            .ctx
            .alarm_repo()
            .upsert_aggregate(&AggregateAlarmUpsert {
                todo_id,
                kind: AlarmKind::from(kind),
                receiver_id: todo.author_id,
                sender_id,
                initial_content: &initial_content,
                aggregate_suffix,
            })
            .await?;

        info!(
            alarm_id = %alarm.id,
            todo_id = %todo_id,
            people_count = alarm.people_count,
            "Reaction alarm recorded"
        );

        Ok(alarm)
    }

    /// Notify a user that someone started following them
    #[instrument(skip(self))]
    pub async fn send_follow_alarm(
        &self,
        sender_id: UserId,
        receiver_id: UserId,
    ) -> ServiceResult<Alarm> {
        let nickname = self.sender_nickname(sender_id).await;
        let alarm = self
            .ctx
            .alarm_repo()
            .create(&Alarm::new(
                receiver_id,
                sender_id,
                None,
                AlarmKind::NewFollower,
                format!("{nickname} started following you!"),
            ))
            .await?;

        info!(alarm_id = %alarm.id, receiver_id = %receiver_id, "Follow alarm created");

        Ok(alarm)
    }

    /// Page of the receiver's alarms, most recently modified first
    #[instrument(skip(self))]
    pub async fn alarms_for(
        &self,
        receiver_id: UserId,
        page: &PageRequest,
    ) -> ServiceResult<Vec<AlarmResponse>> {
        let alarms = self
            .ctx
            .alarm_repo()
            .find_by_receiver(receiver_id, page)
            .await?;

        Ok(alarms.iter().map(AlarmResponse::from).collect())
    }

    /// Dismiss one alarm; only its receiver may do so
    #[instrument(skip(self))]
    pub async fn dismiss(&self, id: AlarmId, receiver_id: UserId) -> ServiceResult<()> {
        let removed = self.ctx.alarm_repo().delete(id, receiver_id).await?;
        if !removed {
            return Err(DomainError::AlarmNotFound(id).into());
        }
        Ok(())
    }

    /// Dismiss every alarm the receiver has; returns the number removed
    #[instrument(skip(self))]
    pub async fn dismiss_all(&self, receiver_id: UserId) -> ServiceResult<u64> {
        let removed = self
            .ctx
            .alarm_repo()
            .delete_all_for_receiver(receiver_id)
            .await?;

        info!(receiver_id = %receiver_id, removed, "Dismissed all alarms");

        Ok(removed)
    }

    /// Sender nickname for alarm content; lookup failures degrade to a
    /// placeholder rather than blocking the notification
    async fn sender_nickname(&self, sender_id: UserId) -> String {
        match self.ctx.user_repo().find_by_id(sender_id).await {
            Ok(Some(user)) => user.nickname,
            _ => "someone".to_string(),
        }
    }
}
