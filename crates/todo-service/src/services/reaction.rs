//! Reaction service
//!
//! Handles supports and nags on public to-dos. The durable reaction records
//! are the source of truth; the counter cache is derived from them. Alarm
//! delivery rides on a spawned task so a notification failure never rolls
//! back or fails the reaction itself.

use tracing::{info, instrument, warn};

use todo_core::{DomainError, PageRequest, Reaction, ReactionKind, TodoId, UserId};

use crate::dto::UserResponse;

use super::alarm::AlarmService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Press a reaction on a to-do
    ///
    /// A reactor presses each kind at most once per item. The duplicate
    /// check here is advisory; the database primary key closes the race
    /// between concurrent presses, so either path yields
    /// `ReactionAlreadyExists`.
    #[instrument(skip(self))]
    pub async fn add_reaction(
        &self,
        reactor_id: UserId,
        todo_id: TodoId,
        kind: ReactionKind,
    ) -> ServiceResult<()> {
        self.ctx
            .todo_repo()
            .find_by_id(todo_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Todo", todo_id.to_string()))?;

        if self
            .ctx
            .reaction_repo()
            .find(reactor_id, todo_id, kind)
            .await?
            .is_some()
        {
            return Err(DomainError::ReactionAlreadyExists.into());
        }

        let reaction = Reaction::new(reactor_id, todo_id, kind);
        self.ctx.reaction_repo().create(&reaction).await?;

        if let Err(e) = self.ctx.counter_cache().increment(todo_id, kind).await {
            warn!(error = %e, todo_id = %todo_id, "Counter increment failed after reaction write");
        }

        info!(reactor_id = %reactor_id, todo_id = %todo_id, kind = %kind, "Reaction added");

        // Alarm delivery is detached from the caller's result.
        let ctx = self.ctx.clone();
        tokio::spawn(async move {
            if let Err(e) = AlarmService::new(&ctx)
                .send_reaction_alarm(reactor_id, todo_id, kind)
                .await
            {
                warn!(error = %e, todo_id = %todo_id, "Reaction alarm delivery failed");
            }
        });

        Ok(())
    }

    /// Take back a previously pressed reaction
    ///
    /// The aggregate alarm is left untouched; its people-count reflects
    /// events, not the current reaction set.
    #[instrument(skip(self))]
    pub async fn undo_reaction(
        &self,
        reactor_id: UserId,
        todo_id: TodoId,
        kind: ReactionKind,
    ) -> ServiceResult<()> {
        let removed = self
            .ctx
            .reaction_repo()
            .delete(reactor_id, todo_id, kind)
            .await?;
        if !removed {
            return Err(DomainError::ReactionNotFound.into());
        }

        if let Err(e) = self.ctx.counter_cache().decrement(todo_id, kind).await {
            warn!(error = %e, todo_id = %todo_id, "Counter decrement failed after reaction removal");
        }

        info!(reactor_id = %reactor_id, todo_id = %todo_id, kind = %kind, "Reaction removed");

        Ok(())
    }

    /// Current reaction count for an item and kind
    ///
    /// Served from the counter cache; when the cache is unreachable the
    /// durable records answer instead.
    #[instrument(skip(self))]
    pub async fn reaction_count(&self, todo_id: TodoId, kind: ReactionKind) -> ServiceResult<i64> {
        match self.ctx.counter_cache().get(todo_id, kind).await {
            Ok(count) => Ok(count),
            Err(e) => {
                warn!(error = %e, todo_id = %todo_id, "Counter read failed, counting from store");
                Ok(self.ctx.reaction_repo().count(todo_id, kind).await?)
            }
        }
    }

    /// Page of users who pressed the given kind on a to-do
    #[instrument(skip(self))]
    pub async fn reaction_senders(
        &self,
        todo_id: TodoId,
        kind: ReactionKind,
        page: &PageRequest,
    ) -> ServiceResult<Vec<UserResponse>> {
        self.ctx
            .todo_repo()
            .find_by_id(todo_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Todo", todo_id.to_string()))?;

        let reactor_ids = self
            .ctx
            .reaction_repo()
            .find_reactor_ids(todo_id, kind, page)
            .await?;

        let mut senders = Vec::with_capacity(reactor_ids.len());
        for reactor_id in reactor_ids {
            if let Some(user) = self.ctx.user_repo().find_by_id(reactor_id).await? {
                senders.push(UserResponse::from(user));
            }
        }

        Ok(senders)
    }
}
