//! Follow service
//!
//! Maintains the follow graph and the cached followee sets derived from it.
//! Every write to the graph invalidates the sender's cached set; the next
//! timeline read repopulates it from the durable edges.

use tracing::{info, instrument, warn};

use todo_cache::load_or_compute;
use todo_core::{DomainError, Follow, UserId};

use super::alarm::AlarmService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Follow service
pub struct FollowService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FollowService<'a> {
    /// Create a new FollowService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Start following another user
    #[instrument(skip(self))]
    pub async fn follow(&self, sender_id: UserId, receiver_id: UserId) -> ServiceResult<()> {
        if sender_id == receiver_id {
            return Err(ServiceError::validation("cannot follow yourself"));
        }

        self.ctx
            .user_repo()
            .find_by_id(receiver_id)
            .await?
            .ok_or(DomainError::UserNotFound(receiver_id))?;

        self.ctx
            .follow_repo()
            .create(&Follow::new(sender_id, receiver_id))
            .await?;

        self.invalidate_followees(sender_id).await;

        info!(sender_id = %sender_id, receiver_id = %receiver_id, "Follow created");

        // Notification is detached from the caller's result.
        let ctx = self.ctx.clone();
        tokio::spawn(async move {
            if let Err(e) = AlarmService::new(&ctx)
                .send_follow_alarm(sender_id, receiver_id)
                .await
            {
                warn!(error = %e, receiver_id = %receiver_id, "Follow alarm delivery failed");
            }
        });

        Ok(())
    }

    /// Stop following another user
    #[instrument(skip(self))]
    pub async fn unfollow(&self, sender_id: UserId, receiver_id: UserId) -> ServiceResult<()> {
        let removed = self
            .ctx
            .follow_repo()
            .delete(sender_id, receiver_id)
            .await?;
        if !removed {
            return Err(DomainError::FollowNotFound.into());
        }

        self.invalidate_followees(sender_id).await;

        info!(sender_id = %sender_id, receiver_id = %receiver_id, "Follow removed");

        Ok(())
    }

    /// The set of users `sender_id` follows, served cache-aside
    ///
    /// A cached empty set is a hit: a user who follows nobody does not hit
    /// the durable store on every read.
    #[instrument(skip(self))]
    pub async fn followee_ids(&self, sender_id: UserId) -> ServiceResult<Vec<UserId>> {
        let followees = load_or_compute(self.ctx.followee_cache(), &sender_id, || async {
            self.ctx.follow_repo().find_followee_ids(sender_id).await
        })
        .await?;

        Ok(followees)
    }

    async fn invalidate_followees(&self, sender_id: UserId) {
        if let Err(e) = self.ctx.followee_cache().invalidate(&sender_id).await {
            warn!(error = %e, sender_id = %sender_id, "Followee cache invalidation failed");
        }
    }
}
