//! Timeline service
//!
//! Assembles a viewer's timeline: unfinished to-dos due today, authored by
//! the people the viewer follows, each decorated with its current support
//! and nag counts.

use std::collections::HashMap;

use chrono::Utc;
use tracing::{debug, instrument};

use todo_core::{PageRequest, ReactionKind, UserId};

use crate::dto::TimelineItem;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::follow::FollowService;
use super::reaction::ReactionService;

/// Timeline service
pub struct TimelineService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TimelineService<'a> {
    /// Create a new TimelineService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Build the viewer's timeline page
    ///
    /// An empty followee set short-circuits before the to-do query; "today"
    /// is the current UTC date.
    #[instrument(skip(self))]
    pub async fn build_timeline(
        &self,
        viewer_id: UserId,
        page: &PageRequest,
    ) -> ServiceResult<Vec<TimelineItem>> {
        let followees = FollowService::new(self.ctx).followee_ids(viewer_id).await?;
        if followees.is_empty() {
            debug!(viewer_id = %viewer_id, "No followees, timeline is empty");
            return Ok(Vec::new());
        }

        let today = Utc::now().date_naive();
        let todos = self
            .ctx
            .todo_repo()
            .find_pending(today, &followees, page)
            .await?;

        let reaction_service = ReactionService::new(self.ctx);
        let mut nicknames: HashMap<UserId, String> = HashMap::new();
        let mut items = Vec::with_capacity(todos.len());

        for todo in todos {
            let author_nickname = match nicknames.get(&todo.author_id) {
                Some(nickname) => nickname.clone(),
                None => {
                    let nickname = self
                        .ctx
                        .user_repo()
                        .find_by_id(todo.author_id)
                        .await?
                        .map_or_else(|| "unknown".to_string(), |u| u.nickname);
                    nicknames.insert(todo.author_id, nickname.clone());
                    nickname
                }
            };

            let support_count = reaction_service
                .reaction_count(todo.id, ReactionKind::Support)
                .await?;
            let nag_count = reaction_service
                .reaction_count(todo.id, ReactionKind::Nag)
                .await?;

            items.push(TimelineItem {
                todo_id: todo.id,
                author_id: todo.author_id,
                author_nickname,
                content: todo.content,
                deadline: todo.deadline,
                support_count,
                nag_count,
            });
        }

        Ok(items)
    }
}
