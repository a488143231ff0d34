//! User service
//!
//! Profile reads, status message updates, and nickname search.

use tracing::{info, instrument};

use todo_core::{validate_nickname, DomainError, PageRequest, UserId};

use crate::dto::{UpdateStatusMessageRequest, UserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch a user's public profile
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: UserId) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::UserNotFound(id))?;

        Ok(UserResponse::from(user))
    }

    /// Replace the caller's status message
    ///
    /// The length bound lives on the entity; this path goes through it so
    /// the invariant has one owner.
    #[instrument(skip(self, request))]
    pub async fn update_status_message(
        &self,
        id: UserId,
        request: &UpdateStatusMessageRequest,
    ) -> ServiceResult<()> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::UserNotFound(id))?;
        user.set_status_message(request.status_message.clone())?;

        let updated = self
            .ctx
            .user_repo()
            .update_status_message(id, &user.status_message)
            .await?;
        if !updated {
            return Err(DomainError::UserNotFound(id).into());
        }

        info!(user_id = %id, "Status message updated");

        Ok(())
    }

    /// Page of users whose nickname contains the search term
    ///
    /// The term must itself be valid nickname material (lowercase letters
    /// and digits), which also keeps pattern metacharacters out of the query.
    #[instrument(skip(self))]
    pub async fn search_by_nickname(
        &self,
        term: &str,
        page: &PageRequest,
    ) -> ServiceResult<Vec<UserResponse>> {
        validate_nickname(term)?;

        let users = self.ctx.user_repo().search_by_nickname(term, page).await?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }
}
