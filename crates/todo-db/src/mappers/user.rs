//! User entity <-> model mapper

use todo_core::{User, UserId};

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::new(model.id),
            nickname: model.nickname,
            status_message: model.status_message,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
