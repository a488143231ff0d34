//! Public to-do entity <-> model mapper

use todo_core::{PublicTodo, TodoId, UserId};

use crate::models::TodoModel;

impl From<TodoModel> for PublicTodo {
    fn from(model: TodoModel) -> Self {
        PublicTodo {
            id: TodoId::new(model.id),
            author_id: UserId::new(model.author_user_id),
            content: model.content,
            deadline: model.deadline_date,
            finished: model.finished,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
