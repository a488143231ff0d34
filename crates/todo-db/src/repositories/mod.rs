//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in todo-core.
//! Each repository handles database operations for a specific domain entity.

mod alarm;
mod error;
mod follow;
mod reaction;
mod todo;
mod user;

pub use alarm::PgAlarmRepository;
pub use follow::PgFollowRepository;
pub use reaction::PgReactionRepository;
pub use todo::PgTodoRepository;
pub use user::PgUserRepository;
