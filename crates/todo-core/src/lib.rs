//! # todo-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, cache, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    validate_nickname, Alarm, AlarmKind, Follow, PublicTodo, Reaction, ReactionKind, User,
    STATUS_MESSAGE_MAX,
};
pub use error::DomainError;
pub use traits::{
    AggregateAlarmUpsert, AlarmRepository, FollowRepository, ReactionRepository, RepoResult,
    TodoRepository, UserRepository,
};
pub use value_objects::{AlarmId, PageRequest, ParseIdError, TodoId, UserId};
