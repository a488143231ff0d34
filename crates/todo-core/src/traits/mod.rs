//! Repository traits (ports)

mod repositories;

pub use repositories::{
    AggregateAlarmUpsert, AlarmRepository, FollowRepository, ReactionRepository, RepoResult,
    TodoRepository, UserRepository,
};
