//! Database models - SQLx-compatible structs for PostgreSQL tables

mod alarm;
mod reaction;
mod todo;
mod user;

pub use alarm::AlarmModel;
pub use reaction::ReactionModel;
pub use todo::TodoModel;
pub use user::UserModel;
