//! Domain entities - core business objects

mod alarm;
mod follow;
mod reaction;
mod todo;
mod user;

pub use alarm::{Alarm, AlarmKind};
pub use follow::Follow;
pub use reaction::{Reaction, ReactionKind};
pub use todo::PublicTodo;
pub use user::{validate_nickname, User, STATUS_MESSAGE_MAX};
