//! Value objects - immutable types that represent domain concepts

mod ids;
mod page;

pub use ids::{AlarmId, ParseIdError, TodoId, UserId};
pub use page::PageRequest;
