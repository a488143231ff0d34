//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod alarm;
pub mod context;
pub mod error;
pub mod follow;
pub mod reaction;
pub mod timeline;
pub mod user;

// Re-export all services for convenience
pub use alarm::AlarmService;
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use follow::FollowService;
pub use reaction::ReactionService;
pub use timeline::TimelineService;
pub use user::UserService;
