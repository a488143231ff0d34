//! # todo-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AlarmService, FollowService, ReactionService, ServiceContext, ServiceError, ServiceResult,
    TimelineService, UserService,
};
