//! Data transfer objects for requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for inputs
//! - Response DTOs for serializing outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::UpdateStatusMessageRequest;
pub use responses::{AlarmResponse, TimelineItem, UserResponse};
