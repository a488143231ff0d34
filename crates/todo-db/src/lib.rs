//! # todo-db
//!
//! Database layer implementing the repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `todo-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ model mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use todo_db::pool::{create_pool, DatabaseConfig};
//! use todo_db::PgFollowRepository;
//! use todo_core::FollowRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let follow_repo = PgFollowRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgAlarmRepository, PgFollowRepository, PgReactionRepository, PgTodoRepository,
    PgUserRepository,
};
