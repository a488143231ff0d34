//! Followee-set cache module.
//!
//! Caches each user's followee id list so timeline assembly avoids a
//! follow-graph query per request.

mod followee_store;

pub use followee_store::RedisFolloweeStore;
