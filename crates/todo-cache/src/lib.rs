//! # todo-cache
//!
//! Caching layer for the feed-construction subsystem.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Cache-aside**: Generic `KeyValueCache` trait and `load_or_compute`
//!   helper with pluggable backends (Redis, in-process map)
//! - **Followee Sets**: Cached follow-graph lookups with a first-class
//!   hit/miss signal (an empty set is still a hit)
//! - **Reaction Counters**: Atomic per-item support/nag counters, clamped at
//!   zero on decrement
//!
//! Everything here is derived state: a lost or evicted entry only costs a trip
//! back to the durable store.

pub mod counter;
pub mod followee;
pub mod kv;
pub mod pool;

// Re-export pool types
pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};

// Re-export cache-aside types
pub use kv::{load_or_compute, CacheError, CacheResult, KeyValueCache, MemoryCache};

// Re-export followee types
pub use followee::RedisFolloweeStore;

// Re-export counter types
pub use counter::{MemoryCounterCache, ReactionCounterCache, RedisCounterStore};
