//! Reaction counter cache module.
//!
//! Per-item support/nag counts, safe under concurrent increments and
//! decrements, clamped at zero.

mod counter_store;

pub use counter_store::{MemoryCounterCache, ReactionCounterCache, RedisCounterStore};
