//! Cache-aside building blocks.
//!
//! A generic key-value cache contract with pluggable backends, plus the
//! `load_or_compute` helper that implements the miss → fetch-from-source →
//! populate pattern used by the feed subsystem.

mod cache_aside;
mod memory;

pub use cache_aside::{load_or_compute, CacheError, CacheResult, KeyValueCache};
pub use memory::MemoryCache;
