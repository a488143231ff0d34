//! Reaction counter storage.
//!
//! Counters are derived state: the durable reaction records can always
//! rebuild them, so a missing key simply reads as zero. What the backends
//! must guarantee is atomicity per (item, kind) key under concurrent
//! increments and decrements, and that a decrement never drives the count
//! below zero.

use async_trait::async_trait;
use dashmap::DashMap;
use redis::AsyncCommands;

use todo_core::{ReactionKind, TodoId};

use crate::kv::CacheResult;
use crate::pool::RedisPool;

/// Key prefix for reaction counters
const COUNTER_PREFIX: &str = "reaction_count:";

/// Reaction counter cache contract
///
/// `get` returns 0 for an absent key; absence is not an error and not a miss.
#[async_trait]
pub trait ReactionCounterCache: Send + Sync {
    /// Current count for an item and kind (0 when absent, never negative)
    async fn get(&self, todo_id: TodoId, kind: ReactionKind) -> CacheResult<i64>;

    /// Atomically add one; returns the new count
    async fn increment(&self, todo_id: TodoId, kind: ReactionKind) -> CacheResult<i64>;

    /// Atomically subtract one, clamping at zero; returns the new count
    async fn decrement(&self, todo_id: TodoId, kind: ReactionKind) -> CacheResult<i64>;
}

/// Lua script for a decrement that clamps at zero in one atomic step.
/// A plain DECR followed by a corrective SET would race with concurrent
/// increments.
const CLAMPED_DECR_SCRIPT: &str = r"
local value = redis.call('DECR', KEYS[1])
if value < 0 then
    redis.call('SET', KEYS[1], '0')
    return 0
end
return value
";

/// Redis-backed reaction counter store
#[derive(Clone)]
pub struct RedisCounterStore {
    pool: RedisPool,
    decrement_script: redis::Script,
}

impl RedisCounterStore {
    /// Create a new counter store
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self {
            pool,
            decrement_script: redis::Script::new(CLAMPED_DECR_SCRIPT),
        }
    }

    /// Generate Redis key for a counter
    fn key(todo_id: TodoId, kind: ReactionKind) -> String {
        format!("{COUNTER_PREFIX}{}:{}", kind.as_str(), todo_id)
    }
}

#[async_trait]
impl ReactionCounterCache for RedisCounterStore {
    async fn get(&self, todo_id: TodoId, kind: ReactionKind) -> CacheResult<i64> {
        let key = Self::key(todo_id, kind);
        let mut conn = self.pool.get().await?;
        let value: Option<i64> = conn.get(&key).await?;
        Ok(value.unwrap_or(0))
    }

    async fn increment(&self, todo_id: TodoId, kind: ReactionKind) -> CacheResult<i64> {
        let key = Self::key(todo_id, kind);
        let mut conn = self.pool.get().await?;
        let value: i64 = conn.incr(&key, 1).await?;
        Ok(value)
    }

    async fn decrement(&self, todo_id: TodoId, kind: ReactionKind) -> CacheResult<i64> {
        let key = Self::key(todo_id, kind);
        let mut conn = self.pool.get().await?;
        let value: i64 = self
            .decrement_script
            .key(&key)
            .invoke_async(&mut conn)
            .await?;
        Ok(value)
    }
}

/// In-memory reaction counter cache
///
/// Per-key atomicity comes from holding the map entry while mutating; the
/// clamp uses saturating arithmetic inside that critical section.
#[derive(Debug, Default)]
pub struct MemoryCounterCache {
    counts: DashMap<(TodoId, ReactionKind), i64>,
}

impl MemoryCounterCache {
    /// Create an empty counter cache
    pub fn new() -> Self {
        Self {
            counts: DashMap::new(),
        }
    }
}

#[async_trait]
impl ReactionCounterCache for MemoryCounterCache {
    async fn get(&self, todo_id: TodoId, kind: ReactionKind) -> CacheResult<i64> {
        Ok(self
            .counts
            .get(&(todo_id, kind))
            .map_or(0, |entry| *entry.value()))
    }

    async fn increment(&self, todo_id: TodoId, kind: ReactionKind) -> CacheResult<i64> {
        let mut entry = self.counts.entry((todo_id, kind)).or_insert(0);
        *entry += 1;
        Ok(*entry)
    }

    async fn decrement(&self, todo_id: TodoId, kind: ReactionKind) -> CacheResult<i64> {
        let mut entry = self.counts.entry((todo_id, kind)).or_insert(0);
        *entry = (*entry - 1).max(0);
        Ok(*entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_key_generation() {
        assert_eq!(
            RedisCounterStore::key(TodoId::new(42), ReactionKind::Support),
            "reaction_count:support:42"
        );
        assert_eq!(
            RedisCounterStore::key(TodoId::new(42), ReactionKind::Nag),
            "reaction_count:nag:42"
        );
    }

    #[tokio::test]
    async fn test_absent_key_reads_zero() {
        let cache = MemoryCounterCache::new();
        assert_eq!(
            cache.get(TodoId::new(1), ReactionKind::Support).await.unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn test_increment_and_decrement() {
        let cache = MemoryCounterCache::new();
        let todo = TodoId::new(1);

        assert_eq!(cache.increment(todo, ReactionKind::Support).await.unwrap(), 1);
        assert_eq!(cache.increment(todo, ReactionKind::Support).await.unwrap(), 2);
        assert_eq!(cache.decrement(todo, ReactionKind::Support).await.unwrap(), 1);
        assert_eq!(cache.get(todo, ReactionKind::Support).await.unwrap(), 1);

        // kinds are independent
        assert_eq!(cache.get(todo, ReactionKind::Nag).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_decrement_clamps_at_zero() {
        let cache = MemoryCounterCache::new();
        let todo = TodoId::new(2);

        assert_eq!(cache.decrement(todo, ReactionKind::Nag).await.unwrap(), 0);
        assert_eq!(cache.decrement(todo, ReactionKind::Nag).await.unwrap(), 0);
        assert_eq!(cache.get(todo, ReactionKind::Nag).await.unwrap(), 0);

        // and a later increment starts from zero, not a negative value
        assert_eq!(cache.increment(todo, ReactionKind::Nag).await.unwrap(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_increments_lose_no_updates() {
        let cache = Arc::new(MemoryCounterCache::new());
        let todo = TodoId::new(3);

        let mut handles = Vec::new();
        for _ in 0..100 {
            let cache = Arc::clone(&cache);
            handles.push(tokio::spawn(async move {
                cache.increment(todo, ReactionKind::Support).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(cache.get(todo, ReactionKind::Support).await.unwrap(), 100);
    }
}
