//! Followee-set storage in Redis.
//!
//! Each entry is the full, ordered followee id list of one owner, serialized
//! as a JSON array. Key presence carries the hit/miss signal, so an owner who
//! follows nobody is cached as an empty array and still counts as a hit.

use async_trait::async_trait;

use todo_core::UserId;

use crate::kv::{CacheResult, KeyValueCache};
use crate::pool::RedisPool;

/// Key prefix for followee sets
const FOLLOWEE_PREFIX: &str = "followees:";

/// Default TTL for a cached followee set (30 minutes)
const DEFAULT_FOLLOWEE_TTL: u64 = 30 * 60;

/// Redis-backed followee-set cache
#[derive(Clone)]
pub struct RedisFolloweeStore {
    pool: RedisPool,
    ttl_seconds: u64,
}

impl RedisFolloweeStore {
    /// Create a new followee store with the default TTL
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self {
            pool,
            ttl_seconds: DEFAULT_FOLLOWEE_TTL,
        }
    }

    /// Create with custom TTL
    #[must_use]
    pub fn with_ttl(pool: RedisPool, ttl_seconds: u64) -> Self {
        Self { pool, ttl_seconds }
    }

    /// Generate Redis key for an owner's followee set
    fn key(owner_id: UserId) -> String {
        format!("{FOLLOWEE_PREFIX}{owner_id}")
    }
}

#[async_trait]
impl KeyValueCache<UserId, Vec<UserId>> for RedisFolloweeStore {
    async fn fetch(&self, owner_id: &UserId) -> CacheResult<Option<Vec<UserId>>> {
        let key = Self::key(*owner_id);
        Ok(self.pool.get_value(&key).await?)
    }

    async fn store(&self, owner_id: &UserId, followee_ids: &Vec<UserId>) -> CacheResult<()> {
        let key = Self::key(*owner_id);
        self.pool
            .set(&key, followee_ids, Some(self.ttl_seconds))
            .await?;

        tracing::debug!(
            owner_id = %owner_id,
            followees = followee_ids.len(),
            "Cached followee set"
        );

        Ok(())
    }

    async fn invalidate(&self, owner_id: &UserId) -> CacheResult<bool> {
        let key = Self::key(*owner_id);
        let removed = self.pool.delete(&key).await?;

        if removed {
            tracing::debug!(owner_id = %owner_id, "Invalidated followee set");
        }

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_generation() {
        let owner = UserId::new(12345);
        assert_eq!(RedisFolloweeStore::key(owner), "followees:12345");
    }
}
