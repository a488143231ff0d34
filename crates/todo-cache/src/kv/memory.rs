//! In-process cache backend backed by a concurrent map.
//!
//! Used in tests and as a single-node fallback when Redis is not deployed.

use async_trait::async_trait;
use dashmap::DashMap;
use std::hash::Hash;

use super::cache_aside::{CacheResult, KeyValueCache};

/// In-memory key-value cache
#[derive(Debug, Default)]
pub struct MemoryCache<K, V>
where
    K: Eq + Hash,
{
    entries: DashMap<K, V>,
}

impl<K, V> MemoryCache<K, V>
where
    K: Eq + Hash,
{
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl<K, V> KeyValueCache<K, V> for MemoryCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Clone + Send + Sync,
{
    async fn fetch(&self, key: &K) -> CacheResult<Option<V>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn store(&self, key: &K, value: &V) -> CacheResult<()> {
        self.entries.insert(key.clone(), value.clone());
        Ok(())
    }

    async fn invalidate(&self, key: &K) -> CacheResult<bool> {
        Ok(self.entries.remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_core::UserId;

    #[tokio::test]
    async fn test_store_fetch_invalidate() {
        let cache: MemoryCache<UserId, Vec<UserId>> = MemoryCache::new();
        let owner = UserId::new(1);

        assert_eq!(cache.fetch(&owner).await.unwrap(), None);

        cache
            .store(&owner, &vec![UserId::new(2), UserId::new(3)])
            .await
            .unwrap();
        assert_eq!(
            cache.fetch(&owner).await.unwrap(),
            Some(vec![UserId::new(2), UserId::new(3)])
        );

        assert!(cache.invalidate(&owner).await.unwrap());
        assert!(!cache.invalidate(&owner).await.unwrap());
        assert_eq!(cache.fetch(&owner).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_empty_set_is_distinct_from_miss() {
        let cache: MemoryCache<UserId, Vec<UserId>> = MemoryCache::new();
        let owner = UserId::new(9);

        cache.store(&owner, &Vec::new()).await.unwrap();
        // hit with an empty value, not a miss
        assert_eq!(cache.fetch(&owner).await.unwrap(), Some(Vec::new()));
    }
}
