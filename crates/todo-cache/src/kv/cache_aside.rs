//! Generic cache contract and the cache-aside helper.

use async_trait::async_trait;
use std::future::Future;

use crate::pool::RedisPoolError;

/// Error type for cache operations
///
/// Callers treat any of these as "cache unavailable": the durable path is
/// taken instead and the failure never surfaces past a warn log.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error(transparent)]
    Pool(#[from] RedisPoolError),

    #[error("Redis command error: {0}")]
    Command(#[from] redis::RedisError),
}

/// Result type for cache operations
pub type CacheResult<T> = Result<T, CacheError>;

/// Key-value cache with a first-class hit/miss signal.
///
/// `fetch` returning `Ok(None)` means miss; a stored empty collection is a
/// legitimate hit, which is why hit/miss is never inferred from emptiness.
#[async_trait]
pub trait KeyValueCache<K, V>: Send + Sync
where
    K: Send + Sync,
    V: Send + Sync,
{
    /// Look up a cached value. `Ok(None)` is a miss.
    async fn fetch(&self, key: &K) -> CacheResult<Option<V>>;

    /// Store a value under the key (an empty value is cacheable).
    async fn store(&self, key: &K, value: &V) -> CacheResult<()>;

    /// Drop the entry; returns whether anything was removed.
    async fn invalidate(&self, key: &K) -> CacheResult<bool>;
}

/// Cache-aside read: try the cache, fall back to `compute` on miss, then
/// populate the cache with the computed value.
///
/// Cache failures on either side are logged and degrade to a forced miss;
/// only `compute` errors propagate.
pub async fn load_or_compute<K, V, E, F, Fut>(
    cache: &dyn KeyValueCache<K, V>,
    key: &K,
    compute: F,
) -> Result<V, E>
where
    K: Send + Sync,
    V: Clone + Send + Sync,
    F: FnOnce() -> Fut + Send,
    Fut: Future<Output = Result<V, E>> + Send,
{
    match cache.fetch(key).await {
        Ok(Some(value)) => return Ok(value),
        Ok(None) => {}
        Err(e) => {
            tracing::warn!(error = %e, "cache fetch failed, falling back to source");
        }
    }

    let value = compute().await?;

    if let Err(e) = cache.store(key, &value).await {
        tracing::warn!(error = %e, "cache store failed after miss");
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryCache;

    #[tokio::test]
    async fn test_hit_skips_compute() {
        let cache: MemoryCache<i64, Vec<i64>> = MemoryCache::new();
        cache.store(&1, &vec![10, 20]).await.unwrap();

        let result: Result<Vec<i64>, ()> =
            load_or_compute(&cache, &1, || async { panic!("must not compute on hit") }).await;
        assert_eq!(result.unwrap(), vec![10, 20]);
    }

    #[tokio::test]
    async fn test_miss_computes_and_populates() {
        let cache: MemoryCache<i64, Vec<i64>> = MemoryCache::new();

        let result: Result<Vec<i64>, ()> =
            load_or_compute(&cache, &7, || async { Ok(vec![1, 2, 3]) }).await;
        assert_eq!(result.unwrap(), vec![1, 2, 3]);

        // populated: second read is a hit
        assert_eq!(cache.fetch(&7).await.unwrap(), Some(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn test_empty_value_is_a_hit() {
        let cache: MemoryCache<i64, Vec<i64>> = MemoryCache::new();
        cache.store(&5, &Vec::new()).await.unwrap();

        assert_eq!(cache.fetch(&5).await.unwrap(), Some(Vec::new()));

        let result: Result<Vec<i64>, ()> =
            load_or_compute(&cache, &5, || async { panic!("empty set must be a hit") }).await;
        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_compute_error_propagates() {
        let cache: MemoryCache<i64, Vec<i64>> = MemoryCache::new();

        let result: Result<Vec<i64>, &str> =
            load_or_compute(&cache, &9, || async { Err("store down") }).await;
        assert_eq!(result.unwrap_err(), "store down");
        assert_eq!(cache.fetch(&9).await.unwrap(), None);
    }
}
