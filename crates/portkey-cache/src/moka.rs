use async_trait::async_trait;
use moka::future::Cache;
use portkey_core::{CacheError, MappingCache, MappingRecord, ShortCode};
use std::time::Duration;
use tracing::{debug, trace};

/// An in-memory implementation of [`MappingCache`] using Moka.
///
/// Moka applies TTL at the cache level rather than per entry, so the
/// expiration configured at construction wins; the per-call `ttl` hint is
/// ignored. Suits single-node deployments and tests where a Redis
/// round trip is not worth it.
#[derive(Debug, Clone)]
pub struct MokaMappingCache {
    cache: Cache<String, MappingRecord>,
    ttl: Option<Duration>,
}

const DEFAULT_CAPACITY: u64 = 10_000;

impl MokaMappingCache {
    /// Creates a cache with the default capacity and no expiration.
    pub fn new() -> Self {
        let cache = Cache::builder().max_capacity(DEFAULT_CAPACITY).build();
        Self { cache, ttl: None }
    }

    /// Creates a cache with a custom maximum capacity.
    pub fn with_capacity(max_capacity: u64) -> Self {
        let cache = Cache::builder().max_capacity(max_capacity).build();
        Self { cache, ttl: None }
    }

    /// Creates a cache whose entries expire `ttl` after insertion.
    pub fn with_ttl(max_capacity: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(ttl)
            .build();
        Self {
            cache,
            ttl: Some(ttl),
        }
    }

    /// Drops a cached entry. Used by tests to force the durable fallback.
    pub async fn invalidate(&self, code: &ShortCode) {
        self.cache.invalidate(code.as_str()).await;
    }
}

impl Default for MokaMappingCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MappingCache for MokaMappingCache {
    async fn get(&self, code: &ShortCode) -> Result<Option<MappingRecord>, CacheError> {
        match self.cache.get(code.as_str()).await {
            Some(record) => {
                debug!(code = %code, "cache hit in Moka");
                Ok(Some(record))
            }
            None => {
                trace!(code = %code, "cache miss in Moka");
                Ok(None)
            }
        }
    }

    async fn set(
        &self,
        code: &ShortCode,
        record: &MappingRecord,
        ttl: Option<Duration>,
    ) -> Result<(), CacheError> {
        // Moka applies TTL per cache, not per entry; surface a discarded
        // hint so the divergence from the Redis backend stays visible.
        if let Some(hint) = ttl {
            if self.ttl != Some(hint) {
                debug!(
                    code = %code,
                    hint_secs = hint.as_secs(),
                    configured_secs = self.ttl.map(|t| t.as_secs()),
                    "per-call ttl hint discarded, cache-level ttl applies"
                );
            }
        }

        self.cache
            .insert(code.as_str().to_string(), record.clone())
            .await;
        debug!(code = %code, "cached mapping in Moka");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> ShortCode {
        ShortCode::new_unchecked(s)
    }

    fn record(url: &str) -> MappingRecord {
        MappingRecord::new(url)
    }

    #[tokio::test]
    async fn get_and_set() {
        let cache = MokaMappingCache::new();
        let c = code("abc123");

        assert!(cache.get(&c).await.unwrap().is_none());

        cache.set(&c, &record("https://example.com"), None).await.unwrap();

        let cached = cache.get(&c).await.unwrap().unwrap();
        assert_eq!(cached.target, "https://example.com");
    }

    #[tokio::test]
    async fn invalidate_removes_entry() {
        let cache = MokaMappingCache::new();
        let c = code("abc123");

        cache.set(&c, &record("https://example.com"), None).await.unwrap();
        cache.invalidate(&c).await;

        assert!(cache.get(&c).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn ttl_expires_entries() {
        let cache = MokaMappingCache::with_ttl(100, Duration::from_millis(50));
        let c = code("abc123");

        cache.set(&c, &record("https://example.com"), None).await.unwrap();
        assert!(cache.get(&c).await.unwrap().is_some());

        tokio::time::sleep(Duration::from_millis(80)).await;
        assert!(cache.get(&c).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn mismatched_ttl_hint_is_discarded() {
        let cache = MokaMappingCache::with_ttl(100, Duration::from_millis(50));
        let c = code("abc123");

        // The hour-long hint does not extend the entry's life; the
        // cache-level TTL still governs expiry.
        cache
            .set(&c, &record("https://example.com"), Some(Duration::from_secs(3600)))
            .await
            .unwrap();
        assert!(cache.get(&c).await.unwrap().is_some());

        tokio::time::sleep(Duration::from_millis(80)).await;
        assert!(cache.get(&c).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn set_overwrites() {
        let cache = MokaMappingCache::new();
        let c = code("abc123");

        cache.set(&c, &record("https://old.example"), None).await.unwrap();
        cache.set(&c, &record("https://new.example"), None).await.unwrap();

        let cached = cache.get(&c).await.unwrap().unwrap();
        assert_eq!(cached.target, "https://new.example");
    }
}
