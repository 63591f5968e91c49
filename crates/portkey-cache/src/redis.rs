use async_trait::async_trait;
use portkey_core::{CacheError, MappingCache, MappingRecord, ShortCode};
use redis::AsyncCommands;
use std::time::Duration;
use tracing::{debug, trace, warn};

/// A Redis-based implementation of [`MappingCache`].
///
/// Records are stored as JSON strings under a configurable key prefix.
/// Entries expire server-side via `SET ... EX`; expiry never touches the
/// durable store.
#[derive(Debug, Clone)]
pub struct RedisMappingCache {
    conn: redis::aio::MultiplexedConnection,
    key_prefix: String,
}

fn map_redis_error(operation: &str, err: redis::RedisError) -> CacheError {
    let message = format!("{operation}: {err}");
    if err.is_timeout() {
        CacheError::Timeout(message)
    } else if err.is_connection_refusal() || err.is_connection_dropped() {
        CacheError::Unavailable(message)
    } else {
        CacheError::Operation(message)
    }
}

impl RedisMappingCache {
    /// Creates a Redis cache with the default `pk:url:` key prefix.
    pub fn new(conn: redis::aio::MultiplexedConnection) -> Self {
        Self {
            conn,
            key_prefix: "pk:url:".to_string(),
        }
    }

    /// Creates a Redis cache with a custom key prefix.
    pub fn with_prefix(
        conn: redis::aio::MultiplexedConnection,
        key_prefix: impl Into<String>,
    ) -> Self {
        Self {
            conn,
            key_prefix: key_prefix.into(),
        }
    }

    fn cache_key(&self, code: &ShortCode) -> String {
        format!("{}{}", self.key_prefix, code.as_str())
    }
}

#[async_trait]
impl MappingCache for RedisMappingCache {
    async fn get(&self, code: &ShortCode) -> Result<Option<MappingRecord>, CacheError> {
        let key = self.cache_key(code);
        trace!(code = %code, "fetching mapping from Redis");

        let mut conn = self.conn.clone();
        match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(cached)) => match serde_json::from_str::<MappingRecord>(&cached) {
                Ok(record) => {
                    debug!(code = %code, "cache hit in Redis");
                    Ok(Some(record))
                }
                Err(e) => {
                    warn!(code = %code, error = %e, "failed to deserialize cached mapping");
                    Err(CacheError::InvalidData(format!(
                        "invalid cached value for key '{key}': {e}"
                    )))
                }
            },
            Ok(None) => {
                trace!(code = %code, "cache miss in Redis");
                Ok(None)
            }
            Err(e) => Err(map_redis_error("failed to fetch value from Redis", e)),
        }
    }

    async fn set(
        &self,
        code: &ShortCode,
        record: &MappingRecord,
        ttl: Option<Duration>,
    ) -> Result<(), CacheError> {
        let key = self.cache_key(code);
        trace!(code = %code, "storing mapping in Redis");

        let json = serde_json::to_string(record).map_err(|e| {
            CacheError::Serialization(format!("failed to serialize cache value: {e}"))
        })?;

        let mut conn = self.conn.clone();
        let result = match ttl {
            Some(ttl) => {
                conn.set_ex::<_, _, ()>(&key, json, ttl.as_secs())
                    .await
            }
            None => conn.set::<_, _, ()>(&key, json).await,
        };

        match result {
            Ok(()) => {
                debug!(code = %code, "cached mapping in Redis");
                Ok(())
            }
            Err(e) => Err(map_redis_error("failed to write value to Redis", e)),
        }
    }
}
