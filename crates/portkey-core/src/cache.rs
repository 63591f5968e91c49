use crate::code::ShortCode;
use crate::error::CacheError;
use crate::mapping::MappingRecord;
use async_trait::async_trait;
use std::time::Duration;

/// The cache capability: a best-effort accelerator in front of the store.
///
/// The three outcomes of a lookup stay distinguishable: `Ok(Some(_))` is a
/// hit, `Ok(None)` is a miss, and `Err(_)` is a transport failure. Callers
/// may degrade to the durable store on either of the last two, but must
/// not collapse an error into a miss.
#[async_trait]
pub trait MappingCache: Send + Sync + 'static {
    /// Looks up the record for a short code.
    ///
    /// Returns `Ok(None)` if the key is not in the cache.
    async fn get(&self, code: &ShortCode) -> Result<Option<MappingRecord>, CacheError>;

    /// Stores a record under `code`.
    ///
    /// If `ttl` is `None`, the entry falls back to the implementation's
    /// own expiration policy. Entries expire autonomously; expiry never
    /// affects the durable record.
    async fn set(
        &self,
        code: &ShortCode,
        record: &MappingRecord,
        ttl: Option<Duration>,
    ) -> Result<(), CacheError>;
}
