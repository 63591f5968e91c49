use crate::error::ShortenError;
use crate::shortener::Shortener;
use async_trait::async_trait;
use portkey_core::{
    CacheError, Mapping, MappingCache, MappingRecord, MappingStore, ShortCode, StorageError,
};
use portkey_generator::CodeGenerator;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, trace, warn};

/// How many candidate codes the create path tries before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default TTL for cache entries written by the service.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Default budget for a single cache call. Deliberately short: the cache
/// is an optimization, not a dependency, so a slow cache must not stall
/// an operation the durable store could serve.
pub const DEFAULT_CACHE_TIMEOUT: Duration = Duration::from_millis(500);

/// Default budget for a single durable-store call.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Coordinator between the code generator, the durable store, and the cache.
///
/// The store is the single source of truth; the cache is a best-effort
/// accelerator whose failures are absorbed here. The service holds no
/// mutable state of its own, so a single instance is safe to share across
/// concurrent call sites. The pre-check-then-put sequence on the create
/// path is inherently racy; the store's uniqueness constraint is the
/// arbiter, and its `Conflict` rejection is consumed as "retry with the
/// next candidate".
#[derive(Debug, Clone)]
pub struct MappingService<S, C, G> {
    store: Arc<S>,
    cache: Arc<C>,
    generator: Arc<G>,
    max_attempts: u32,
    cache_ttl: Duration,
    cache_timeout: Duration,
    store_timeout: Duration,
}

impl<S, C, G> MappingService<S, C, G>
where
    S: MappingStore,
    C: MappingCache,
    G: CodeGenerator,
{
    /// Creates a service with the default retry bound and cache TTL.
    pub fn new(store: S, cache: C, generator: G) -> Self {
        Self {
            store: Arc::new(store),
            cache: Arc::new(cache),
            generator: Arc::new(generator),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            cache_ttl: DEFAULT_CACHE_TTL,
            cache_timeout: DEFAULT_CACHE_TIMEOUT,
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    /// Overrides the TTL applied to cache entries.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Overrides the collision retry bound.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Overrides the per-call budget for cache operations.
    pub fn with_cache_timeout(mut self, budget: Duration) -> Self {
        self.cache_timeout = budget;
        self
    }

    /// Overrides the per-call budget for durable-store operations.
    pub fn with_store_timeout(mut self, budget: Duration) -> Self {
        self.store_timeout = budget;
        self
    }

    /// Creates and persists a mapping for `target`.
    ///
    /// Collisions consume attempts: both a positive `exists` pre-check and
    /// a `Conflict` from `put` (a concurrent creator winning the race)
    /// move on to the next disambiguated candidate. Exhausting the bound
    /// fails with [`ShortenError::CodeExhausted`] rather than persisting a
    /// possibly colliding code.
    pub async fn create_mapping(&self, target: &str) -> Result<Mapping, ShortenError> {
        let target = target.trim();
        if target.is_empty() {
            return Err(ShortenError::InvalidInput(
                "target URL cannot be blank".to_string(),
            ));
        }

        for attempt in 0..self.max_attempts {
            let candidate = self.candidate(target, attempt);
            trace!(code = %candidate, attempt, "trying candidate code");

            if self.bounded_store(self.store.exists(&candidate)).await? {
                debug!(code = %candidate, attempt, "candidate already taken, regenerating");
                continue;
            }

            let record = MappingRecord::new(target);
            match self
                .bounded_store(self.store.put(&candidate, record.clone()))
                .await
            {
                Ok(()) => {
                    debug!(code = %candidate, "persisted mapping");
                    self.write_to_cache(&candidate, &record).await;
                    return Ok(Mapping::from_record(candidate, record));
                }
                Err(StorageError::Conflict(_)) => {
                    // Lost the race to a concurrent creator; the store's
                    // uniqueness constraint is the arbiter, not our pre-check.
                    debug!(code = %candidate, attempt, "lost insert race, regenerating");
                    continue;
                }
                Err(err) => return Err(err.into()),
            }
        }

        warn!(attempts = self.max_attempts, "collision retries exhausted");
        Err(ShortenError::CodeExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Resolves a short code to its target URL, cache first.
    ///
    /// A cache transport failure is logged and degrades the lookup to the
    /// durable store; it is never reported as a miss or as an operation
    /// failure. A durable hit after a miss repopulates the cache.
    pub async fn resolve_code(&self, code: &str) -> Result<String, ShortenError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(ShortenError::InvalidInput(
                "short code cannot be blank".to_string(),
            ));
        }

        // A code that fails validation cannot exist in the store.
        let Ok(code) = ShortCode::new(code) else {
            trace!(code, "malformed short code");
            return Err(ShortenError::NotFound(code.to_string()));
        };

        match self.bounded_cache(self.cache.get(&code)).await {
            Ok(Some(record)) => {
                debug!(code = %code, "cache hit");
                return Ok(record.target);
            }
            Ok(None) => {
                trace!(code = %code, "cache miss");
            }
            Err(err) => {
                // A transport failure, not a miss. Degrade to the store.
                warn!(code = %code, error = %err, "cache lookup failed, falling back to durable store");
            }
        }

        let Some(record) = self.bounded_store(self.store.get(&code)).await? else {
            trace!(code = %code, "no mapping in durable store");
            return Err(ShortenError::NotFound(code.to_string()));
        };

        debug!(code = %code, "resolved from durable store");
        self.write_to_cache(&code, &record).await;
        Ok(record.target)
    }

    /// Derives the candidate code for an attempt. Attempt 0 hashes the
    /// target verbatim; later attempts append the attempt index as a
    /// deterministic disambiguator.
    fn candidate(&self, target: &str, attempt: u32) -> ShortCode {
        if attempt == 0 {
            self.generator.generate(target)
        } else {
            self.generator.generate(&format!("{target}{attempt}"))
        }
    }

    /// Best-effort cache write shared by both paths. Failures are logged
    /// and swallowed; the durable store is already authoritative.
    async fn write_to_cache(&self, code: &ShortCode, record: &MappingRecord) {
        let write = self.cache.set(code, record, Some(self.cache_ttl));
        if let Err(err) = self.bounded_cache(write).await {
            warn!(code = %code, error = %err, "failed to write mapping to cache");
        }
    }

    /// Applies the cache budget to a cache call. Elapsing is reported as
    /// a [`CacheError::Timeout`], which callers absorb like any other
    /// cache failure. The budget is shorter than the store budget: a
    /// slow cache must not stall an operation the store could serve.
    async fn bounded_cache<T, F>(&self, call: F) -> Result<T, CacheError>
    where
        F: Future<Output = Result<T, CacheError>>,
    {
        match timeout(self.cache_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(CacheError::Timeout(format!(
                "cache call exceeded {:?}",
                self.cache_timeout
            ))),
        }
    }

    /// Applies the store budget to a durable-store call. Elapsing maps to
    /// [`StorageError::Timeout`] and propagates like any other storage
    /// failure.
    async fn bounded_store<T, F>(&self, call: F) -> Result<T, StorageError>
    where
        F: Future<Output = Result<T, StorageError>>,
    {
        match timeout(self.store_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(StorageError::Timeout(format!(
                "store call exceeded {:?}",
                self.store_timeout
            ))),
        }
    }
}

#[async_trait]
impl<S, C, G> Shortener for MappingService<S, C, G>
where
    S: MappingStore,
    C: MappingCache,
    G: CodeGenerator,
{
    async fn create_mapping(&self, target: &str) -> Result<Mapping, ShortenError> {
        MappingService::create_mapping(self, target).await
    }

    async fn resolve_code(&self, code: &str) -> Result<String, ShortenError> {
        MappingService::resolve_code(self, code).await
    }
}
