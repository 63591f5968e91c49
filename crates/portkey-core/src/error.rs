use thiserror::Error;

/// A short code that failed length or alphabet validation.
#[derive(Debug, Clone, Error)]
#[error("invalid short code: {0}")]
pub struct InvalidCode(pub String);

/// Errors from the durable store.
///
/// `Conflict` is the store's uniqueness constraint firing; the service
/// treats it as a collision signal, never as a fatal error.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("short code already exists: {0}")]
    Conflict(String),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

/// Errors from the cache layer.
///
/// These never cross the service boundary; the service logs them and
/// degrades to a durable-store round trip.
#[derive(Debug, Clone, Error)]
pub enum CacheError {
    #[error("cache backend unavailable: {0}")]
    Unavailable(String),
    #[error("cache operation timed out: {0}")]
    Timeout(String),
    #[error("cache serialization failed: {0}")]
    Serialization(String),
    #[error("cache value is invalid: {0}")]
    InvalidData(String),
    #[error("cache operation failed: {0}")]
    Operation(String),
}
