use portkey_core::StorageError;
use thiserror::Error;

/// Errors surfaced to callers of the mapping service.
///
/// Cache failures never appear here: the service absorbs them and
/// degrades to a durable-store round trip.
#[derive(Debug, Clone, Error)]
pub enum ShortenError {
    /// Blank target or code. The caller's fault; not retried.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Every candidate code collided within the retry bound.
    #[error("no free short code after {attempts} attempts")]
    CodeExhausted { attempts: u32 },
    /// The durable store failed in a way the service does not retry.
    #[error("durable store failed: {0}")]
    PersistenceFailed(String),
    /// No mapping exists for the code. Terminal, not retried.
    #[error("no mapping for code: {0}")]
    NotFound(String),
}

impl From<StorageError> for ShortenError {
    fn from(err: StorageError) -> Self {
        Self::PersistenceFailed(err.to_string())
    }
}
