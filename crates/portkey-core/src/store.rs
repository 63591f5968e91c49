use crate::code::ShortCode;
use crate::error::StorageError;
use crate::mapping::MappingRecord;
use async_trait::async_trait;

/// The durable store capability. The single source of truth for mappings.
///
/// Implementations must enforce uniqueness of the short code: a `put` for
/// a code that already exists fails with [`StorageError::Conflict`]. That
/// constraint is the only serialization point against concurrent creators
/// racing on the same candidate code.
#[async_trait]
pub trait MappingStore: Send + Sync + 'static {
    /// Persists a new record under `code`.
    /// Fails with [`StorageError::Conflict`] if the code is already taken.
    async fn put(&self, code: &ShortCode, record: MappingRecord) -> Result<(), StorageError>;

    /// Retrieves the record for a short code.
    /// Returns `None` if the code does not exist.
    async fn get(&self, code: &ShortCode) -> Result<Option<MappingRecord>, StorageError>;

    /// Checks whether a short code is already taken.
    async fn exists(&self, code: &ShortCode) -> Result<bool, StorageError>;
}
