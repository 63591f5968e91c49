use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use portkey_core::{MappingRecord, MappingStore, ShortCode, StorageError};

/// In-memory implementation of [`MappingStore`] backed by a DashMap.
///
/// DashMap's sharded locks let concurrent reads and writes to different
/// buckets proceed without blocking each other. Uniqueness is enforced
/// with the entry API, so a racing second insert of the same code loses
/// with [`StorageError::Conflict`] exactly like a unique index would.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    mappings: DashMap<String, MappingRecord>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            mappings: DashMap::new(),
        }
    }

    /// Number of stored mappings.
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

#[async_trait]
impl MappingStore for InMemoryStore {
    async fn put(&self, code: &ShortCode, record: MappingRecord) -> Result<(), StorageError> {
        match self.mappings.entry(code.as_str().to_owned()) {
            Entry::Occupied(_) => Err(StorageError::Conflict(code.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    async fn get(&self, code: &ShortCode) -> Result<Option<MappingRecord>, StorageError> {
        Ok(self
            .mappings
            .get(code.as_str())
            .map(|entry| entry.value().clone()))
    }

    async fn exists(&self, code: &ShortCode) -> Result<bool, StorageError> {
        Ok(self.mappings.contains_key(code.as_str()))
    }
}
