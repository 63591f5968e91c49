use crate::code::ShortCode;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// The stored value for a short code in the durable store and the cache.
///
/// Records are append-only: once persisted, neither the target nor the
/// creation timestamp ever changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingRecord {
    /// The original long URL, stored verbatim (no normalization).
    pub target: String,
    /// When the record was persisted.
    pub created_at: Timestamp,
}

impl MappingRecord {
    /// Creates a record for `target` stamped with the current time.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            created_at: Timestamp::now(),
        }
    }
}

/// A complete mapping as returned to callers of the create path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mapping {
    /// The generated short code.
    pub code: ShortCode,
    /// The original long URL.
    pub target: String,
    /// When the mapping was persisted.
    pub created_at: Timestamp,
}

impl Mapping {
    /// Combines a code with its stored record.
    pub fn from_record(code: ShortCode, record: MappingRecord) -> Self {
        Self {
            code,
            target: record.target,
            created_at: record.created_at,
        }
    }
}
