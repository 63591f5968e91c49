//! Core types and traits for the Portkey URL shortener.
//!
//! This crate provides the shared vocabulary used by the mapping service,
//! the storage backends, and the cache backends: the [`ShortCode`] and
//! [`MappingRecord`] types, the [`MappingStore`] and [`MappingCache`]
//! capability traits, and the per-layer error taxonomies.

pub mod cache;
pub mod code;
pub mod error;
pub mod mapping;
pub mod store;

pub use cache::MappingCache;
pub use code::{ShortCode, CODE_LENGTH};
pub use error::{CacheError, InvalidCode, StorageError};
pub use mapping::{Mapping, MappingRecord};
pub use store::MappingStore;
