//! Cache backends for the Portkey URL shortener.
//!
//! Both backends implement [`portkey_core::MappingCache`]. The Redis
//! backend is the production choice; the Moka backend suits single-node
//! deployments and tests.

pub mod moka;
pub mod redis;

pub use self::moka::MokaMappingCache;
pub use self::redis::RedisMappingCache;
