//! Durable store backends for the Portkey URL shortener.
//!
//! Both backends implement [`portkey_core::MappingStore`] and enforce
//! short-code uniqueness: the MySQL backend through a unique index, the
//! in-memory backend through an atomic entry check.

pub mod memory;
pub mod mysql;

pub use memory::InMemoryStore;
pub use mysql::MySqlStore;
