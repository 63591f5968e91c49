//! The mapping service for the Portkey URL shortener.
//!
//! This crate provides [`MappingService`], the coordinator between the
//! code generator, the durable store, and the cache. It owns the two
//! non-trivial protocols of the system: bounded collision resolution on
//! the create path and cache-aside consistency on the resolve path.

pub mod error;
pub mod service;
pub mod shortener;

pub use error::ShortenError;
pub use service::MappingService;
pub use shortener::Shortener;
