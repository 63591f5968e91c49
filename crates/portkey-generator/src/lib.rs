//! Short code generation for the Portkey URL shortener.
//!
//! Generation is a pure function of its input: no I/O, no shared state.
//! Uniqueness is *not* guaranteed here. Truncating a hash trades the
//! coordination cost of a shared sequence for a collision probability
//! that grows with corpus size, so the mapping service's bounded retry
//! against the durable store is mandatory, not optional hardening.

pub mod hash;

pub use hash::HashGenerator;

use portkey_core::ShortCode;

/// Trait for deriving short codes from input strings.
///
/// Implementations must be deterministic: the same input always yields
/// the same code. Collisions between distinct inputs are resolved by the
/// caller, not here.
pub trait CodeGenerator: Send + Sync + 'static {
    /// Derives a fixed-length short code from `input`.
    fn generate(&self, input: &str) -> ShortCode;
}
