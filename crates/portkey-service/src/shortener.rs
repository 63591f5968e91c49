use crate::error::ShortenError;
use async_trait::async_trait;
use portkey_core::Mapping;

/// The two operations exposed to callers such as the HTTP gateway.
///
/// Object safe so the gateway can hold an `Arc<dyn Shortener>` without
/// knowing which store and cache backends were wired in.
#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Creates a mapping for `target` and returns it with its short code.
    async fn create_mapping(&self, target: &str) -> Result<Mapping, ShortenError>;

    /// Resolves a short code to its target URL.
    async fn resolve_code(&self, code: &str) -> Result<String, ShortenError>;
}
