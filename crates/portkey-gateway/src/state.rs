use portkey_service::Shortener;
use std::sync::Arc;

/// Shared state for the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    shortener: Arc<dyn Shortener>,
    base_url: String,
}

impl AppState {
    pub fn new(shortener: Arc<dyn Shortener>, public_base_url: impl Into<String>) -> Self {
        Self {
            shortener,
            base_url: public_base_url.into(),
        }
    }

    pub fn shortener(&self) -> &dyn Shortener {
        self.shortener.as_ref()
    }

    /// The public base under which short URLs are advertised.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
