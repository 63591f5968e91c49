//! HTTP gateway for the Portkey URL shortener.
//!
//! A thin axum surface over [`portkey_service::Shortener`]: one route to
//! create a mapping, one to redirect, one health probe. All shortening
//! semantics live in the service; this crate only translates between
//! HTTP and the service's error taxonomy.

pub mod app;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use state::AppState;
