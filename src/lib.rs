//! Translation gateway - serves a static translator page and proxies
//! translation requests to a LibreTranslate-compatible service.
//!
//! The proxy validates each request locally, forwards it exactly once and
//! maps the provider's answer to a `{ "translatedText": ... }` result or a
//! typed [`ProxyError`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cli;
pub mod core;
pub mod server;

// Re-export key types for convenience
pub use crate::core::{
    client::TranslationClient,
    config::{ProviderConfig, ServerConfig},
    errors::ProxyError,
    models::{TranslationRequest, TranslationResult},
};

pub use server::api::{build_router, run_server, AppState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
