//! Error types for the translation proxy

use thiserror::Error;

/// Failure classes of a single proxied translation.
///
/// Every variant is terminal for the invocation that produced it; nothing is
/// retried. HTTP status mapping lives in [`crate::server::error`].
#[derive(Error, Debug)]
pub enum ProxyError {
    /// Caller input failed local validation, no request was sent
    #[error("{0}")]
    InvalidArgument(String),

    /// The provider could not be reached (refused, timeout, DNS, TLS)
    #[error("translation service error: {message}")]
    UpstreamUnavailable {
        /// Description of the underlying transport error
        message: String,
    },

    /// The provider answered with a non-success status
    #[error("translation service rejected the request with status {status}")]
    UpstreamRejected {
        /// Status code returned by the provider
        status: u16,
        /// Parsed provider body, or `{"error": <raw text>}`
        body: serde_json::Value,
    },

    /// The provider answered with success but the body is unusable
    #[error("{0}")]
    UpstreamProtocolError(String),
}

impl ProxyError {
    /// Validation failure for an empty `text` field
    pub fn empty_text() -> Self {
        ProxyError::InvalidArgument("text must not be empty".to_string())
    }

    /// Validation failure for an empty `target` field
    pub fn missing_target() -> Self {
        ProxyError::InvalidArgument("target language is required".to_string())
    }

    /// Success status with a body that is not a JSON object
    pub fn invalid_response() -> Self {
        ProxyError::UpstreamProtocolError("invalid response from translation service".to_string())
    }

    /// Success status without a usable `translatedText`
    pub fn missing_translated_text() -> Self {
        ProxyError::UpstreamProtocolError(
            "missing translatedText from translation service".to_string(),
        )
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        ProxyError::UpstreamUnavailable {
            message: err.to_string(),
        }
    }
}

/// Result type for proxy operations
pub type Result<T> = std::result::Result<T, ProxyError>;
