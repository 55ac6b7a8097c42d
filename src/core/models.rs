//! Core data models for the translation proxy

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::core::errors::{ProxyError, Result};

/// Source language sentinel meaning "let the provider detect it"
pub const AUTO_SOURCE: &str = "auto";

/// Translation request as sent by a caller
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TranslationRequest {
    /// Text to translate
    #[schema(example = "Hello")]
    pub text: String,
    /// Source language code, `auto` when omitted
    #[serde(default)]
    #[schema(example = "en")]
    pub source: Option<String>,
    /// Target language code
    #[schema(example = "es")]
    pub target: String,
}

impl TranslationRequest {
    /// Build a request with auto-detected source language
    pub fn new(text: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: None,
            target: target.into(),
        }
    }

    /// Set the source language
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Trim every field and apply the `auto` default.
    ///
    /// Fails before any I/O when `text` or `target` is blank.
    pub fn validate(&self) -> Result<ValidatedRequest<'_>> {
        let text = trim_input(&self.text);
        if text.is_empty() {
            return Err(ProxyError::empty_text());
        }

        let source = self
            .source
            .as_deref()
            .map(trim_input)
            .filter(|s| !s.is_empty())
            .unwrap_or(AUTO_SOURCE);

        let target = trim_input(&self.target);
        if target.is_empty() {
            return Err(ProxyError::missing_target());
        }

        Ok(ValidatedRequest {
            text,
            source,
            target,
        })
    }
}

/// Strip whitespace plus the ASCII separators U+001C..=U+001F, which
/// `char::is_whitespace` does not cover.
fn trim_input(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
}

/// A request whose fields are trimmed and known to be non-empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedRequest<'a> {
    /// Text to translate
    pub text: &'a str,
    /// Source language code or `auto`
    pub source: &'a str,
    /// Target language code
    pub target: &'a str,
}

/// Successful translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TranslationResult {
    /// Translated text returned by the provider
    #[serde(rename = "translatedText")]
    #[schema(example = "Hola")]
    pub translated_text: String,
}

/// Form body posted to the provider's `/translate` endpoint
#[derive(Debug, Serialize)]
pub struct ProviderPayload<'a> {
    /// Text to translate
    pub q: &'a str,
    /// Source language code or `auto`
    pub source: &'a str,
    /// Target language code
    pub target: &'a str,
    /// Always `text`
    pub format: &'static str,
    /// Only serialized when a key is configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<&'a str>,
}

impl<'a> ProviderPayload<'a> {
    /// Build the payload; `api_key` is only attached when non-empty
    pub fn new(request: ValidatedRequest<'a>, api_key: Option<&'a str>) -> Self {
        Self {
            q: request.text,
            source: request.source,
            target: request.target,
            format: "text",
            api_key: api_key.filter(|key| !key.is_empty()),
        }
    }
}

/// Body of a provider response, parsed when possible
#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamBody {
    /// Well-formed JSON
    Parsed(Value),
    /// Anything else, kept verbatim
    Raw(String),
}

impl UpstreamBody {
    /// Attempt a JSON parse, keeping the raw text on failure
    pub fn parse(raw: String) -> Self {
        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => UpstreamBody::Parsed(value),
            Err(_) => UpstreamBody::Raw(raw),
        }
    }

    /// JSON view of the body; raw text is wrapped as `{"error": <raw>}`
    pub fn into_json(self) -> Value {
        match self {
            UpstreamBody::Parsed(value) => value,
            UpstreamBody::Raw(raw) => serde_json::json!({ "error": raw }),
        }
    }

    /// Extract `translatedText` from a success body.
    ///
    /// An empty string counts as missing.
    pub fn into_translation(self) -> Result<TranslationResult> {
        let value = match self {
            UpstreamBody::Parsed(Value::Object(map)) => map,
            _ => return Err(ProxyError::invalid_response()),
        };

        match value.get("translatedText").and_then(Value::as_str) {
            Some(text) if !text.is_empty() => Ok(TranslationResult {
                translated_text: text.to_string(),
            }),
            _ => Err(ProxyError::missing_translated_text()),
        }
    }
}
