//! Translation proxy client: validation, single forward, response mapping

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::core::config::ProviderConfig;
use crate::core::errors::{ProxyError, Result};
use crate::core::models::{ProviderPayload, TranslationRequest, TranslationResult, UpstreamBody};

/// Forwards translation requests to the configured provider.
///
/// Holds the immutable provider config and a shared HTTP client. Each call to
/// [`TranslationClient::handle`] performs at most one outbound request and is
/// never retried.
#[derive(Debug, Clone)]
pub struct TranslationClient {
    client: reqwest::Client,
    config: Arc<ProviderConfig>,
}

impl TranslationClient {
    /// Create a new client for `config`
    pub fn new(config: ProviderConfig) -> anyhow::Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Create from environment
    pub fn from_env() -> anyhow::Result<Self> {
        Self::new(ProviderConfig::from_env()?)
    }

    /// Provider settings in use
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Validate `request`, forward it once and map the provider's answer
    pub async fn handle(&self, request: &TranslationRequest) -> Result<TranslationResult> {
        let request = request.validate()?;
        let payload = ProviderPayload::new(request, self.config.api_key.as_deref());
        let url = self.config.translate_url();

        debug!(
            "Forwarding {} chars {} -> {} to {}",
            request.text.chars().count(),
            request.source,
            request.target,
            url
        );

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&payload)
            .send()
            .await
            .map_err(|e| {
                warn!("Translation service unreachable: {}", e);
                ProxyError::from(e)
            })?;

        let status = response.status();
        let body = UpstreamBody::parse(response.text().await?);

        if !status.is_success() {
            let body = body.into_json();
            warn!("Translation service returned {}: {}", status, body);
            return Err(ProxyError::UpstreamRejected {
                status: status.as_u16(),
                body,
            });
        }

        let result = body.into_translation().map_err(|e| {
            warn!("Unusable success response from translation service: {}", e);
            e
        })?;

        info!(
            "Translated {} -> {} ({} chars)",
            request.source,
            request.target,
            result.translated_text.chars().count()
        );

        Ok(result)
    }
}
