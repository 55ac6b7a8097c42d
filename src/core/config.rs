//! Configuration management

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Public LibreTranslate instance used when nothing is configured
pub const DEFAULT_BASE_URL: &str = "https://libretranslate.com";

/// Prefix of the environment variables read by [`ProviderConfig::load`]
pub const ENV_PREFIX: &str = "LIBRETRANSLATE";

/// Total budget for one provider exchange
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;

/// Budget for establishing the provider connection
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 10_000;

/// Translation provider settings, resolved once at startup
#[derive(Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the provider, without trailing slash
    #[serde(rename = "url")]
    pub base_url: String,
    /// Optional API key for authenticated deployments
    #[serde(default)]
    pub api_key: Option<String>,
    /// Total request timeout in milliseconds
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds
    pub connect_timeout_ms: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
        }
    }
}

// Keeps the key out of logs and panic messages.
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_ms", &self.timeout_ms)
            .field("connect_timeout_ms", &self.connect_timeout_ms)
            .finish()
    }
}

impl ProviderConfig {
    /// Build a config pointing at `base_url` with default timeouts
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
        .normalized()
    }

    /// Attach an API key; blank keys are dropped
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self.normalized()
    }

    /// Load configuration from `LIBRETRANSLATE_*` environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::load(None)
    }

    /// Load configuration from an optional file, overridden by the environment
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = Self::defaults()?;

        if let Some(path) = path {
            debug!("Reading provider config from {}", path.display());
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX));
        Self::from_builder(builder)
    }

    fn defaults() -> anyhow::Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("url", DEFAULT_BASE_URL)?
            .set_default("timeout_ms", DEFAULT_TIMEOUT_MS as i64)?
            .set_default("connect_timeout_ms", DEFAULT_CONNECT_TIMEOUT_MS as i64)?)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> anyhow::Result<Self> {
        let config: Self = builder.build()?.try_deserialize()?;
        let config = config.normalized();
        config.validate()?;
        Ok(config)
    }

    /// Apply command line overrides on top of the loaded values
    pub fn with_overrides(mut self, base_url: Option<String>, api_key: Option<String>) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        if let Some(api_key) = api_key {
            self.api_key = Some(api_key);
        }
        self.normalized()
    }

    fn normalized(mut self) -> Self {
        self.base_url = self.base_url.trim().trim_end_matches('/').to_string();
        self.api_key = self
            .api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.base_url.is_empty() {
            return Err(anyhow::anyhow!("provider URL is required"));
        }

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(anyhow::anyhow!(
                "provider URL must start with http:// or https://, got {}",
                self.base_url
            ));
        }

        if self.timeout_ms == 0 || self.connect_timeout_ms == 0 {
            return Err(anyhow::anyhow!("timeouts must be greater than 0"));
        }

        Ok(())
    }

    /// Full URL of the provider's translate endpoint
    pub fn translate_url(&self) -> String {
        format!("{}/translate", self.base_url)
    }

    /// Total request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Connection establishment timeout
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Directory holding `index.html` and the page assets
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            static_dir: PathBuf::from("static"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> anyhow::Result<ProviderConfig> {
        let builder = ProviderConfig::defaults()?.add_source(File::from_str(toml, FileFormat::Toml));
        ProviderConfig::from_builder(builder)
    }

    #[test]
    fn test_defaults() {
        let config = from_toml("").unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout(), Duration::from_secs(15));
        assert_eq!(config.connect_timeout(), Duration::from_secs(10));
        assert_eq!(config.translate_url(), "https://libretranslate.com/translate");
    }

    #[test]
    fn test_file_values_are_normalized() {
        let config = from_toml(
            r#"
            url = "http://localhost:5000/"
            api_key = "   "
            timeout_ms = 2000
            "#,
        )
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:5000");
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout_ms, 2000);
        assert_eq!(config.connect_timeout_ms, DEFAULT_CONNECT_TIMEOUT_MS);
        assert_eq!(config.translate_url(), "http://localhost:5000/translate");
    }

    #[test]
    fn test_config_validation() {
        assert!(from_toml(r#"url = "localhost:5000""#).is_err());
        assert!(from_toml(r#"url = """#).is_err());
        assert!(from_toml("timeout_ms = 0").is_err());
        assert!(ProviderConfig::new("https://translate.example.org").validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = ProviderConfig::default()
            .with_overrides(Some("http://127.0.0.1:5000//".to_string()), Some("key".to_string()));
        assert_eq!(config.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.api_key.as_deref(), Some("key"));

        let config = config.with_overrides(None, Some(String::new()));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ProviderConfig::new("http://localhost:5000").with_api_key("s3cret");
        let printed = format!("{:?}", config);
        assert!(!printed.contains("s3cret"));
        assert!(printed.contains("<redacted>"));
    }
}
