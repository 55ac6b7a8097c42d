//! CLI command definitions and handlers

use clap::Subcommand;
use std::path::PathBuf;
use tracing::info;

use crate::core::client::TranslationClient;
use crate::core::config::{ProviderConfig, ServerConfig};
use crate::core::models::TranslationRequest;

/// Commands for the translation gateway
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server (page + /api/translate)
    Serve {
        /// Bind address (default: 127.0.0.1)
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Listen port (default: 8000)
        #[arg(short, long, default_value_t = 8000)]
        port: u16,

        /// Directory with index.html and page assets
        #[arg(long, default_value = "static")]
        static_dir: PathBuf,
    },

    /// Translate a single text and print the result
    Translate {
        /// Text to translate
        #[arg(long)]
        text: String,

        /// Source language (auto-detect if not specified)
        #[arg(short, long)]
        source: Option<String>,

        /// Target language
        #[arg(short, long)]
        target: String,
    },
}

/// Handle server command
pub async fn handle_serve(
    provider: ProviderConfig,
    host: String,
    port: u16,
    static_dir: PathBuf,
) -> anyhow::Result<()> {
    use crate::server::api::run_server;

    if !static_dir.join("index.html").is_file() {
        tracing::warn!("No index.html in {}, / will answer 404", static_dir.display());
    }

    let translator = TranslationClient::new(provider)?;
    let server = ServerConfig {
        host,
        port,
        static_dir,
    };

    println!("🚀 Server starting on http://{}:{}", server.host, server.port);
    println!("📄 OpenAPI: http://{}:{}/api-docs/openapi.json", server.host, server.port);

    run_server(server, translator).await
}

/// Handle one-shot translate command
pub async fn handle_translate(
    provider: ProviderConfig,
    text: String,
    source: Option<String>,
    target: String,
) -> anyhow::Result<()> {
    let translator = TranslationClient::new(provider)?;

    let mut request = TranslationRequest::new(text, target);
    if let Some(source) = source {
        request = request.with_source(source);
    }

    info!("Translating via {}", translator.config().translate_url());
    let result = translator.handle(&request).await?;
    println!("{}", result.translated_text);

    Ok(())
}
