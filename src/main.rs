//! Main entry point for the translation gateway

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use translate_gateway::cli::commands::{self, Commands};
use translate_gateway::ProviderConfig;

/// Translation gateway - serves the translator page and proxies to LibreTranslate
#[derive(Parser, Debug)]
#[command(name = "translate-gateway", version, about, long_about = None)]
struct Args {
    /// Provider config file (TOML/JSON/YAML), overridden by LIBRETRANSLATE_* env vars
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Provider base URL (defaults to LIBRETRANSLATE_URL)
    #[arg(long, global = true)]
    url: Option<String>,

    /// Provider API key (defaults to LIBRETRANSLATE_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("translate_gateway={},tower_http={}", log_level, log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let provider =
        ProviderConfig::load(args.config.as_deref())?.with_overrides(args.url, args.api_key);
    provider.validate()?;

    match args.command {
        Some(Commands::Serve {
            host,
            port,
            static_dir,
        }) => {
            commands::handle_serve(provider, host, port, static_dir).await?;
        }
        Some(Commands::Translate {
            text,
            source,
            target,
        }) => {
            commands::handle_translate(provider, text, source, target).await?;
        }
        None => {
            println!("Please specify a command. Use --help for more information.");
        }
    }

    Ok(())
}
