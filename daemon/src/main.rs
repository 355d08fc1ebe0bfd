//! cinder daemon: entry point for the token API server.

mod config;

use cinder_api::ApiServer;
use cinder_provider::{BalanceProvider, MoralisProvider};
use cinder_types::Network;
use clap::Parser;
use config::DaemonConfig;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "cinder-daemon", about = "cinder token API daemon")]
struct Cli {
    /// Network to query: "mainnet" or "testnet".
    /// When a config file is provided, defaults to the file's network value.
    #[arg(long, env = "CINDER_NETWORK")]
    network: Option<String>,

    /// Port for the HTTP API.
    #[arg(long, env = "CINDER_API_PORT")]
    api_port: Option<u16>,

    /// Moralis API key for the balance provider.
    #[arg(long, env = "CINDER_MORALIS_API_KEY")]
    moralis_api_key: Option<String>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    /// A flag or env value, never read from the config file: tracing is
    /// initialized before the file is loaded so load outcomes get logged.
    #[arg(long, default_value = "info", env = "CINDER_LOG_LEVEL")]
    log_level: String,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn load_file_config(path: &PathBuf) -> Option<DaemonConfig> {
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<DaemonConfig>(&contents) {
            Ok(cfg) => {
                tracing::info!("Loaded config from {}", path.display());
                Some(cfg)
            }
            Err(e) => {
                tracing::warn!("Failed to parse config file: {e}, using CLI defaults");
                None
            }
        },
        Err(e) => {
            tracing::warn!(
                "Failed to read config file {}: {e}, using CLI defaults",
                path.display()
            );
            None
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    cinder_utils::init_tracing(&cli.log_level);

    let file_config = cli.config.as_ref().and_then(load_file_config);

    let base = file_config.unwrap_or_default();
    let config = DaemonConfig {
        network: cli
            .network
            .as_deref()
            .map(Network::parse)
            .unwrap_or(base.network),
        api_port: cli.api_port.unwrap_or(base.api_port),
        moralis_api_key: cli.moralis_api_key.or(base.moralis_api_key),
    };

    if config.moralis_api_key.is_none() {
        tracing::warn!("No Moralis API key configured; /tokens will report the provider unavailable");
    }

    tracing::info!(
        network = config.network.as_str(),
        api_port = config.api_port,
        "Starting cinder daemon"
    );

    let provider: Arc<dyn BalanceProvider> = Arc::new(MoralisProvider::new(
        config.moralis_api_key.clone(),
        config.network,
    ));

    let server = ApiServer::new(config.api_port, provider);
    server.start().await?;

    tracing::info!("cinder daemon exited cleanly");
    Ok(())
}
