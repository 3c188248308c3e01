use clap::Parser;
use mev_session_rs::{
    dev::{DevBackend, DevChain, DevEngine},
    Config, Service,
};
use std::sync::Arc;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[clap(author, version, about = "block building sessions over an RPC surface", long_about = None)]
struct Cli {
    #[clap(long, value_name = "FILE", env = "MEV_SESSION_CONFIG")]
    config: Option<String>,
    #[clap(long)]
    port: Option<u16>,
}

fn setup_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    setup_logging();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => Config::from_toml_file(path)?,
        None => Config::default(),
    };
    if let Some(port) = cli.port {
        config.port = port;
    }

    // Dev-mode collaborators; a production deployment embeds the session
    // manager next to a real chain and execution engine.
    let chain = Arc::new(DevChain::new());
    let engine = Arc::new(DevEngine::default());
    let backend = Arc::new(DevBackend::new(
        chain.clone(),
        engine.clone(),
        config.gas_ceil,
        config.genesis_fork_version.clone(),
    ));

    let handle = Service::new(config, chain, engine, backend).spawn().await?;

    signal::ctrl_c().await?;
    tracing::info!("shutting down...");
    handle.shutdown().await;
    Ok(())
}
