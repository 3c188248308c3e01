use crate::{
    api,
    beacon::{BeaconContextCache, BeaconContextProvider, BoostRelayClient, PayloadAttributesSseStream},
    chain::{ChainContext, EthBackend, ExecutionEngine},
    config::Config,
    error::Error,
    session::SessionManager,
};
use std::sync::Arc;
use tokio::task::JoinHandle;
use url::Url;

/// Wires the session manager, the beacon context cache, and the RPC server
/// into one running service.
pub struct Service {
    config: Config,
    chain: Arc<dyn ChainContext>,
    engine: Arc<dyn ExecutionEngine>,
    backend: Arc<dyn EthBackend>,
}

impl Service {
    pub fn new(
        config: Config,
        chain: Arc<dyn ChainContext>,
        engine: Arc<dyn ExecutionEngine>,
        backend: Arc<dyn EthBackend>,
    ) -> Self {
        Self { config, chain, engine, backend }
    }

    pub async fn spawn(self) -> eyre::Result<ServiceHandle> {
        let beacon = match (&self.config.beacon_rpc_url, &self.config.relay_url) {
            (Some(beacon_rpc), Some(relay)) => {
                let beacon_url = Url::parse(beacon_rpc)?;
                let relay_url = Url::parse(relay)?;
                let feed = PayloadAttributesSseStream::connect(&beacon_url).await?;
                Some(Arc::new(BeaconContextCache::spawn(feed, BoostRelayClient::new(relay_url))))
            }
            _ => {
                tracing::warn!("no beacon endpoints configured; sessions must pass explicit args");
                None
            }
        };

        let manager = SessionManager::new(
            self.chain.clone(),
            self.engine.clone(),
            beacon.clone().map(|cache| cache as Arc<dyn BeaconContextProvider>),
            &self.config,
        );

        let server = api::Server::new(
            self.config.host,
            self.config.port,
            manager.clone(),
            self.backend.clone(),
        )
        .spawn();

        Ok(ServiceHandle { manager, beacon, server })
    }
}

pub struct ServiceHandle {
    pub manager: SessionManager,
    beacon: Option<Arc<BeaconContextCache>>,
    server: JoinHandle<Result<(), Error>>,
}

impl ServiceHandle {
    /// Runs until the server exits on its own.
    pub async fn wait(self) -> eyre::Result<()> {
        match self.server.await {
            Ok(result) => result.map_err(|err| eyre::eyre!(err.to_string())),
            Err(err) => Err(eyre::eyre!(err.to_string())),
        }
    }

    /// Stops the beacon refresh loop and tears the server down.
    pub async fn shutdown(self) {
        if let Some(beacon) = &self.beacon {
            beacon.stop().await;
        }
        self.server.abort();
        tracing::info!("service stopped");
    }
}
