use crate::{
    chain::EthBackend,
    error::Error,
    session::SessionManager,
    types::{BuildBlockArgs, Bundle, Transaction, TxArgs},
};
use alloy::primitives::{Address, Bytes};
use axum::{extract::State, routing::post, Json, Router};
use ethereum_consensus::primitives::BlsPublicKey;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};
use std::{
    net::{Ipv4Addr, SocketAddr},
    sync::Arc,
};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    #[serde(default)]
    id: Value,
    method: String,
    #[serde(default)]
    params: Value,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct JsonRpcError {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Serialize)]
struct JsonRpcResponse {
    jsonrpc: &'static str,
    id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    fn success(id: Value, result: Value) -> Self {
        Self { jsonrpc: "2.0", id, result: Some(result), error: None }
    }

    fn failure(id: Value, code: i64, message: String) -> Self {
        Self { jsonrpc: "2.0", id, result: None, error: Some(JsonRpcError { code, message }) }
    }
}

fn error_code(err: &Error) -> i64 {
    let offset = match err {
        Error::SessionNotFound(..) => 1,
        Error::Canceled => 2,
        Error::BlockNotBuilt => 3,
        Error::BlockValueOverflow(..) => 4,
        Error::Bundle(..) => 5,
        Error::Engine(..) => 6,
        Error::Chain(..) => 7,
        _ => 0,
    };
    -32000 - offset
}

#[derive(Clone)]
struct ApiState {
    manager: SessionManager,
    backend: Arc<dyn EthBackend>,
}

struct Params(Vec<Value>);

impl Params {
    fn new(params: Value) -> Result<Self, String> {
        match params {
            Value::Null => Ok(Self(Vec::new())),
            Value::Array(values) => Ok(Self(values)),
            other => Err(format!("expected parameter array, got {other}")),
        }
    }

    fn get<T: DeserializeOwned>(&self, index: usize) -> Result<T, String> {
        let value = self.0.get(index).cloned().unwrap_or(Value::Null);
        serde_json::from_value(value)
            .map_err(|err| format!("invalid parameter {index}: {err}"))
    }
}

async fn dispatch(state: &ApiState, method: &str, params: Params) -> Result<Value, Error> {
    match method {
        "suavex_newSession" => {
            let args: Option<BuildBlockArgs> = params.get(0).map_err(Error::Custom)?;
            // RPC callers cancel by dropping the request; the token is for
            // embedders driving the manager directly
            let id = state.manager.new_session(args, &CancellationToken::new()).await?;
            Ok(json!(id))
        }
        "suavex_addTransaction" => {
            let session_id: String = params.get(0).map_err(Error::Custom)?;
            let tx: Transaction = params.get(1).map_err(Error::Custom)?;
            let result = state.manager.add_transaction(&session_id, &tx).await?;
            Ok(json!(result))
        }
        "suavex_addTransactions" => {
            let session_id: String = params.get(0).map_err(Error::Custom)?;
            let txs: Vec<Transaction> = params.get(1).map_err(Error::Custom)?;
            let results = state.manager.add_transactions(&session_id, &txs).await?;
            Ok(json!(results))
        }
        "suavex_addBundles" => {
            let session_id: String = params.get(0).map_err(Error::Custom)?;
            let bundles: Vec<Bundle> = params.get(1).map_err(Error::Custom)?;
            let results = state.manager.add_bundles(&session_id, &bundles).await?;
            Ok(json!(results))
        }
        "suavex_buildBlock" => {
            let session_id: String = params.get(0).map_err(Error::Custom)?;
            state.manager.build_block(&session_id).await?;
            Ok(json!("ok"))
        }
        "suavex_bid" => {
            let session_id: String = params.get(0).map_err(Error::Custom)?;
            let public_key: BlsPublicKey = params.get(1).map_err(Error::Custom)?;
            let submission = state.manager.bid(&session_id, &public_key).await?;
            Ok(json!(submission))
        }
        "suavex_getBalance" => {
            let session_id: String = params.get(0).map_err(Error::Custom)?;
            let address: Address = params.get(1).map_err(Error::Custom)?;
            let balance = state.manager.get_balance(&session_id, address).await?;
            Ok(json!(balance))
        }
        "suavex_call" => {
            let session_id: String = params.get(0).map_err(Error::Custom)?;
            let args: TxArgs = params.get(1).map_err(Error::Custom)?;
            let output = state.manager.call(&session_id, &args).await?;
            Ok(json!(Bytes::from(output)))
        }
        "suavex_buildEthBlock" => {
            let args: Option<BuildBlockArgs> = params.get(0).map_err(Error::Custom)?;
            let txs: Vec<Transaction> = params.get(1).map_err(Error::Custom)?;
            let (block, profit) = state.backend.build_eth_block(args, txs).await?;
            Ok(json!({ "block": block, "profit": profit }))
        }
        "suavex_buildEthBlockFromBundles" => {
            let args: Option<BuildBlockArgs> = params.get(0).map_err(Error::Custom)?;
            let bundles: Vec<Bundle> = params.get(1).map_err(Error::Custom)?;
            let (block, profit) = state.backend.build_eth_block_from_bundles(args, bundles).await?;
            Ok(json!({ "block": block, "profit": profit }))
        }
        other => Err(Error::Custom(format!("the method {other} does not exist"))),
    }
}

async fn serve_rpc(
    State(state): State<ApiState>,
    Json(request): Json<JsonRpcRequest>,
) -> Json<JsonRpcResponse> {
    tracing::trace!(method = %request.method, "serving rpc request");
    let id = request.id.clone();
    let params = match Params::new(request.params) {
        Ok(params) => params,
        Err(message) => return Json(JsonRpcResponse::failure(id, -32602, message)),
    };
    match dispatch(&state, &request.method, params).await {
        Ok(result) => Json(JsonRpcResponse::success(id, result)),
        Err(err) => Json(JsonRpcResponse::failure(id, error_code(&err), err.to_string())),
    }
}

/// The JSON-RPC surface over one session manager and one backend.
pub struct Server {
    host: Ipv4Addr,
    port: u16,
    manager: SessionManager,
    backend: Arc<dyn EthBackend>,
}

impl Server {
    pub fn new(
        host: Ipv4Addr,
        port: u16,
        manager: SessionManager,
        backend: Arc<dyn EthBackend>,
    ) -> Self {
        Self { host, port, manager, backend }
    }

    /// Spawns the server on a new task, returning the handle for it.
    pub fn spawn(&self) -> JoinHandle<Result<(), Error>> {
        let router = Router::new().route("/", post(serve_rpc)).with_state(ApiState {
            manager: self.manager.clone(),
            backend: self.backend.clone(),
        });
        let addr = SocketAddr::from((self.host, self.port));
        let server = axum::Server::bind(&addr).serve(router.into_make_service());
        let address = server.local_addr();
        tokio::spawn(async move {
            tracing::info!("listening at {address}...");
            let result = server.await;
            if let Err(ref err) = result {
                tracing::error!(%err, "error while listening for incoming")
            }
            result.map_err(|err| Error::Custom(err.to_string()))
        })
    }
}
