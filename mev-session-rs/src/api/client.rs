use crate::types::{
    BuildBlockArgs, Bundle, SimulateBundleResult, SimulateTransactionResult, SubmitBlockRequest,
    Transaction, TxArgs,
};
use alloy::primitives::{Address, Bytes, U256};
use ethereum_consensus::primitives::BlsPublicKey;
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{json, Value};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("http error: {0}")]
    Http(String),
    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<Value>,
    error: Option<RpcErrorBody>,
}

/// A typed JSON-RPC client for the session surface; the SDK counterpart of
/// [`Server`](crate::api::Server).
pub struct Client {
    http: reqwest::Client,
    endpoint: Url,
}

impl Client {
    pub fn new(endpoint: Url) -> Self {
        Self { http: reqwest::Client::new(), endpoint }
    }

    async fn request<R: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> Result<R, ClientError> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });
        let response: RpcResponse = self
            .http
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| ClientError::Http(err.to_string()))?
            .json()
            .await
            .map_err(|err| ClientError::Http(err.to_string()))?;

        if let Some(error) = response.error {
            return Err(ClientError::Rpc { code: error.code, message: error.message })
        }
        let result = response.result.unwrap_or(Value::Null);
        serde_json::from_value(result).map_err(|err| ClientError::UnexpectedResponse(err.to_string()))
    }

    pub async fn new_session(
        &self,
        args: Option<&BuildBlockArgs>,
    ) -> Result<String, ClientError> {
        self.request("suavex_newSession", json!([args])).await
    }

    pub async fn add_transaction(
        &self,
        session_id: &str,
        tx: &Transaction,
    ) -> Result<SimulateTransactionResult, ClientError> {
        self.request("suavex_addTransaction", json!([session_id, tx])).await
    }

    pub async fn add_transactions(
        &self,
        session_id: &str,
        txs: &[Transaction],
    ) -> Result<Vec<SimulateTransactionResult>, ClientError> {
        self.request("suavex_addTransactions", json!([session_id, txs])).await
    }

    pub async fn add_bundles(
        &self,
        session_id: &str,
        bundles: &[Bundle],
    ) -> Result<Vec<SimulateBundleResult>, ClientError> {
        self.request("suavex_addBundles", json!([session_id, bundles])).await
    }

    pub async fn build_block(&self, session_id: &str) -> Result<String, ClientError> {
        self.request("suavex_buildBlock", json!([session_id])).await
    }

    pub async fn bid(
        &self,
        session_id: &str,
        builder_public_key: &BlsPublicKey,
    ) -> Result<SubmitBlockRequest, ClientError> {
        self.request("suavex_bid", json!([session_id, builder_public_key])).await
    }

    pub async fn get_balance(
        &self,
        session_id: &str,
        address: Address,
    ) -> Result<U256, ClientError> {
        self.request("suavex_getBalance", json!([session_id, address])).await
    }

    pub async fn call(&self, session_id: &str, args: &TxArgs) -> Result<Bytes, ClientError> {
        self.request("suavex_call", json!([session_id, args])).await
    }
}
