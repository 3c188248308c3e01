use alloy::primitives::{Address, Bytes, B256};
use serde::{Deserialize, Serialize};

/// A log emitted by a single simulated transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulatedLog {
    pub addr: Address,
    pub topics: Vec<B256>,
    pub data: Bytes,
}

/// The per-transaction outcome reported back to session clients.
///
/// `egp` is the gas the transaction actually consumed, the proxy for its
/// effective gas payment at this layer. `error` is empty iff `success`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateTransactionResult {
    pub egp: u64,
    #[serde(default)]
    pub logs: Vec<SimulatedLog>,
    pub success: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error: String,
}

impl SimulateTransactionResult {
    pub fn failure(error: impl ToString) -> Self {
        Self { success: false, error: error.to_string(), ..Default::default() }
    }
}

/// The per-bundle outcome: the aggregate gas use plus every member
/// transaction's individual result, in submission order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateBundleResult {
    pub egp: u64,
    #[serde(default)]
    pub tx_results: Vec<SimulateTransactionResult>,
    pub success: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error: String,
}

impl SimulateBundleResult {
    pub fn success(tx_results: Vec<SimulateTransactionResult>, egp: u64) -> Self {
        Self { egp, tx_results, success: true, error: String::new() }
    }

    pub fn failure(
        tx_results: Vec<SimulateTransactionResult>,
        egp: u64,
        error: impl ToString,
    ) -> Self {
        Self { egp, tx_results, success: false, error: error.to_string() }
    }
}
