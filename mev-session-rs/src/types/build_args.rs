use alloy::primitives::{Address, Bytes, B256};
use ethereum_consensus::primitives::{BlsPublicKey, Slot};
use serde::{Deserialize, Serialize};

/// A withdrawal scheduled by the beacon chain for the block under
/// construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Withdrawal {
    pub index: u64,
    pub validator_index: u64,
    pub address: Address,
    /// Amount in gwei.
    pub amount: u64,
}

/// Caller-supplied hints for a new block-building session.
///
/// Every field may be left zero or empty; missing fields are filled from the
/// latest beacon context snapshot when one is available.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildBlockArgs {
    pub slot: Slot,
    pub proposer_pubkey: BlsPublicKey,
    pub parent: B256,
    pub timestamp: u64,
    pub fee_recipient: Address,
    pub gas_limit: u64,
    pub random: B256,
    pub withdrawals: Vec<Withdrawal>,
    pub extra: Bytes,
    pub fill_pending: bool,
    pub beacon_root: B256,
}

/// Arguments for a read-only call against a session's pending state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TxArgs {
    pub from: Option<Address>,
    pub to: Address,
    pub input: Bytes,
}
