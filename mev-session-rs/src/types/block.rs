use crate::types::{SimulatedLog, Transaction, Withdrawal};
use alloy::primitives::{Address, Bloom, Bytes, B256, U256, U512};
use serde::{Deserialize, Serialize};

/// An execution-layer block header.
///
/// While a session is open this is the mutable draft at the heart of the
/// execution environment; `gas_used` and the roots are filled in as
/// transactions commit and the block is sealed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockHeader {
    pub parent_hash: B256,
    /// The account credited with block fees; the fee recipient.
    pub coinbase: Address,
    pub state_root: B256,
    pub receipts_root: B256,
    pub logs_bloom: Bloom,
    pub number: u64,
    pub gas_limit: u64,
    pub gas_used: u64,
    pub timestamp: u64,
    pub extra_data: Bytes,
    pub base_fee: U256,
    pub prev_randao: B256,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_beacon_block_root: Option<B256>,
}

/// A receipt for a transaction committed into an execution environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub tx_hash: B256,
    /// Position of the transaction within the block, also its log context.
    pub index: usize,
    pub success: bool,
    pub gas_used: u64,
    pub cumulative_gas_used: u64,
    pub logs: Vec<SimulatedLog>,
    /// The payment this transaction made to the effective coinbase.
    pub fee: U256,
}

/// A blob sidecar produced while executing a blob-carrying transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlobSidecar {
    pub blob: Bytes,
    pub commitment: Bytes,
    pub proof: Bytes,
}

/// A finalized block as returned by the consensus engine collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SealedBlock {
    pub header: BlockHeader,
    pub hash: B256,
    pub transactions: Vec<Transaction>,
    pub withdrawals: Vec<Withdrawal>,
}

/// A sealed block together with the fee total it earned.
///
/// The fee accumulator is deliberately wider than a word: whether the total
/// fits a 256-bit value is only decided when a bid is assembled.
#[derive(Debug, Clone)]
pub struct BlockEnvelope {
    pub block: SealedBlock,
    pub fees: U512,
    pub sidecars: Vec<BlobSidecar>,
}
