use alloy::primitives::{Address, B256, U512};
use ethereum_consensus::Error as ConsensusError;
use thiserror::Error;

/// Bundle admission failures. Reported per bundle; they never abort the
/// session that submitted the bundle.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BundleError {
    #[error("invalid inclusion range")]
    InvalidInclusionRange,
    #[error("invalid block number")]
    InvalidBlockNumber,
    #[error("block number exceeds max block")]
    ExceedsMaxBlock,
    #[error("empty transactions")]
    EmptyTxs,
    #[error("refund percent should be between 0 and 99 inclusive")]
    InvalidRefundPercent,
    #[error("refund is not possible with the given bundle")]
    RefundNotPossible,
}

/// Failures raised by the external execution engine when applying a single
/// transaction. The engine is transactional per transaction: when one of
/// these is returned, no state mutation is observable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("nonce too low: address {address} has nonce {state}, tx has {tx}")]
    NonceTooLow { address: Address, state: u64, tx: u64 },
    #[error("nonce too high: address {address} has nonce {state}, tx has {tx}")]
    NonceTooHigh { address: Address, state: u64, tx: u64 },
    #[error("insufficient balance for transfer")]
    InsufficientFunds,
    #[error("intrinsic gas too low: have {have}, need {need}")]
    IntrinsicGas { have: u64, need: u64 },
    #[error("gas pool exhausted: have {have}, want {want}")]
    GasPoolExceeded { have: u64, want: u64 },
    #[error("execution reverted")]
    Reverted,
    #[error("{0}")]
    Custom(String),
}

/// Failures raised by the chain context collaborator.
#[derive(Debug, Error)]
pub enum ChainError {
    #[error("parent block {0} not found")]
    ParentUnknown(B256),
    #[error("{0}")]
    Custom(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("session {0} not found")]
    SessionNotFound(String),
    #[error("session creation canceled")]
    Canceled,
    #[error("block not built")]
    BlockNotBuilt,
    #[error("block value {0} overflows")]
    BlockValueOverflow(U512),
    #[error("timestamp {proposed} is not greater than parent timestamp {parent}")]
    InvalidTimestamp { proposed: u64, parent: u64 },
    #[error("signature error: {0}")]
    Signature(String),
    #[error(transparent)]
    Bundle(#[from] BundleError),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Chain(#[from] ChainError),
    #[error(transparent)]
    Consensus(#[from] ConsensusError),
    #[error("{0}")]
    Custom(String),
}
