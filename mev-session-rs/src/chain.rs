use crate::{
    error::{ChainError, EngineError},
    state::{PendingState, StateReader},
    types::{
        BlobSidecar, BlockHeader, Bundle, Receipt, SealedBlock, SimulatedLog, Transaction, TxArgs,
    },
};
use alloy::primitives::{Address, B256, U256};
use async_trait::async_trait;
use std::{cmp::Ordering, sync::Arc};

/// Base fee of the first post-London block, in wei.
pub const INITIAL_BASE_FEE: u64 = 1_000_000_000;

const GAS_BOUND_DIVISOR: u64 = 1024;

/// The execution-layer parameters the session core needs from the chain.
#[derive(Debug, Clone)]
pub struct ChainConfig {
    pub chain_id: u64,
    /// Block number at which the dynamic base fee activates; `None` means
    /// never.
    pub london_block: Option<u64>,
    pub elasticity_multiplier: u64,
    pub base_fee_change_denominator: u64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            chain_id: 1,
            london_block: Some(0),
            elasticity_multiplier: 2,
            base_fee_change_denominator: 8,
        }
    }
}

impl ChainConfig {
    pub fn is_london(&self, block_number: u64) -> bool {
        self.london_block.map(|activation| activation <= block_number).unwrap_or(false)
    }
}

/// Computes the base fee of the block following `parent`.
///
/// Arithmetic stays on 256-bit integers end to end; the intermediate
/// `base_fee * gas_delta` product does not fit 64 bits on mainnet-sized
/// blocks.
pub fn calc_base_fee(config: &ChainConfig, parent: &BlockHeader) -> U256 {
    if !config.is_london(parent.number) {
        return U256::from(INITIAL_BASE_FEE)
    }

    let gas_target = parent.gas_limit / config.elasticity_multiplier;
    match parent.gas_used.cmp(&gas_target) {
        Ordering::Equal => parent.base_fee,
        Ordering::Greater => {
            let gas_used_delta = U256::from(parent.gas_used - gas_target);
            let delta = parent.base_fee * gas_used_delta /
                U256::from(gas_target) /
                U256::from(config.base_fee_change_denominator);
            parent.base_fee + delta.max(U256::from(1))
        }
        Ordering::Less => {
            let gas_used_delta = U256::from(gas_target - parent.gas_used);
            let delta = parent.base_fee * gas_used_delta /
                U256::from(gas_target) /
                U256::from(config.base_fee_change_denominator);
            parent.base_fee.saturating_sub(delta)
        }
    }
}

/// Moves the parent gas limit toward the preferred limit, bounded by the
/// per-block adjustment the protocol allows.
pub fn compute_preferred_gas_limit(preferred_gas_limit: u64, parent_gas_limit: u64) -> u64 {
    match preferred_gas_limit.cmp(&parent_gas_limit) {
        Ordering::Equal => preferred_gas_limit,
        Ordering::Greater => {
            let bound = parent_gas_limit + parent_gas_limit / GAS_BOUND_DIVISOR;
            preferred_gas_limit.min(bound - 1)
        }
        Ordering::Less => {
            let bound = parent_gas_limit - parent_gas_limit / GAS_BOUND_DIVISOR;
            preferred_gas_limit.max(bound + 1)
        }
    }
}

/// The chain collaborator: parent headers, parent state, and the consensus
/// engine that seals finished blocks.
pub trait ChainContext: Send + Sync {
    fn chain_config(&self) -> &ChainConfig;

    fn current_header(&self) -> BlockHeader;

    /// Hash of the chain head, the default parent for sessions that do not
    /// name one.
    fn head_hash(&self) -> B256;

    fn header_by_hash(&self, hash: &B256) -> Option<BlockHeader>;

    /// The committed state at the given block.
    fn state_at(&self, parent_hash: &B256) -> Result<Arc<dyn StateReader>, ChainError>;

    /// Finalizes the draft and assembles a sealed block.
    fn finalize_and_assemble(
        &self,
        header: &BlockHeader,
        state: &PendingState,
        transactions: &[Transaction],
        receipts: &[Receipt],
    ) -> Result<SealedBlock, ChainError>;
}

/// The outcome of applying one transaction to the pending state.
#[derive(Debug, Clone, Default)]
pub struct TransactionOutcome {
    pub gas_used: u64,
    pub logs: Vec<SimulatedLog>,
    /// What the transaction paid to the effective coinbase.
    pub coinbase_payment: U256,
    pub sidecars: Vec<BlobSidecar>,
}

/// The execution engine collaborator, opaque to the session core.
///
/// `execute_transaction` must be transactional at the granularity of one
/// transaction: on `Err`, no mutation of `state` may be observable, and the
/// engine must refuse transactions whose gas demand exceeds `gas_available`.
pub trait ExecutionEngine: Send + Sync {
    fn execute_transaction(
        &self,
        state: &mut PendingState,
        header: &BlockHeader,
        coinbase: &Address,
        gas_available: u64,
        tx: &Transaction,
    ) -> Result<TransactionOutcome, EngineError>;

    /// Transactions the engine considers pending for inclusion, in the
    /// engine's own priority order.
    fn pending_transactions(&self) -> Vec<Transaction>;

    /// A read-only call against the given state view.
    fn call(&self, state: &PendingState, args: &TxArgs) -> Result<Vec<u8>, EngineError>;
}

/// The one-shot block building surface exposed next to the session API.
#[async_trait]
pub trait EthBackend: Send + Sync {
    async fn build_eth_block(
        &self,
        args: Option<crate::types::BuildBlockArgs>,
        txs: Vec<Transaction>,
    ) -> Result<(SealedBlock, U256), crate::error::Error>;

    async fn build_eth_block_from_bundles(
        &self,
        args: Option<crate::types::BuildBlockArgs>,
        bundles: Vec<Bundle>,
    ) -> Result<(SealedBlock, U256), crate::error::Error>;

    async fn call(&self, contract: Address, input: Vec<u8>) -> Result<Vec<u8>, crate::error::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parent(gas_limit: u64, gas_used: u64, base_fee: u64) -> BlockHeader {
        BlockHeader {
            number: 100,
            gas_limit,
            gas_used,
            base_fee: U256::from(base_fee),
            ..Default::default()
        }
    }

    #[test]
    fn pre_london_returns_the_initial_base_fee() {
        let config = ChainConfig { london_block: Some(200), ..Default::default() };
        let base_fee = calc_base_fee(&config, &parent(30_000_000, 30_000_000, 7));
        assert_eq!(base_fee, U256::from(INITIAL_BASE_FEE));
    }

    #[test]
    fn base_fee_holds_at_the_gas_target() {
        let config = ChainConfig::default();
        let base_fee = calc_base_fee(&config, &parent(30_000_000, 15_000_000, 1_000_000_000));
        assert_eq!(base_fee, U256::from(1_000_000_000u64));
    }

    #[test]
    fn base_fee_rises_when_the_parent_was_full() {
        let config = ChainConfig::default();
        let base_fee = calc_base_fee(&config, &parent(30_000_000, 30_000_000, 1_000_000_000));
        // delta = 1e9 * 15e6 / 15e6 / 8
        assert_eq!(base_fee, U256::from(1_125_000_000u64));
    }

    #[test]
    fn base_fee_rise_is_at_least_one_wei() {
        let config = ChainConfig::default();
        let base_fee = calc_base_fee(&config, &parent(30_000_000, 15_000_001, 1));
        assert_eq!(base_fee, U256::from(2u64));
    }

    #[test]
    fn base_fee_falls_when_the_parent_was_light() {
        let config = ChainConfig::default();
        let base_fee = calc_base_fee(&config, &parent(30_000_000, 7_500_000, 1_000_000_000));
        // delta = 1e9 * 7.5e6 / 15e6 / 8
        assert_eq!(base_fee, U256::from(937_500_000u64));
    }

    #[test]
    fn base_fee_decrease_rounds_toward_zero() {
        let config = ChainConfig::default();
        let base_fee = calc_base_fee(&config, &parent(30_000_000, 0, 1));
        assert_eq!(base_fee, U256::from(1u64));
    }
}
