//! An in-memory chain, execution engine, and backend good enough to drive
//! the session core in tests and in the dev-mode binary. Transactions are
//! plain value transfers with EVM-style fee accounting.

use crate::{
    builder::{Builder, BuilderArgs, BuilderConfig},
    chain::{ChainConfig, ChainContext, EthBackend, ExecutionEngine, TransactionOutcome},
    error::{ChainError, EngineError, Error},
    state::{PendingState, StateReader},
    types::{
        BlockHeader, Bundle, BuildBlockArgs, Receipt, SealedBlock, SimulatedLog, Transaction,
        TxArgs,
    },
};
use alloy::primitives::{keccak256, Address, B256, U256};
use async_trait::async_trait;
use ethereum_consensus::primitives::Version;
use parking_lot::Mutex;
use std::{collections::HashMap, sync::Arc};

/// Transfers sent to this address fail execution; handy for exercising
/// bundle revert policies.
pub const REVERT_SINK: Address = Address::new([0xff; 20]);

/// Fee recipient of one-shot builds when the caller supplies no args:
/// `0x42` in the first byte, zero elsewhere.
pub const DEFAULT_FEE_RECIPIENT: Address = Address::new([
    0x42, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00,
]);

/// One ether, the balance every pre-funded dev account starts with.
pub const DEV_ACCOUNT_FUNDS: u128 = 1_000_000_000_000_000_000;

const TRANSFER_GAS: u64 = 21_000;

#[derive(Debug, Clone, Default)]
struct DevAccount {
    balance: U256,
    nonce: u64,
}

#[derive(Clone, Default)]
struct DevStateSnapshot {
    accounts: Arc<HashMap<Address, DevAccount>>,
}

impl StateReader for DevStateSnapshot {
    fn balance(&self, address: &Address) -> U256 {
        self.accounts.get(address).map(|account| account.balance).unwrap_or_default()
    }

    fn nonce(&self, address: &Address) -> u64 {
        self.accounts.get(address).map(|account| account.nonce).unwrap_or_default()
    }

    fn storage(&self, _address: &Address, _slot: U256) -> U256 {
        U256::ZERO
    }
}

/// A single-block in-memory chain rooted at a genesis header.
pub struct DevChain {
    config: ChainConfig,
    genesis: BlockHeader,
    genesis_hash: B256,
    state: DevStateSnapshot,
}

impl DevChain {
    pub fn new() -> Self {
        Self::with_funded_accounts(&[])
    }

    /// A chain whose genesis state funds each given account with
    /// [`DEV_ACCOUNT_FUNDS`].
    pub fn with_funded_accounts(accounts: &[Address]) -> Self {
        let genesis = BlockHeader {
            number: 0,
            gas_limit: 30_000_000,
            gas_used: 15_000_000,
            timestamp: 1_700_000_000,
            base_fee: U256::from(crate::chain::INITIAL_BASE_FEE),
            ..Default::default()
        };
        let genesis_hash = keccak256(b"dev genesis");
        let funded = accounts
            .iter()
            .map(|address| {
                (*address, DevAccount { balance: U256::from(DEV_ACCOUNT_FUNDS), nonce: 0 })
            })
            .collect();
        Self {
            config: ChainConfig::default(),
            genesis,
            genesis_hash,
            state: DevStateSnapshot { accounts: Arc::new(funded) },
        }
    }

    pub fn genesis_header(&self) -> BlockHeader {
        self.genesis.clone()
    }
}

impl Default for DevChain {
    fn default() -> Self {
        Self::new()
    }
}

impl ChainContext for DevChain {
    fn chain_config(&self) -> &ChainConfig {
        &self.config
    }

    fn current_header(&self) -> BlockHeader {
        self.genesis.clone()
    }

    fn head_hash(&self) -> B256 {
        self.genesis_hash
    }

    fn header_by_hash(&self, hash: &B256) -> Option<BlockHeader> {
        (*hash == self.genesis_hash).then(|| self.genesis.clone())
    }

    fn state_at(&self, parent_hash: &B256) -> Result<Arc<dyn StateReader>, ChainError> {
        if *parent_hash != self.genesis_hash {
            return Err(ChainError::ParentUnknown(*parent_hash))
        }
        Ok(Arc::new(self.state.clone()))
    }

    fn finalize_and_assemble(
        &self,
        header: &BlockHeader,
        _state: &PendingState,
        transactions: &[Transaction],
        receipts: &[Receipt],
    ) -> Result<SealedBlock, ChainError> {
        let mut header = header.clone();
        let mut receipts_data = Vec::with_capacity(receipts.len() * 32);
        for receipt in receipts {
            receipts_data.extend_from_slice(receipt.tx_hash.as_slice());
        }
        header.receipts_root = keccak256(&receipts_data);
        header.state_root = keccak256(header.receipts_root);

        let mut preimage = Vec::new();
        preimage.extend_from_slice(header.parent_hash.as_slice());
        preimage.extend_from_slice(&header.number.to_be_bytes());
        preimage.extend_from_slice(&header.gas_used.to_be_bytes());
        preimage.extend_from_slice(header.receipts_root.as_slice());
        let hash = keccak256(&preimage);

        Ok(SealedBlock {
            header,
            hash,
            transactions: transactions.to_vec(),
            withdrawals: Vec::new(),
        })
    }
}

/// Executes plain value transfers and keeps a toy mempool for
/// `fill_pending`.
#[derive(Default)]
pub struct DevEngine {
    mempool: Mutex<Vec<Transaction>>,
}

impl DevEngine {
    pub fn add_pending_transaction(&self, tx: Transaction) {
        self.mempool.lock().push(tx);
    }
}

impl ExecutionEngine for DevEngine {
    fn execute_transaction(
        &self,
        state: &mut PendingState,
        _header: &BlockHeader,
        coinbase: &Address,
        gas_available: u64,
        tx: &Transaction,
    ) -> Result<TransactionOutcome, EngineError> {
        let sender = tx.recover_signer().map_err(|err| EngineError::Custom(err.to_string()))?;

        let state_nonce = state.nonce(&sender);
        if tx.nonce() < state_nonce {
            return Err(EngineError::NonceTooLow { address: sender, state: state_nonce, tx: tx.nonce() })
        }
        if tx.nonce() > state_nonce {
            return Err(EngineError::NonceTooHigh { address: sender, state: state_nonce, tx: tx.nonce() })
        }
        if tx.gas_limit() < TRANSFER_GAS {
            return Err(EngineError::IntrinsicGas { have: tx.gas_limit(), need: TRANSFER_GAS })
        }
        if gas_available < TRANSFER_GAS {
            return Err(EngineError::GasPoolExceeded { have: gas_available, want: TRANSFER_GAS })
        }

        let recipient = tx.to().ok_or_else(|| {
            EngineError::Custom("contract creation is not supported".to_string())
        })?;
        if recipient == REVERT_SINK {
            return Err(EngineError::Reverted)
        }

        let gas_used = TRANSFER_GAS;
        let fee = U256::from(gas_used) * U256::from(tx.gas_price());
        let cost = fee + tx.value();
        if state.balance(&sender) < cost {
            return Err(EngineError::InsufficientFunds)
        }

        state.debit(sender, cost)?;
        state.credit(recipient, tx.value());
        state.credit(*coinbase, fee);
        state.bump_nonce(sender);

        // surface calldata as a log so simulations have something to show
        let logs = if tx.input().is_empty() {
            Vec::new()
        } else {
            vec![SimulatedLog {
                addr: recipient,
                topics: vec![tx.hash()],
                data: tx.input().clone(),
            }]
        };

        Ok(TransactionOutcome {
            gas_used,
            logs,
            coinbase_payment: fee,
            sidecars: Vec::new(),
        })
    }

    fn pending_transactions(&self) -> Vec<Transaction> {
        let mut pending = self.mempool.lock().clone();
        pending.sort_by(|a, b| b.gas_price().cmp(&a.gas_price()));
        pending
    }

    fn call(&self, _state: &PendingState, args: &TxArgs) -> Result<Vec<u8>, EngineError> {
        // dev semantics: echo the calldata
        Ok(args.input.to_vec())
    }
}

/// One-shot block building over the dev chain, the backend the RPC adapter
/// serves next to the session surface.
pub struct DevBackend {
    chain: Arc<DevChain>,
    engine: Arc<DevEngine>,
    gas_ceil: u64,
    genesis_fork_version: Version,
}

impl DevBackend {
    pub fn new(
        chain: Arc<DevChain>,
        engine: Arc<DevEngine>,
        gas_ceil: u64,
        genesis_fork_version: Version,
    ) -> Self {
        Self { chain, engine, gas_ceil, genesis_fork_version }
    }

    fn default_args(&self) -> BuildBlockArgs {
        let head = self.chain.current_header();
        BuildBlockArgs {
            parent: self.chain.head_hash(),
            timestamp: head.timestamp + 12,
            fee_recipient: DEFAULT_FEE_RECIPIENT,
            gas_limit: 30_000_000,
            random: head.state_root,
            ..Default::default()
        }
    }

    fn new_builder(&self, args: Option<BuildBlockArgs>) -> Result<Builder, Error> {
        let args = args.unwrap_or_else(|| self.default_args());
        let config = BuilderConfig {
            chain: self.chain.clone(),
            engine: self.engine.clone(),
            gas_ceil: self.gas_ceil,
            genesis_fork_version: self.genesis_fork_version.clone(),
        };
        let parent_hash =
            if args.parent == B256::ZERO { self.chain.head_hash() } else { args.parent };
        Builder::new(
            &config,
            BuilderArgs {
                parent_hash,
                fee_recipient: args.fee_recipient,
                proposer_pubkey: args.proposer_pubkey,
                extra: args.extra,
                slot: args.slot,
                timestamp: args.timestamp,
                gas_limit: args.gas_limit,
                random: args.random,
                withdrawals: args.withdrawals,
                parent_beacon_block_root: None,
            },
        )
    }
}

#[async_trait]
impl EthBackend for DevBackend {
    async fn build_eth_block(
        &self,
        args: Option<BuildBlockArgs>,
        txs: Vec<Transaction>,
    ) -> Result<(SealedBlock, U256), Error> {
        let fill_pending = args.as_ref().map(|args| args.fill_pending).unwrap_or_default();
        let mut builder = self.new_builder(args)?;
        for tx in &txs {
            let result = builder.add_transaction(tx);
            if !result.success {
                return Err(Error::Custom(result.error))
            }
        }
        if fill_pending {
            builder.fill_pending()?;
        }
        let block = builder.build_block()?.clone();
        let fees = builder
            .environment()
            .receipts()
            .iter()
            .fold(U256::ZERO, |total, receipt| total.saturating_add(receipt.fee));
        Ok((block, fees))
    }

    async fn build_eth_block_from_bundles(
        &self,
        args: Option<BuildBlockArgs>,
        bundles: Vec<Bundle>,
    ) -> Result<(SealedBlock, U256), Error> {
        let mut builder = self.new_builder(args)?;
        let results = builder.add_bundles(&bundles);
        if let Some(failed) = results.iter().find(|result| !result.success) {
            return Err(Error::Custom(failed.error.clone()))
        }
        let block = builder.build_block()?.clone();
        let fees = builder
            .environment()
            .receipts()
            .iter()
            .fold(U256::ZERO, |total, receipt| total.saturating_add(receipt.fee));
        Ok((block, fees))
    }

    async fn call(&self, _contract: Address, input: Vec<u8>) -> Result<Vec<u8>, Error> {
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_default_fee_recipient_sets_only_the_first_byte() {
        let chain = Arc::new(DevChain::new());
        let engine = Arc::new(DevEngine::default());
        let backend = DevBackend::new(chain.clone(), engine, 30_000_000, Version::default());

        let args = backend.default_args();
        let mut expected = [0u8; 20];
        expected[0] = 0x42;
        assert_eq!(args.fee_recipient, Address::from(expected));
        assert_eq!(args.fee_recipient, DEFAULT_FEE_RECIPIENT);

        assert_eq!(args.parent, chain.head_hash());
        assert_eq!(args.timestamp, chain.genesis_header().timestamp + 12);
        assert_eq!(args.gas_limit, 30_000_000);
    }
}
