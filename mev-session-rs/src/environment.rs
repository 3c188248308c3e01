use crate::{
    chain::{calc_base_fee, compute_preferred_gas_limit, ChainContext, ExecutionEngine},
    error::{ChainError, EngineError, Error},
    state::PendingState,
    types::{BlobSidecar, BlockEnvelope, BlockHeader, Receipt, Transaction, Withdrawal},
};
use alloy::primitives::{Address, Bytes, B256, U256, U512};
use std::time::{SystemTime, UNIX_EPOCH};

/// Parameters for rooting a fresh environment on a parent block.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentParams {
    pub parent_hash: B256,
    pub coinbase: Address,
    pub extra_data: Bytes,
    /// Timestamp from the payload attributes; `0` means "now".
    pub timestamp: u64,
    /// Reject rather than adjust a timestamp at or before the parent's.
    pub force_time: bool,
    /// Preferred gas limit; `0` inherits the parent's.
    pub gas_limit: u64,
    pub gas_ceil: u64,
    pub prev_randao: B256,
    pub withdrawals: Vec<Withdrawal>,
    pub parent_beacon_block_root: Option<B256>,
}

/// The mutable draft of one block in progress.
///
/// Cloning yields an independent snapshot: all-or-nothing batch operations
/// run against a clone and swap it in only when every member committed.
#[derive(Clone)]
pub struct ExecutionEnvironment {
    header: BlockHeader,
    state: PendingState,
    /// The account currently credited with fees. Usually the fee recipient;
    /// temporarily the builder's ephemeral address during refund bundles.
    coinbase: Address,
    gas_pool: u64,
    tcount: usize,
    txs: Vec<Transaction>,
    receipts: Vec<Receipt>,
    total_fees: U512,
    sidecars: Vec<BlobSidecar>,
    withdrawals: Vec<Withdrawal>,
}

impl std::fmt::Debug for ExecutionEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutionEnvironment")
            .field("header", &self.header)
            .field("coinbase", &self.coinbase)
            .field("gas_pool", &self.gas_pool)
            .field("tcount", &self.tcount)
            .finish()
    }
}

impl ExecutionEnvironment {
    /// Roots a new environment at `params.parent_hash`.
    pub fn prepare(chain: &dyn ChainContext, params: EnvironmentParams) -> Result<Self, Error> {
        let parent = chain
            .header_by_hash(&params.parent_hash)
            .ok_or(ChainError::ParentUnknown(params.parent_hash))?;

        let mut timestamp = if params.timestamp == 0 { unix_now() } else { params.timestamp };
        if parent.timestamp >= timestamp {
            if params.force_time {
                return Err(Error::InvalidTimestamp {
                    proposed: timestamp,
                    parent: parent.timestamp,
                })
            }
            timestamp = parent.timestamp + 1;
        }

        let gas_ceil = if params.gas_ceil == 0 { u64::MAX } else { params.gas_ceil };
        let preferred_gas_limit =
            if params.gas_limit == 0 { parent.gas_limit } else { params.gas_limit };
        let gas_limit =
            compute_preferred_gas_limit(preferred_gas_limit.min(gas_ceil), parent.gas_limit);

        let header = BlockHeader {
            parent_hash: params.parent_hash,
            coinbase: params.coinbase,
            number: parent.number + 1,
            gas_limit,
            gas_used: 0,
            timestamp,
            extra_data: params.extra_data,
            base_fee: calc_base_fee(chain.chain_config(), &parent),
            prev_randao: params.prev_randao,
            parent_beacon_block_root: params.parent_beacon_block_root,
            ..Default::default()
        };

        let state = PendingState::new(chain.state_at(&params.parent_hash)?);

        Ok(Self {
            coinbase: header.coinbase,
            gas_pool: header.gas_limit,
            header,
            state,
            tcount: 0,
            txs: Vec::new(),
            receipts: Vec::new(),
            total_fees: U512::ZERO,
            sidecars: Vec::new(),
            withdrawals: params.withdrawals,
        })
    }

    /// Executes `tx` against the pending state and appends it to the draft.
    ///
    /// The engine is transactional per transaction, so on error the
    /// environment is left exactly as it was.
    pub fn commit(
        &mut self,
        engine: &dyn ExecutionEngine,
        tx: &Transaction,
    ) -> Result<&Receipt, EngineError> {
        let outcome = engine.execute_transaction(
            &mut self.state,
            &self.header,
            &self.coinbase,
            self.gas_pool,
            tx,
        )?;

        self.gas_pool = self.gas_pool.checked_sub(outcome.gas_used).ok_or(
            EngineError::GasPoolExceeded { have: self.gas_pool, want: outcome.gas_used },
        )?;
        self.header.gas_used += outcome.gas_used;
        self.total_fees += U512::from(outcome.coinbase_payment);

        let receipt = Receipt {
            tx_hash: tx.hash(),
            index: self.tcount,
            success: true,
            gas_used: outcome.gas_used,
            cumulative_gas_used: self.header.gas_used,
            logs: outcome.logs,
            fee: outcome.coinbase_payment,
        };
        tracing::trace!(tx_hash = %receipt.tx_hash, index = receipt.index, gas_used = receipt.gas_used, "committed transaction");

        self.txs.push(tx.clone());
        self.receipts.push(receipt);
        self.sidecars.extend(outcome.sidecars);
        self.tcount += 1;
        Ok(self.receipts.last().expect("just appended"))
    }

    /// Seals the draft through the consensus engine.
    pub fn finalize(&self, chain: &dyn ChainContext) -> Result<BlockEnvelope, Error> {
        let mut block =
            chain.finalize_and_assemble(&self.header, &self.state, &self.txs, &self.receipts)?;
        block.withdrawals = self.withdrawals.clone();
        Ok(BlockEnvelope { block, fees: self.total_fees, sidecars: self.sidecars.clone() })
    }

    pub fn balance(&self, address: &Address) -> U256 {
        self.state.balance(address)
    }

    pub fn nonce(&self, address: &Address) -> u64 {
        self.state.nonce(address)
    }

    pub fn state(&self) -> &PendingState {
        &self.state
    }

    pub fn block_number(&self) -> u64 {
        self.header.number
    }

    pub fn base_fee(&self) -> U256 {
        self.header.base_fee
    }

    pub fn gas_remaining(&self) -> u64 {
        self.gas_pool
    }

    pub fn coinbase(&self) -> Address {
        self.coinbase
    }

    pub(crate) fn set_coinbase(&mut self, coinbase: Address) {
        self.coinbase = coinbase;
    }

    /// The fee recipient the draft header commits to, regardless of any
    /// temporary coinbase redirection.
    pub fn fee_recipient(&self) -> Address {
        self.header.coinbase
    }

    pub fn receipts(&self) -> &[Receipt] {
        &self.receipts
    }
}

fn unix_now() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).expect("past epoch").as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dev::{DevChain, DevEngine};
    use alloy::signers::local::PrivateKeySigner;

    #[test]
    fn copies_are_isolated() {
        let signer = PrivateKeySigner::random();
        let chain = DevChain::with_funded_accounts(&[signer.address()]);
        let engine = DevEngine::default();
        let mut env = ExecutionEnvironment::prepare(
            &chain,
            EnvironmentParams {
                parent_hash: chain.head_hash(),
                coinbase: Address::repeat_byte(0x42),
                gas_ceil: 30_000_000,
                ..Default::default()
            },
        )
        .unwrap();

        let tx = Transaction::transfer(
            &signer,
            chain.chain_config().chain_id,
            0,
            21_000,
            1,
            Address::repeat_byte(0x11),
            U256::from(5),
        )
        .unwrap();

        let snapshot = env.clone();
        env.commit(&engine, &tx).unwrap();

        assert_eq!(env.receipts().len(), 1);
        assert_eq!(snapshot.receipts().len(), 0);
        assert_eq!(snapshot.nonce(&signer.address()), 0);
        assert_eq!(env.nonce(&signer.address()), 1);
        assert_eq!(snapshot.gas_remaining(), env.gas_remaining() + 21_000);
    }
}
