use crate::{
    chain::{ChainContext, ExecutionEngine},
    compat,
    environment::{EnvironmentParams, ExecutionEnvironment},
    error::{BundleError, EngineError, Error},
    signing,
    types::{
        BidTrace, BlobsBundle, BlockEnvelope, Bundle, SealedBlock, SimulateBundleResult,
        SimulateTransactionResult, SubmitBlockRequest, Transaction, TxArgs, Withdrawal,
    },
};
use alloy::{
    primitives::{Address, Bytes, B256, U256},
    signers::local::PrivateKeySigner,
};
use ethereum_consensus::primitives::{BlsPublicKey, BlsSignature, Slot, Version};
use std::{collections::HashSet, sync::Arc};

/// Gas limit and accounting basis of the plain value transfers the builder
/// issues itself: refund payouts and the final profit sweep.
pub const PAYMENT_TX_GAS_LIMIT: u64 = 28_000;

/// Collaborators and limits shared by every builder a manager creates.
#[derive(Clone)]
pub struct BuilderConfig {
    pub chain: Arc<dyn ChainContext>,
    pub engine: Arc<dyn ExecutionEngine>,
    pub gas_ceil: u64,
    pub genesis_fork_version: Version,
}

/// Per-session build target, after beacon-context defaults were merged in.
#[derive(Debug, Clone, Default)]
pub struct BuilderArgs {
    pub parent_hash: B256,
    pub fee_recipient: Address,
    pub proposer_pubkey: BlsPublicKey,
    pub extra: Bytes,
    pub slot: Slot,
    pub timestamp: u64,
    pub gas_limit: u64,
    pub random: B256,
    pub withdrawals: Vec<Withdrawal>,
    pub parent_beacon_block_root: Option<B256>,
}

/// A single session's block-building engine.
///
/// Owns the evolving execution environment, the ephemeral refund account,
/// and, once sealed, the finished block. Not safe for parallel use; the
/// session manager serializes access.
pub struct Builder {
    chain: Arc<dyn ChainContext>,
    engine: Arc<dyn ExecutionEngine>,
    genesis_fork_version: Version,
    args: BuilderArgs,
    env: ExecutionEnvironment,
    block: Option<BlockEnvelope>,
    /// Fresh per session. Its address collects refund-bundle profit so the
    /// profit can be measured in isolation; the key never leaves the builder.
    ephemeral_signer: PrivateKeySigner,
    ephemeral_address: Address,
}

impl Builder {
    pub fn new(config: &BuilderConfig, args: BuilderArgs) -> Result<Self, Error> {
        let env = ExecutionEnvironment::prepare(
            config.chain.as_ref(),
            EnvironmentParams {
                parent_hash: args.parent_hash,
                coinbase: args.fee_recipient,
                extra_data: args.extra.clone(),
                timestamp: args.timestamp,
                force_time: false,
                gas_limit: args.gas_limit,
                gas_ceil: config.gas_ceil,
                prev_randao: args.random,
                withdrawals: args.withdrawals.clone(),
                parent_beacon_block_root: args.parent_beacon_block_root,
            },
        )?;

        let ephemeral_signer = PrivateKeySigner::random();
        let ephemeral_address = ephemeral_signer.address();

        Ok(Self {
            chain: config.chain.clone(),
            engine: config.engine.clone(),
            genesis_fork_version: config.genesis_fork_version.clone(),
            args,
            env,
            block: None,
            ephemeral_signer,
            ephemeral_address,
        })
    }

    /// Commits a single transaction into the live environment, reporting the
    /// outcome without failing the session.
    pub fn add_transaction(&mut self, tx: &Transaction) -> SimulateTransactionResult {
        apply_transaction(self.engine.as_ref(), &mut self.env, tx)
    }

    /// All-or-nothing batch commit: either every transaction lands or the
    /// live environment is untouched. Results gathered so far are returned
    /// either way.
    pub fn add_transactions(&mut self, txs: &[Transaction]) -> Vec<SimulateTransactionResult> {
        let mut results = Vec::with_capacity(txs.len());
        let mut snapshot = self.env.clone();

        for tx in txs {
            let result = apply_transaction(self.engine.as_ref(), &mut snapshot, tx);
            let committed = result.success;
            results.push(result);
            if !committed {
                return results
            }
        }

        self.env = snapshot;
        results
    }

    /// All-or-nothing over whole bundles, with per-bundle results always
    /// reported.
    pub fn add_bundles(&mut self, bundles: &[Bundle]) -> Vec<SimulateBundleResult> {
        let mut results = Vec::with_capacity(bundles.len());
        let mut snapshot = self.env.clone();

        for bundle in bundles {
            let result = self.add_bundle(bundle, &mut snapshot);
            let committed = result.success;
            results.push(result);
            if !committed {
                return results
            }
        }

        self.env = snapshot;
        results
    }

    /// Commits one bundle into `env`, honoring its revert allowances and
    /// refund policy.
    fn add_bundle(&self, bundle: &Bundle, env: &mut ExecutionEnvironment) -> SimulateBundleResult {
        if let Err(err) = bundle.validate(env.block_number()) {
            return SimulateBundleResult::failure(Vec::new(), 0, err)
        }

        let reverting: HashSet<B256> = bundle.reverting_hashes.iter().copied().collect();
        let fee_recipient = env.coinbase();

        if bundle.has_refund() {
            // collect the bundle's profit on the ephemeral address so it can
            // be measured in isolation
            env.set_coinbase(self.ephemeral_address);
        }

        let mut results = Vec::with_capacity(bundle.txs.len());
        let mut egp = 0u64;
        let profit_pre = env.balance(&env.coinbase());

        for tx in &bundle.txs {
            let result = apply_transaction(self.engine.as_ref(), env, tx);
            let committed = result.success;
            let error = result.error.clone();
            egp += result.egp;
            results.push(result);
            if !committed {
                if reverting.contains(&tx.hash()) {
                    continue
                }
                env.set_coinbase(fee_recipient);
                return SimulateBundleResult::failure(results, egp, error)
            }
        }

        let profit_post = env.balance(&env.coinbase());
        env.set_coinbase(fee_recipient);

        if bundle.has_refund() {
            let refund_tx = match self.refund_transaction(bundle, env, profit_pre, profit_post) {
                Ok(tx) => tx,
                Err(err) => return SimulateBundleResult::failure(results, egp, err),
            };
            let result = apply_transaction(self.engine.as_ref(), env, &refund_tx);
            if !result.success {
                let error = result.error.clone();
                return SimulateBundleResult::failure(results, egp, error)
            }
        }

        SimulateBundleResult::success(results, egp)
    }

    /// Builds the transfer paying the bundle's refund share back to the
    /// signer of its first transaction.
    fn refund_transaction(
        &self,
        bundle: &Bundle,
        env: &ExecutionEnvironment,
        profit_pre: U256,
        profit_post: U256,
    ) -> Result<Transaction, Error> {
        if bundle.txs.len() < 2 || !bundle.has_refund() {
            return Err(BundleError::RefundNotPossible.into())
        }

        let base_fee = env.base_fee();
        let transfer_cost = U256::from(PAYMENT_TX_GAS_LIMIT) * base_fee;
        let percent = bundle.effective_refund_percent().expect("refund is set");

        let bundle_profit = profit_post.saturating_sub(profit_pre);
        let refund_amount = (bundle_profit * U256::from(percent) / U256::from(100))
            .checked_sub(transfer_cost)
            .ok_or(EngineError::InsufficientFunds)?;

        let refund_recipient = bundle.txs[0].recover_signer()?;

        Transaction::transfer(
            &self.ephemeral_signer,
            self.chain.chain_config().chain_id,
            env.nonce(&self.ephemeral_address),
            PAYMENT_TX_GAS_LIMIT,
            gas_price_of(base_fee),
            refund_recipient,
            refund_amount,
        )
    }

    /// Packs mempool transactions into the remaining gas, in the engine's
    /// priority order. Transactions already in the draft stay where they are.
    pub fn fill_pending(&mut self) -> Result<(), Error> {
        for tx in self.engine.pending_transactions() {
            if self.env.gas_remaining() < tx.gas_limit() {
                continue
            }
            let sender = tx.recover_signer()?;
            if tx.nonce() < self.env.nonce(&sender) {
                // already included, here or upstream
                continue
            }
            let result = apply_transaction(self.engine.as_ref(), &mut self.env, &tx);
            if !result.success {
                tracing::trace!(tx_hash = %tx.hash(), error = %result.error, "skipping pending transaction");
            }
        }
        Ok(())
    }

    /// Seals the session's block: sweeps leftover profit off the ephemeral
    /// account, then hands the draft to the consensus engine.
    pub fn build_block(&mut self) -> Result<&SealedBlock, Error> {
        let base_fee = self.env.base_fee();
        let transfer_cost = U256::from(PAYMENT_TX_GAS_LIMIT) * base_fee;
        let balance = self.env.balance(&self.ephemeral_address);

        if balance > transfer_cost {
            let profit = balance - transfer_cost;
            let sweep = Transaction::transfer(
                &self.ephemeral_signer,
                self.chain.chain_config().chain_id,
                self.env.nonce(&self.ephemeral_address),
                PAYMENT_TX_GAS_LIMIT,
                gas_price_of(base_fee),
                self.env.coinbase(),
                profit,
            )?;
            self.env.commit(self.engine.as_ref(), &sweep)?;
        }

        let envelope = self.env.finalize(self.chain.as_ref())?;
        tracing::info!(
            block_hash = %envelope.block.hash,
            number = envelope.block.header.number,
            gas_used = envelope.block.header.gas_used,
            "built block"
        );
        self.block = Some(envelope);
        Ok(&self.block.as_ref().expect("just stored").block)
    }

    /// Assembles the unsigned submission for the sealed block.
    pub fn bid(&self, builder_public_key: &BlsPublicKey) -> Result<SubmitBlockRequest, Error> {
        let envelope = self.block.as_ref().ok_or(Error::BlockNotBuilt)?;

        let execution_payload = compat::to_execution_payload(&envelope.block)?;
        let value = compat::to_block_value(envelope.fees)?;

        let message = BidTrace {
            slot: self.args.slot,
            parent_hash: execution_payload.parent_hash.clone(),
            block_hash: execution_payload.block_hash.clone(),
            builder_public_key: builder_public_key.clone(),
            proposer_public_key: self.args.proposer_pubkey.clone(),
            proposer_fee_recipient: compat::to_bytes20(self.args.fee_recipient),
            gas_limit: execution_payload.gas_limit,
            gas_used: execution_payload.gas_used,
            value,
        };

        let root = signing::compute_builder_signing_root(&message, &self.genesis_fork_version)?;

        Ok(SubmitBlockRequest {
            root,
            message,
            execution_payload,
            signature: BlsSignature::default(),
            blobs_bundle: BlobsBundle::default(),
        })
    }

    pub fn get_balance(&self, address: &Address) -> U256 {
        self.env.balance(address)
    }

    /// A read-only call against the pending state.
    pub fn call(&self, args: &TxArgs) -> Result<Vec<u8>, Error> {
        self.engine.call(self.env.state(), args).map_err(From::from)
    }

    pub fn ephemeral_address(&self) -> Address {
        self.ephemeral_address
    }

    pub fn environment(&self) -> &ExecutionEnvironment {
        &self.env
    }
}

fn apply_transaction(
    engine: &dyn ExecutionEngine,
    env: &mut ExecutionEnvironment,
    tx: &Transaction,
) -> SimulateTransactionResult {
    match env.commit(engine, tx) {
        Ok(receipt) => SimulateTransactionResult {
            egp: receipt.gas_used,
            logs: receipt.logs.clone(),
            success: true,
            error: String::new(),
        },
        Err(err) => SimulateTransactionResult::failure(err),
    }
}

fn gas_price_of(base_fee: U256) -> u128 {
    u128::try_from(base_fee).unwrap_or(u128::MAX)
}
