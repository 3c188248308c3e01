#![allow(dead_code)]

use alloy::{
    primitives::{Address, U256},
    signers::local::PrivateKeySigner,
};
use ethereum_consensus::primitives::Version;
use mev_session_rs::{
    chain::ChainContext,
    dev::{DevChain, DevEngine},
    types::Transaction,
    Builder, BuilderArgs, BuilderConfig,
};
use std::sync::Arc;

/// Arbitrary fixture account for session args; unrelated to the one-shot
/// backend's `DEFAULT_FEE_RECIPIENT`.
pub const FEE_RECIPIENT: Address = Address::new([0xab; 20]);

pub fn fork_version() -> Version {
    Version::try_from([0x00, 0x00, 0x10, 0x20].as_ref()).unwrap()
}

pub struct Harness {
    pub chain: Arc<DevChain>,
    pub engine: Arc<DevEngine>,
    pub signers: Vec<PrivateKeySigner>,
}

impl Harness {
    /// A dev chain with `signers` pre-funded accounts.
    pub fn new(signers: usize) -> Self {
        let signers: Vec<_> = (0..signers).map(|_| PrivateKeySigner::random()).collect();
        let addresses: Vec<_> = signers.iter().map(|signer| signer.address()).collect();
        let chain = Arc::new(DevChain::with_funded_accounts(&addresses));
        let engine = Arc::new(DevEngine::default());
        Self { chain, engine, signers }
    }

    pub fn builder_config(&self) -> BuilderConfig {
        BuilderConfig {
            chain: self.chain.clone(),
            engine: self.engine.clone(),
            gas_ceil: 30_000_000,
            genesis_fork_version: fork_version(),
        }
    }

    pub fn new_builder(&self) -> Builder {
        Builder::new(
            &self.builder_config(),
            BuilderArgs {
                parent_hash: self.chain.head_hash(),
                fee_recipient: FEE_RECIPIENT,
                slot: 42,
                ..Default::default()
            },
        )
        .unwrap()
    }

    /// A signed transfer of `value` wei at `gas_price`, from the `signer`-th
    /// funded account to `to`.
    pub fn transfer(
        &self,
        signer: usize,
        nonce: u64,
        gas_price: u128,
        to: Address,
        value: U256,
    ) -> Transaction {
        Transaction::transfer(
            &self.signers[signer],
            self.chain.chain_config().chain_id,
            nonce,
            21_000,
            gas_price,
            to,
            value,
        )
        .unwrap()
    }
}
