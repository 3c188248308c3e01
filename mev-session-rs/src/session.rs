use crate::{
    beacon::BeaconContextProvider,
    builder::{Builder, BuilderArgs, BuilderConfig},
    chain::{ChainContext, ExecutionEngine},
    config::{
        Config, DEFAULT_GAS_CEIL, DEFAULT_MAX_CONCURRENT_SESSIONS, DEFAULT_SESSION_IDLE_TIMEOUT,
    },
    error::Error,
    types::{
        BuildBlockArgs, Bundle, SimulateBundleResult, SimulateTransactionResult,
        SubmitBlockRequest, Transaction, TxArgs,
    },
};
use alloy::primitives::{Address, B256, U256};
use ethereum_consensus::primitives::{BlsPublicKey, Version};
use parking_lot::Mutex;
use rand::Rng;
use std::{collections::HashMap, ops::Deref, sync::Arc, time::Duration};
use tokio::{
    sync::{OwnedSemaphorePermit, Semaphore},
    time::Instant,
};
use tokio_util::sync::CancellationToken;

const SESSION_ID_LENGTH: usize = 7;

/// One live building session: its builder, its idle deadline, and the
/// admission permit it occupies.
///
/// The builder sits behind an async lock so that one slow executor call
/// serializes only this session, never the whole manager.
pub struct Session {
    id: String,
    builder: tokio::sync::Mutex<Builder>,
    deadline: Mutex<Instant>,
    _permit: OwnedSemaphorePermit,
}

impl Session {
    pub fn id(&self) -> &str {
        &self.id
    }
}

enum SessionRef {
    Live(Arc<Session>),
    /// A throwaway builder for callers that simulate without opening a
    /// session first.
    OnTheFly(Box<Builder>),
}

struct State {
    sessions: HashMap<String, Arc<Session>>,
}

pub struct Inner {
    chain: Arc<dyn ChainContext>,
    engine: Arc<dyn ExecutionEngine>,
    beacon: Option<Arc<dyn BeaconContextProvider>>,
    gas_ceil: u64,
    session_idle_timeout: Duration,
    max_concurrent_sessions: usize,
    genesis_fork_version: Version,
    semaphore: Arc<Semaphore>,
    state: Mutex<State>,
}

/// Admits, tracks, and times out concurrent building sessions.
#[derive(Clone)]
pub struct SessionManager(Arc<Inner>);

impl Deref for SessionManager {
    type Target = Inner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl SessionManager {
    pub fn new(
        chain: Arc<dyn ChainContext>,
        engine: Arc<dyn ExecutionEngine>,
        beacon: Option<Arc<dyn BeaconContextProvider>>,
        config: &Config,
    ) -> Self {
        let gas_ceil = if config.gas_ceil == 0 { DEFAULT_GAS_CEIL } else { config.gas_ceil };
        let session_idle_timeout = if config.session_idle_timeout.is_zero() {
            DEFAULT_SESSION_IDLE_TIMEOUT
        } else {
            config.session_idle_timeout
        };
        let max_concurrent_sessions = if config.max_concurrent_sessions == 0 {
            DEFAULT_MAX_CONCURRENT_SESSIONS
        } else {
            config.max_concurrent_sessions
        };

        Self(Arc::new(Inner {
            chain,
            engine,
            beacon,
            gas_ceil,
            session_idle_timeout,
            max_concurrent_sessions,
            genesis_fork_version: config.genesis_fork_version.clone(),
            semaphore: Arc::new(Semaphore::new(max_concurrent_sessions)),
            state: Mutex::new(State { sessions: HashMap::new() }),
        }))
    }

    /// Opens a new session, waiting for an admission permit when the
    /// manager is at capacity. The wait is abandoned when `cancel` fires.
    pub async fn new_session(
        &self,
        args: Option<BuildBlockArgs>,
        cancel: &CancellationToken,
    ) -> Result<String, Error> {
        let permit = tokio::select! {
            permit = self.semaphore.clone().acquire_owned() => {
                permit.map_err(|_| Error::Canceled)?
            }
            _ = cancel.cancelled() => return Err(Error::Canceled),
        };

        let builder = self.new_builder(args)?;

        let mut state = self.state.lock();
        let id = loop {
            let candidate = generate_session_id(&mut rand::thread_rng());
            if !state.sessions.contains_key(&candidate) {
                break candidate
            }
        };

        let session = Arc::new(Session {
            id: id.clone(),
            builder: tokio::sync::Mutex::new(builder),
            deadline: Mutex::new(Instant::now() + self.session_idle_timeout),
            _permit: permit,
        });
        state.sessions.insert(id.clone(), session.clone());
        debug_assert!(
            state.sessions.len() + self.semaphore.available_permits() <=
                self.max_concurrent_sessions,
            "more live sessions than admission permits"
        );
        drop(state);

        tracing::info!(session = %id, "created new builder session");
        self.spawn_idle_reaper(session);

        Ok(id)
    }

    /// Resolves a session id, resetting its idle deadline. An empty id
    /// yields a throwaway builder when `allow_on_the_fly` is set.
    fn get_session(&self, session_id: &str, allow_on_the_fly: bool) -> Result<SessionRef, Error> {
        if session_id.is_empty() && allow_on_the_fly {
            return Ok(SessionRef::OnTheFly(Box::new(self.new_builder(None)?)))
        }

        let state = self.state.lock();
        let session = state
            .sessions
            .get(session_id)
            .cloned()
            .ok_or_else(|| Error::SessionNotFound(session_id.to_string()))?;
        *session.deadline.lock() = Instant::now() + self.session_idle_timeout;
        Ok(SessionRef::Live(session))
    }

    fn spawn_idle_reaper(&self, session: Arc<Session>) {
        let manager = self.clone();
        tokio::spawn(async move {
            loop {
                let deadline = *session.deadline.lock();
                tokio::time::sleep_until(deadline).await;

                let mut state = manager.state.lock();
                if *session.deadline.lock() > Instant::now() {
                    // touched while we slept
                    continue
                }
                if state.sessions.remove(session.id()).is_some() {
                    tracing::info!(session = %session.id(), "evicted idle session");
                }
                return
            }
        });
    }

    fn new_builder(&self, args: Option<BuildBlockArgs>) -> Result<Builder, Error> {
        let args = self.merge_with_beacon(args);

        let parent_hash =
            if args.parent == B256::ZERO { self.chain.head_hash() } else { args.parent };

        let config = BuilderConfig {
            chain: self.chain.clone(),
            engine: self.engine.clone(),
            gas_ceil: self.gas_ceil,
            genesis_fork_version: self.genesis_fork_version.clone(),
        };
        let builder_args = BuilderArgs {
            parent_hash,
            fee_recipient: args.fee_recipient,
            proposer_pubkey: args.proposer_pubkey.clone(),
            extra: args.extra.clone(),
            slot: args.slot,
            timestamp: args.timestamp,
            gas_limit: args.gas_limit,
            random: args.random,
            withdrawals: args.withdrawals.clone(),
            parent_beacon_block_root: if args.beacon_root == B256::ZERO {
                None
            } else {
                Some(args.beacon_root)
            },
        };

        let mut builder = Builder::new(&config, builder_args)?;
        if args.fill_pending {
            builder.fill_pending()?;
        }
        Ok(builder)
    }

    /// Fills empty fields of the caller's args from the latest beacon
    /// context snapshot; absent args take the snapshot wholesale.
    fn merge_with_beacon(&self, overrides: Option<BuildBlockArgs>) -> BuildBlockArgs {
        let Some(beacon) = &self.beacon else {
            return overrides.unwrap_or_default();
        };

        let snapshot = beacon.latest();
        let Some(mut args) = overrides else {
            return snapshot.to_build_args();
        };

        if args.slot == 0 {
            args.slot = snapshot.slot;
        }
        if args.proposer_pubkey == BlsPublicKey::default() {
            args.proposer_pubkey = snapshot.proposer_pubkey.clone();
        }
        if args.parent == B256::ZERO {
            args.parent = snapshot.parent;
        }
        if args.timestamp == 0 {
            args.timestamp = snapshot.timestamp;
        }
        if args.fee_recipient == Address::ZERO {
            args.fee_recipient = snapshot.fee_recipient;
        }
        if args.gas_limit == 0 {
            args.gas_limit = snapshot.gas_limit;
        }
        if args.random == B256::ZERO {
            args.random = snapshot.prev_randao;
        }
        if args.withdrawals.is_empty() {
            args.withdrawals = snapshot.withdrawals.clone();
        }
        if args.beacon_root == B256::ZERO {
            args.beacon_root = snapshot.parent_beacon_block_root;
        }
        args
    }

    pub async fn add_transaction(
        &self,
        session_id: &str,
        tx: &Transaction,
    ) -> Result<SimulateTransactionResult, Error> {
        match self.get_session(session_id, true)? {
            SessionRef::Live(session) => {
                let mut builder = session.builder.lock().await;
                Ok(builder.add_transaction(tx))
            }
            SessionRef::OnTheFly(mut builder) => Ok(builder.add_transaction(tx)),
        }
    }

    pub async fn add_transactions(
        &self,
        session_id: &str,
        txs: &[Transaction],
    ) -> Result<Vec<SimulateTransactionResult>, Error> {
        match self.get_session(session_id, true)? {
            SessionRef::Live(session) => {
                let mut builder = session.builder.lock().await;
                Ok(builder.add_transactions(txs))
            }
            SessionRef::OnTheFly(mut builder) => Ok(builder.add_transactions(txs)),
        }
    }

    pub async fn add_bundles(
        &self,
        session_id: &str,
        bundles: &[Bundle],
    ) -> Result<Vec<SimulateBundleResult>, Error> {
        match self.get_session(session_id, true)? {
            SessionRef::Live(session) => {
                let mut builder = session.builder.lock().await;
                Ok(builder.add_bundles(bundles))
            }
            SessionRef::OnTheFly(mut builder) => Ok(builder.add_bundles(bundles)),
        }
    }

    pub async fn build_block(&self, session_id: &str) -> Result<(), Error> {
        match self.get_session(session_id, false)? {
            SessionRef::Live(session) => {
                let mut builder = session.builder.lock().await;
                builder.build_block()?;
                Ok(())
            }
            SessionRef::OnTheFly(..) => unreachable!("terminal operations require a session id"),
        }
    }

    pub async fn bid(
        &self,
        session_id: &str,
        builder_public_key: &BlsPublicKey,
    ) -> Result<SubmitBlockRequest, Error> {
        match self.get_session(session_id, false)? {
            SessionRef::Live(session) => {
                let builder = session.builder.lock().await;
                builder.bid(builder_public_key)
            }
            SessionRef::OnTheFly(..) => unreachable!("terminal operations require a session id"),
        }
    }

    pub async fn get_balance(&self, session_id: &str, address: Address) -> Result<U256, Error> {
        match self.get_session(session_id, false)? {
            SessionRef::Live(session) => {
                let builder = session.builder.lock().await;
                Ok(builder.get_balance(&address))
            }
            SessionRef::OnTheFly(..) => unreachable!("terminal operations require a session id"),
        }
    }

    pub async fn call(&self, session_id: &str, args: &TxArgs) -> Result<Vec<u8>, Error> {
        match self.get_session(session_id, false)? {
            SessionRef::Live(session) => {
                let builder = session.builder.lock().await;
                builder.call(args)
            }
            SessionRef::OnTheFly(..) => unreachable!("terminal operations require a session id"),
        }
    }

    /// Number of sessions currently alive.
    pub fn session_count(&self) -> usize {
        self.state.lock().sessions.len()
    }

    pub fn available_permits(&self) -> usize {
        self.semaphore.available_permits()
    }
}

fn generate_session_id<R: Rng>(rng: &mut R) -> String {
    const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    (0..SESSION_ID_LENGTH)
        .map(|_| {
            let index = rng.gen_range(0..CHARSET.len());
            CHARSET[index] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_ids_are_short_and_opaque() {
        let mut rng = rand::thread_rng();
        for _ in 0..64 {
            let id = generate_session_id(&mut rng);
            assert_eq!(id.len(), SESSION_ID_LENGTH);
            assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }
}
