mod common;

use alloy::primitives::{Address, U256};
use common::{Harness, FEE_RECIPIENT};
use ethereum_consensus::primitives::BlsPublicKey;
use mev_session_rs::{
    beacon::{BeaconBuildContext, BeaconContextProvider},
    Config, Error, SessionManager,
};
use std::{sync::Arc, time::Duration};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

const GWEI: u128 = 1_000_000_000;

fn manager_with(harness: &Harness, config: Config) -> SessionManager {
    SessionManager::new(harness.chain.clone(), harness.engine.clone(), None, &config)
}

fn test_config() -> Config {
    Config {
        session_idle_timeout: Duration::from_millis(200),
        max_concurrent_sessions: 4,
        gas_ceil: 30_000_000,
        ..Default::default()
    }
}

struct FixedBeacon(BeaconBuildContext);

impl BeaconContextProvider for FixedBeacon {
    fn latest(&self) -> BeaconBuildContext {
        self.0.clone()
    }

    fn latest_timestamp(&self) -> u64 {
        1
    }
}

#[tokio::test]
async fn sessions_serve_transactions_until_idle_eviction() {
    let harness = Harness::new(1);
    let manager = manager_with(&harness, test_config());

    let id = manager.new_session(None, &CancellationToken::new()).await.unwrap();

    let tx = harness.transfer(0, 0, GWEI, Address::repeat_byte(0x11), U256::from(1));
    let result = manager.add_transaction(&id, &tx).await.unwrap();
    assert!(result.success, "{}", result.error);

    // past the idle timeout the session is silently gone
    tokio::time::sleep(Duration::from_millis(500)).await;
    let tx = harness.transfer(0, 1, GWEI, Address::repeat_byte(0x11), U256::from(1));
    let err = manager.add_transaction(&id, &tx).await.unwrap_err();
    assert!(matches!(err, Error::SessionNotFound(..)));

    assert_eq!(manager.session_count(), 0);
    assert_eq!(manager.available_permits(), 4, "the permit came back");
}

#[tokio::test]
async fn lookups_reset_the_idle_deadline() {
    let harness = Harness::new(1);
    let manager = manager_with(&harness, test_config());

    let id = manager.new_session(None, &CancellationToken::new()).await.unwrap();

    // keep touching the session at intervals shorter than the timeout
    for nonce in 0..4 {
        tokio::time::sleep(Duration::from_millis(100)).await;
        let tx = harness.transfer(0, nonce, GWEI, Address::repeat_byte(0x11), U256::from(1));
        let result = manager.add_transaction(&id, &tx).await.unwrap();
        assert!(result.success, "{}", result.error);
    }

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(manager.session_count(), 0, "idle at last");
}

#[tokio::test]
async fn admission_blocks_at_the_cap_until_canceled() {
    let harness = Harness::new(1);
    let config = Config { max_concurrent_sessions: 2, ..test_config() };
    let manager = manager_with(&harness, config);

    let cancel = CancellationToken::new();
    for _ in 0..2 {
        manager.new_session(None, &cancel).await.unwrap();
    }
    assert_eq!(manager.session_count(), 2);
    assert_eq!(manager.available_permits(), 0);

    let canceler = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        canceler.cancel();
    });

    let started = Instant::now();
    let err = manager.new_session(None, &cancel).await.unwrap_err();
    assert!(matches!(err, Error::Canceled));
    assert!(started.elapsed() >= Duration::from_millis(100));
    assert_eq!(manager.session_count(), 2, "no session was created");
}

#[tokio::test]
async fn eviction_frees_a_slot_for_waiting_callers() {
    let harness = Harness::new(1);
    let config = Config {
        max_concurrent_sessions: 1,
        session_idle_timeout: Duration::from_millis(100),
        ..test_config()
    };
    let manager = manager_with(&harness, config);

    manager.new_session(None, &CancellationToken::new()).await.unwrap();

    // the second caller waits until the first session idles out
    let id = manager.new_session(None, &CancellationToken::new()).await.unwrap();
    assert!(!id.is_empty());
    assert_eq!(manager.session_count(), 1);
}

#[tokio::test]
async fn session_count_and_permits_add_up() {
    let harness = Harness::new(1);
    let manager = manager_with(&harness, test_config());

    for opened in 1..=3usize {
        manager.new_session(None, &CancellationToken::new()).await.unwrap();
        assert_eq!(manager.session_count() + manager.available_permits(), 4, "at {opened} sessions");
    }
}

#[tokio::test]
async fn empty_session_id_simulates_on_the_fly() {
    let harness = Harness::new(1);
    let manager = manager_with(&harness, test_config());

    let tx = harness.transfer(0, 0, GWEI, Address::repeat_byte(0x11), U256::from(1));
    let result = manager.add_transaction("", &tx).await.unwrap();
    assert!(result.success, "{}", result.error);
    assert_eq!(manager.session_count(), 0, "nothing was registered");

    // terminal operations insist on a real session
    let err = manager.build_block("").await.unwrap_err();
    assert!(matches!(err, Error::SessionNotFound(..)));
    let err = manager.bid("", &BlsPublicKey::default()).await.unwrap_err();
    assert!(matches!(err, Error::SessionNotFound(..)));
}

#[tokio::test]
async fn beacon_context_fills_missing_args() {
    let harness = Harness::new(1);

    let snapshot = BeaconBuildContext {
        slot: 99,
        parent: harness.chain.head_hash(),
        timestamp: 1_700_000_600,
        fee_recipient: Address::repeat_byte(0x77),
        gas_limit: 25_000_000,
        ..Default::default()
    };
    let manager = SessionManager::new(
        harness.chain.clone(),
        harness.engine.clone(),
        Some(Arc::new(FixedBeacon(snapshot))),
        &test_config(),
    );

    // nil args: the snapshot is used wholesale
    let id = manager.new_session(None, &CancellationToken::new()).await.unwrap();
    manager.build_block(&id).await.unwrap();
    let submission = manager.bid(&id, &BlsPublicKey::default()).await.unwrap();
    assert_eq!(submission.message.slot, 99);
    assert_eq!(
        submission.message.proposer_fee_recipient.as_ref(),
        Address::repeat_byte(0x77).as_slice()
    );
    assert_eq!(submission.execution_payload.timestamp, 1_700_000_600);
}

#[tokio::test]
async fn explicit_args_win_over_the_beacon_context() {
    let harness = Harness::new(1);

    let snapshot = BeaconBuildContext {
        slot: 99,
        parent: harness.chain.head_hash(),
        fee_recipient: Address::repeat_byte(0x77),
        ..Default::default()
    };
    let manager = SessionManager::new(
        harness.chain.clone(),
        harness.engine.clone(),
        Some(Arc::new(FixedBeacon(snapshot))),
        &test_config(),
    );

    let args = mev_session_rs::types::BuildBlockArgs {
        slot: 7,
        fee_recipient: FEE_RECIPIENT,
        ..Default::default()
    };
    let id = manager.new_session(Some(args), &CancellationToken::new()).await.unwrap();
    manager.build_block(&id).await.unwrap();
    let submission = manager.bid(&id, &BlsPublicKey::default()).await.unwrap();
    assert_eq!(submission.message.slot, 7);
    assert_eq!(
        submission.message.proposer_fee_recipient.as_ref(),
        FEE_RECIPIENT.as_slice()
    );
}

#[tokio::test]
async fn bid_before_build_is_rejected() {
    let harness = Harness::new(1);
    let manager = manager_with(&harness, test_config());

    let id = manager.new_session(None, &CancellationToken::new()).await.unwrap();
    let err = manager.bid(&id, &BlsPublicKey::default()).await.unwrap_err();
    assert!(matches!(err, Error::BlockNotBuilt));
}

#[tokio::test]
async fn get_balance_reads_the_pending_state() {
    let harness = Harness::new(1);
    let manager = manager_with(&harness, test_config());

    let id = manager.new_session(None, &CancellationToken::new()).await.unwrap();
    let recipient = Address::repeat_byte(0x11);

    let tx = harness.transfer(0, 0, GWEI, recipient, U256::from(123));
    manager.add_transaction(&id, &tx).await.unwrap();

    let balance = manager.get_balance(&id, recipient).await.unwrap();
    assert_eq!(balance, U256::from(123));
}

#[tokio::test]
async fn distinct_sessions_are_isolated() {
    let harness = Harness::new(2);
    let manager = manager_with(&harness, test_config());
    let cancel = CancellationToken::new();

    let a = manager.new_session(None, &cancel).await.unwrap();
    let b = manager.new_session(None, &cancel).await.unwrap();
    assert_ne!(a, b);

    let recipient = Address::repeat_byte(0x11);
    let tx = harness.transfer(0, 0, GWEI, recipient, U256::from(5));
    manager.add_transaction(&a, &tx).await.unwrap();

    assert_eq!(manager.get_balance(&a, recipient).await.unwrap(), U256::from(5));
    assert_eq!(manager.get_balance(&b, recipient).await.unwrap(), U256::ZERO);
}
