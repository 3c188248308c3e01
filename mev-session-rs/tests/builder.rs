mod common;

use alloy::primitives::{Address, U256};
use common::{Harness, FEE_RECIPIENT};
use ethereum_consensus::primitives::{BlsPublicKey, BlsSignature, Root, U256 as ConsensusU256};
use mev_session_rs::{dev::REVERT_SINK, types::Bundle, PAYMENT_TX_GAS_LIMIT};

const GWEI: u128 = 1_000_000_000;

#[test]
fn builds_and_bids_a_single_transaction_block() {
    let harness = Harness::new(1);
    let mut builder = harness.new_builder();

    let gas_price = 10 * GWEI;
    let tx = harness.transfer(0, 0, gas_price, Address::repeat_byte(0x11), U256::from(1000));

    let result = builder.add_transaction(&tx);
    assert!(result.success, "{}", result.error);
    assert_eq!(result.egp, 21_000);
    assert!(result.error.is_empty());

    let block = builder.build_block().unwrap().clone();
    assert_eq!(block.header.number, 1);
    assert_eq!(block.header.gas_used, 21_000);

    let public_key = BlsPublicKey::default();
    let submission = builder.bid(&public_key).unwrap();

    assert_eq!(submission.message.slot, 42);
    assert_eq!(
        submission.message.value,
        ConsensusU256::from(21_000u128 * gas_price),
        "bid value is the fee total"
    );
    assert_eq!(submission.message.gas_used, 21_000);
    assert_eq!(submission.signature, BlsSignature::default(), "signature left for downstream");
    assert_ne!(submission.root, Root::default());
    assert_eq!(submission.execution_payload.block_number, 1);
    assert_eq!(submission.execution_payload.transactions.len(), 1);
}

#[test]
fn bids_are_deterministic_for_the_same_block() {
    let harness = Harness::new(1);
    let mut builder = harness.new_builder();
    let tx = harness.transfer(0, 0, GWEI, Address::repeat_byte(0x11), U256::from(1));
    assert!(builder.add_transaction(&tx).success);
    builder.build_block().unwrap();

    let public_key = BlsPublicKey::default();
    let first = builder.bid(&public_key).unwrap();
    let second = builder.bid(&public_key).unwrap();
    assert_eq!(first.root, second.root);
}

#[test]
fn bid_requires_a_built_block() {
    let harness = Harness::new(1);
    let builder = harness.new_builder();
    let err = builder.bid(&BlsPublicKey::default()).unwrap_err();
    assert!(matches!(err, mev_session_rs::Error::BlockNotBuilt));
}

#[test]
fn failing_batch_leaves_the_environment_untouched() {
    let harness = Harness::new(1);
    let mut builder = harness.new_builder();

    let good = harness.transfer(0, 0, GWEI, Address::repeat_byte(0x11), U256::from(5));
    // wrong nonce: rejected by the engine
    let bad = harness.transfer(0, 5, GWEI, Address::repeat_byte(0x11), U256::from(5));

    let coinbase_before = builder.get_balance(&FEE_RECIPIENT);
    let sender_before = builder.get_balance(&harness.signers[0].address());

    let results = builder.add_transactions(&[good, bad]);
    assert_eq!(results.len(), 2);
    assert!(results[0].success);
    assert!(!results[1].success);
    assert!(results[1].error.contains("nonce too high"));

    assert_eq!(builder.get_balance(&FEE_RECIPIENT), coinbase_before);
    assert_eq!(builder.get_balance(&harness.signers[0].address()), sender_before);
    assert_eq!(builder.environment().receipts().len(), 0);
}

#[test]
fn successful_batch_commits_atomically() {
    let harness = Harness::new(2);
    let mut builder = harness.new_builder();

    let t1 = harness.transfer(0, 0, GWEI, Address::repeat_byte(0x11), U256::from(5));
    let t2 = harness.transfer(1, 0, GWEI, Address::repeat_byte(0x11), U256::from(7));

    let results = builder.add_transactions(&[t1, t2]);
    assert!(results.iter().all(|result| result.success));
    assert_eq!(builder.environment().receipts().len(), 2);
    assert_eq!(builder.get_balance(&Address::repeat_byte(0x11)), U256::from(12));
}

#[test]
fn empty_batch_is_a_no_op() {
    let harness = Harness::new(1);
    let mut builder = harness.new_builder();
    let results = builder.add_transactions(&[]);
    assert!(results.is_empty());
    assert_eq!(builder.environment().receipts().len(), 0);
}

#[test]
fn bundle_tolerates_listed_reverting_hashes() {
    let harness = Harness::new(2);
    let mut builder = harness.new_builder();

    let reverting = harness.transfer(0, 0, GWEI, REVERT_SINK, U256::from(1));
    let good = harness.transfer(1, 0, GWEI, Address::repeat_byte(0x11), U256::from(9));

    let bundle = Bundle {
        reverting_hashes: vec![reverting.hash()],
        txs: vec![reverting, good],
        ..Default::default()
    };

    let results = builder.add_bundles(&[bundle]);
    assert_eq!(results.len(), 1);
    assert!(results[0].success, "{}", results[0].error);
    assert_eq!(results[0].tx_results.len(), 2);
    assert!(!results[0].tx_results[0].success);
    assert!(results[0].tx_results[1].success);

    // the live environment advanced past the surviving transaction
    assert_eq!(builder.environment().receipts().len(), 1);
    assert_eq!(builder.get_balance(&Address::repeat_byte(0x11)), U256::from(9));
}

#[test]
fn bundle_aborts_on_unlisted_failure() {
    let harness = Harness::new(2);
    let mut builder = harness.new_builder();

    let reverting = harness.transfer(0, 0, GWEI, REVERT_SINK, U256::from(1));
    let good = harness.transfer(1, 0, GWEI, Address::repeat_byte(0x11), U256::from(9));

    let bundle = Bundle { txs: vec![reverting, good], ..Default::default() };

    let results = builder.add_bundles(&[bundle]);
    assert_eq!(results.len(), 1);
    assert!(!results[0].success);
    assert!(results[0].error.contains("reverted"));
    assert_eq!(builder.environment().receipts().len(), 0);
    assert_eq!(builder.get_balance(&Address::repeat_byte(0x11)), U256::ZERO);
}

#[test]
fn bundle_outside_its_inclusion_window_is_rejected() {
    let harness = Harness::new(1);
    let mut builder = harness.new_builder();

    let tx = harness.transfer(0, 0, GWEI, Address::repeat_byte(0x11), U256::from(1));
    // the draft block is number 1
    let bundle = Bundle { txs: vec![tx], block_number: Some(5), ..Default::default() };

    let results = builder.add_bundles(&[bundle]);
    assert!(!results[0].success);
    assert!(results[0].error.contains("invalid block number"));
}

#[test]
fn refund_bundle_pays_the_first_signer() {
    let harness = Harness::new(2);
    let mut builder = harness.new_builder();

    let user_gas_price = 10 * GWEI;
    let searcher_gas_price = 30 * GWEI;
    let user = harness.signers[0].address();

    let user_tx = harness.transfer(0, 0, user_gas_price, Address::repeat_byte(0x11), U256::ZERO);
    let searcher_tx =
        harness.transfer(1, 0, searcher_gas_price, Address::repeat_byte(0x11), U256::ZERO);

    let bundle = Bundle {
        txs: vec![user_tx, searcher_tx],
        refund_percent: Some(50),
        ..Default::default()
    };

    let user_balance_pre = builder.get_balance(&user);
    let base_fee = builder.environment().base_fee();

    let results = builder.add_bundles(&[bundle]);
    assert!(results[0].success, "{}", results[0].error);
    // the two bundle members plus the refund transfer
    assert_eq!(builder.environment().receipts().len(), 3);

    // coinbase is restored once the bundle is done
    assert_eq!(builder.environment().coinbase(), FEE_RECIPIENT);

    let bundle_profit = U256::from(21_000u128 * (user_gas_price + searcher_gas_price));
    let transfer_cost = U256::from(PAYMENT_TX_GAS_LIMIT) * base_fee;
    let refund_amount = bundle_profit * U256::from(50) / U256::from(100) - transfer_cost;

    let user_cost = U256::from(21_000u128 * user_gas_price);
    assert_eq!(
        builder.get_balance(&user),
        user_balance_pre - user_cost + refund_amount,
        "refund lands on the first transaction's signer"
    );

    // sealing sweeps the remaining ephemeral profit to the fee recipient
    let ephemeral = builder.ephemeral_address();
    assert!(builder.get_balance(&ephemeral) > U256::ZERO);
    let coinbase_before_seal = builder.get_balance(&FEE_RECIPIENT);
    builder.build_block().unwrap();
    assert_eq!(builder.get_balance(&ephemeral), U256::ZERO, "ephemeral account drained");
    assert!(builder.get_balance(&FEE_RECIPIENT) > coinbase_before_seal);
}

#[test]
fn refund_percent_zero_means_ten() {
    let harness = Harness::new(2);
    let mut builder = harness.new_builder();

    let gas_price = 100 * GWEI;
    let user = harness.signers[0].address();

    let user_tx = harness.transfer(0, 0, gas_price, Address::repeat_byte(0x11), U256::ZERO);
    let searcher_tx = harness.transfer(1, 0, gas_price, Address::repeat_byte(0x11), U256::ZERO);

    let bundle = Bundle {
        txs: vec![user_tx, searcher_tx],
        refund_percent: Some(0),
        ..Default::default()
    };

    let user_balance_pre = builder.get_balance(&user);
    let base_fee = builder.environment().base_fee();
    let results = builder.add_bundles(&[bundle]);
    assert!(results[0].success, "{}", results[0].error);

    let bundle_profit = U256::from(2u128 * 21_000 * gas_price);
    let transfer_cost = U256::from(PAYMENT_TX_GAS_LIMIT) * base_fee;
    let refund_amount = bundle_profit * U256::from(10) / U256::from(100) - transfer_cost;
    let user_cost = U256::from(21_000u128 * gas_price);
    assert_eq!(builder.get_balance(&user), user_balance_pre - user_cost + refund_amount);
}

#[test]
fn refund_needs_at_least_two_transactions() {
    let harness = Harness::new(1);
    let mut builder = harness.new_builder();

    let tx = harness.transfer(0, 0, GWEI, Address::repeat_byte(0x11), U256::from(1));
    let bundle = Bundle { txs: vec![tx], refund_percent: Some(50), ..Default::default() };

    let results = builder.add_bundles(&[bundle]);
    assert!(!results[0].success);
    assert!(results[0].error.contains("refund is not possible"));
    // nothing from the aborted bundle leaked into the live environment
    assert_eq!(builder.environment().receipts().len(), 0);
}

#[test]
fn failing_bundle_batch_leaves_live_state_unchanged() {
    let harness = Harness::new(2);
    let mut builder = harness.new_builder();

    let good_bundle = Bundle {
        txs: vec![harness.transfer(0, 0, GWEI, Address::repeat_byte(0x11), U256::from(3))],
        ..Default::default()
    };
    let bad_bundle = Bundle {
        txs: vec![harness.transfer(1, 0, GWEI, REVERT_SINK, U256::from(3))],
        ..Default::default()
    };

    let results = builder.add_bundles(&[good_bundle, bad_bundle]);
    assert_eq!(results.len(), 2);
    assert!(results[0].success);
    assert!(!results[1].success);

    // all-or-nothing: even the good bundle was rolled back
    assert_eq!(builder.environment().receipts().len(), 0);
    assert_eq!(builder.get_balance(&Address::repeat_byte(0x11)), U256::ZERO);
}

#[test]
fn fill_pending_packs_the_mempool_by_price() {
    let harness = Harness::new(2);

    harness.engine.add_pending_transaction(harness.transfer(
        0,
        0,
        GWEI,
        Address::repeat_byte(0x11),
        U256::from(1),
    ));
    harness.engine.add_pending_transaction(harness.transfer(
        1,
        0,
        5 * GWEI,
        Address::repeat_byte(0x11),
        U256::from(2),
    ));

    let mut builder = harness.new_builder();
    builder.fill_pending().unwrap();

    let receipts = builder.environment().receipts();
    assert_eq!(receipts.len(), 2);
    // engine priority order: highest gas price first
    assert_eq!(receipts[0].fee, U256::from(21_000u128 * 5 * GWEI));

    // a second fill is idempotent for already-committed senders
    builder.fill_pending().unwrap();
    assert_eq!(builder.environment().receipts().len(), 2);
}

#[test]
fn simulation_surfaces_logs() {
    let harness = Harness::new(1);
    let mut builder = harness.new_builder();

    let tx = mev_session_rs::types::Transaction::transfer(
        &harness.signers[0],
        1,
        0,
        21_000,
        GWEI,
        Address::repeat_byte(0x33),
        U256::ZERO,
    )
    .unwrap();
    // transfers carry no calldata, so no logs either
    let result = builder.add_transaction(&tx);
    assert!(result.success);
    assert!(result.logs.is_empty());
}
