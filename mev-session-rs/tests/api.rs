mod common;

use alloy::primitives::{Address, Bytes, U256};
use common::Harness;
use ethereum_consensus::primitives::{BlsPublicKey, BlsSignature, Root};
use mev_session_rs::{
    api::{Client, ClientError},
    dev::DevBackend,
    types::{Bundle, TxArgs},
    Config, SessionManager,
};
use std::{net::Ipv4Addr, sync::Arc, time::Duration};
use url::Url;

const GWEI: u128 = 1_000_000_000;

async fn spawn_api(harness: &Harness, port: u16) -> Client {
    let config = Config { max_concurrent_sessions: 4, ..Default::default() };
    let manager =
        SessionManager::new(harness.chain.clone(), harness.engine.clone(), None, &config);
    let backend = Arc::new(DevBackend::new(
        harness.chain.clone(),
        harness.engine.clone(),
        config.gas_ceil,
        config.genesis_fork_version.clone(),
    ));
    let server = mev_session_rs::api::Server::new(Ipv4Addr::LOCALHOST, port, manager, backend);
    std::mem::drop(server.spawn());
    // give the listener a moment to bind
    tokio::time::sleep(Duration::from_millis(100)).await;

    Client::new(Url::parse(&format!("http://127.0.0.1:{port}")).unwrap())
}

#[tokio::test]
async fn drives_a_session_end_to_end_over_rpc() {
    let harness = Harness::new(1);
    let client = spawn_api(&harness, 28655).await;

    let id = client.new_session(None).await.unwrap();
    assert_eq!(id.len(), 7);

    let recipient = Address::repeat_byte(0x11);
    let tx = harness.transfer(0, 0, 10 * GWEI, recipient, U256::from(1000));
    let result = client.add_transaction(&id, &tx).await.unwrap();
    assert!(result.success, "{}", result.error);
    assert_eq!(result.egp, 21_000);

    let balance = client.get_balance(&id, recipient).await.unwrap();
    assert_eq!(balance, U256::from(1000));

    let output = client
        .call(&id, &TxArgs { to: recipient, input: Bytes::from_static(b"ping"), ..Default::default() })
        .await
        .unwrap();
    assert_eq!(output, Bytes::from_static(b"ping"));

    let ok = client.build_block(&id).await.unwrap();
    assert_eq!(ok, "ok");

    let submission = client.bid(&id, &BlsPublicKey::default()).await.unwrap();
    assert_ne!(submission.root, Root::default());
    assert_eq!(submission.signature, BlsSignature::default());
    assert_eq!(submission.execution_payload.gas_used, 21_000);
}

#[tokio::test]
async fn surfaces_session_errors_as_rpc_errors() {
    let harness = Harness::new(1);
    let client = spawn_api(&harness, 28656).await;

    let err = client.build_block("missing").await.unwrap_err();
    match err {
        ClientError::Rpc { code, message } => {
            assert_eq!(code, -32001);
            assert!(message.contains("not found"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn batches_and_bundles_round_trip() {
    let harness = Harness::new(2);
    let client = spawn_api(&harness, 28657).await;

    let id = client.new_session(None).await.unwrap();

    let txs = vec![
        harness.transfer(0, 0, GWEI, Address::repeat_byte(0x11), U256::from(1)),
        harness.transfer(1, 0, GWEI, Address::repeat_byte(0x11), U256::from(2)),
    ];
    let results = client.add_transactions(&id, &txs).await.unwrap();
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|result| result.success));

    let bundle = Bundle {
        txs: vec![harness.transfer(0, 1, GWEI, Address::repeat_byte(0x22), U256::from(5))],
        ..Default::default()
    };
    let results = client.add_bundles(&id, &[bundle]).await.unwrap();
    assert_eq!(results.len(), 1);
    assert!(results[0].success, "{}", results[0].error);
    assert_eq!(results[0].egp, 21_000);

    let balance = client.get_balance(&id, Address::repeat_byte(0x22)).await.unwrap();
    assert_eq!(balance, U256::from(5));
}
