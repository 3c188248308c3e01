mod client;
mod types;

pub use client::{BoostRelayClient, PayloadAttributesSseStream};
pub use types::*;

use crate::error::Error;
use async_trait::async_trait;
use ethereum_consensus::primitives::Slot;
use parking_lot::Mutex;
use std::{
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Read access to the latest known proposer / payload-attributes pair.
/// Every read hands out an owned deep copy.
pub trait BeaconContextProvider: Send + Sync {
    fn latest(&self) -> BeaconBuildContext;
    fn latest_timestamp(&self) -> u64;
}

/// The stream of payload-attributes events published by a beacon node.
#[async_trait]
pub trait PayloadAttributesFeed: Send {
    /// The next event, or `None` once the stream is exhausted.
    async fn next_event(&mut self) -> Option<PayloadAttributesEvent>;
}

/// Lookup of the validator registered to propose a given slot.
#[async_trait]
pub trait ValidatorProvider: Send + Sync {
    async fn validator_for_slot(&self, slot: Slot) -> Result<ValidatorData, Error>;
}

struct CacheState {
    context: BeaconBuildContext,
    timestamp: u64,
}

/// A background-refreshed snapshot of the beacon chain's view of the next
/// block: for each payload-attributes event the proposer registration is
/// fetched from the relay and the merged snapshot published.
///
/// Feed and relay failures are logged and skipped; the snapshot stays
/// whatever it was.
pub struct BeaconContextCache {
    state: Arc<Mutex<CacheState>>,
    cancel: CancellationToken,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl BeaconContextCache {
    /// Starts the refresh loop. The cache owns the task until [`stop`] is
    /// called.
    ///
    /// [`stop`]: BeaconContextCache::stop
    pub fn spawn<F, V>(mut feed: F, validators: V) -> Self
    where
        F: PayloadAttributesFeed + 'static,
        V: ValidatorProvider + 'static,
    {
        let state = Arc::new(Mutex::new(CacheState {
            context: BeaconBuildContext::default(),
            timestamp: 0,
        }));
        let cancel = CancellationToken::new();

        let task_state = state.clone();
        let task_cancel = cancel.clone();
        let handle = tokio::spawn(async move {
            loop {
                let event = tokio::select! {
                    _ = task_cancel.cancelled() => break,
                    event = feed.next_event() => match event {
                        Some(event) => event,
                        None => break,
                    },
                };
                tracing::debug!(slot = event.data.proposal_slot, "new payload attributes event");

                let validator = match validators.validator_for_slot(event.data.proposal_slot).await
                {
                    Ok(validator) => validator,
                    Err(err) => {
                        tracing::warn!(slot = event.data.proposal_slot, %err, "could not get validator");
                        continue
                    }
                };

                let context = BeaconBuildContext::from_parts(&validator, &event);
                let mut state = task_state.lock();
                state.context = context;
                state.timestamp = unix_now();
            }
            tracing::debug!("beacon context refresh loop finished");
        });

        Self { state, cancel, handle: Mutex::new(Some(handle)) }
    }

    /// Cancels the refresh loop and waits for it to wind down.
    pub async fn stop(&self) {
        self.cancel.cancel();
        let handle = self.handle.lock().take();
        if let Some(handle) = handle {
            if let Err(err) = handle.await {
                tracing::warn!(%err, "beacon context refresh task failed");
            }
        }
    }
}

impl BeaconContextProvider for BeaconContextCache {
    fn latest(&self) -> BeaconBuildContext {
        self.state.lock().context.clone()
    }

    fn latest_timestamp(&self) -> u64 {
        self.state.lock().timestamp
    }
}

fn unix_now() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).expect("past epoch").as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{Address, B256};

    struct ScriptedFeed(Vec<PayloadAttributesEvent>);

    #[async_trait]
    impl PayloadAttributesFeed for ScriptedFeed {
        async fn next_event(&mut self) -> Option<PayloadAttributesEvent> {
            if self.0.is_empty() {
                // keep the stream open so the loop only exits on `stop`
                futures::future::pending::<()>().await;
            }
            Some(self.0.remove(0))
        }
    }

    struct FixedValidators(ValidatorData);

    #[async_trait]
    impl ValidatorProvider for FixedValidators {
        async fn validator_for_slot(&self, slot: Slot) -> Result<ValidatorData, Error> {
            if slot % 2 == 1 {
                return Err(Error::Custom("no registration".to_string()))
            }
            Ok(self.0.clone())
        }
    }

    fn event(slot: Slot) -> PayloadAttributesEvent {
        PayloadAttributesEvent {
            version: "capella".to_string(),
            data: PayloadAttributesEventData {
                proposal_slot: slot,
                parent_block_hash: B256::repeat_byte(slot as u8),
                payload_attributes: PayloadAttributes {
                    timestamp: 1000 + slot,
                    prev_randao: B256::repeat_byte(0xaa),
                    suggested_fee_recipient: Address::ZERO,
                    parent_beacon_block_root: B256::repeat_byte(0xbb),
                    withdrawals: Vec::new(),
                },
            },
        }
    }

    #[tokio::test]
    async fn publishes_snapshots_and_skips_failures() {
        let validator = ValidatorData {
            pubkey: Default::default(),
            fee_recipient: Address::repeat_byte(0x42),
            gas_limit: 30_000_000,
        };
        // slot 3 has no registration and must not clobber slot 2's snapshot
        let cache = BeaconContextCache::spawn(
            ScriptedFeed(vec![event(2), event(3)]),
            FixedValidators(validator),
        );

        let deadline = tokio::time::Instant::now() + std::time::Duration::from_secs(1);
        loop {
            if cache.latest().slot == 2 {
                break
            }
            assert!(tokio::time::Instant::now() < deadline, "no snapshot published");
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }

        let snapshot = cache.latest();
        assert_eq!(snapshot.slot, 2);
        assert_eq!(snapshot.fee_recipient, Address::repeat_byte(0x42));
        assert_eq!(snapshot.parent, B256::repeat_byte(2));
        assert!(cache.latest_timestamp() > 0);

        cache.stop().await;
    }
}
