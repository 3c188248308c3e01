use crate::types::{BuildBlockArgs, Withdrawal};
use alloy::primitives::{Address, B256};
use ethereum_consensus::primitives::{BlsPublicKey, Slot};
use serde::{Deserialize, Serialize};

/// A payload-attributes event as published on the beacon node's event
/// stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadAttributesEvent {
    pub version: String,
    pub data: PayloadAttributesEventData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadAttributesEventData {
    #[serde(with = "crate::serde::as_str")]
    pub proposal_slot: Slot,
    pub parent_block_hash: B256,
    pub payload_attributes: PayloadAttributes,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadAttributes {
    #[serde(with = "crate::serde::as_str")]
    pub timestamp: u64,
    pub prev_randao: B256,
    pub suggested_fee_recipient: Address,
    #[serde(default)]
    pub parent_beacon_block_root: B256,
    #[serde(default)]
    pub withdrawals: Vec<EventWithdrawal>,
}

/// Withdrawals as they appear on the event stream, with decimal-string
/// integer fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventWithdrawal {
    #[serde(with = "crate::serde::as_str")]
    pub index: u64,
    #[serde(with = "crate::serde::as_str")]
    pub validator_index: u64,
    pub address: Address,
    #[serde(with = "crate::serde::as_str")]
    pub amount: u64,
}

/// The proposer registration a relay holds for one slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidatorData {
    pub pubkey: BlsPublicKey,
    pub fee_recipient: Address,
    pub gas_limit: u64,
}

/// The published snapshot: everything needed to prime a new session for the
/// upcoming slot. All fields are owned, so `clone` is a deep copy.
#[derive(Debug, Clone, Default)]
pub struct BeaconBuildContext {
    pub slot: Slot,
    pub proposer_pubkey: BlsPublicKey,
    pub parent: B256,
    pub timestamp: u64,
    pub fee_recipient: Address,
    pub gas_limit: u64,
    pub prev_randao: B256,
    pub withdrawals: Vec<Withdrawal>,
    pub parent_beacon_block_root: B256,
}

impl BeaconBuildContext {
    pub fn from_parts(validator: &ValidatorData, event: &PayloadAttributesEvent) -> Self {
        let attributes = &event.data.payload_attributes;
        Self {
            slot: event.data.proposal_slot,
            proposer_pubkey: validator.pubkey.clone(),
            parent: event.data.parent_block_hash,
            timestamp: attributes.timestamp,
            fee_recipient: validator.fee_recipient,
            gas_limit: validator.gas_limit,
            prev_randao: attributes.prev_randao,
            withdrawals: attributes
                .withdrawals
                .iter()
                .map(|w| Withdrawal {
                    index: w.index,
                    validator_index: w.validator_index,
                    address: w.address,
                    amount: w.amount,
                })
                .collect(),
            parent_beacon_block_root: attributes.parent_beacon_block_root,
        }
    }

    pub fn to_build_args(&self) -> BuildBlockArgs {
        BuildBlockArgs {
            slot: self.slot,
            proposer_pubkey: self.proposer_pubkey.clone(),
            parent: self.parent,
            timestamp: self.timestamp,
            fee_recipient: self.fee_recipient,
            gas_limit: self.gas_limit,
            random: self.prev_randao,
            withdrawals: self.withdrawals.clone(),
            beacon_root: self.parent_beacon_block_root,
            ..Default::default()
        }
    }
}
