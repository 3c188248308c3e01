use crate::{
    beacon::{
        types::{PayloadAttributesEvent, ValidatorData},
        PayloadAttributesFeed, ValidatorProvider,
    },
    error::Error,
};
use alloy::primitives::Address;
use async_trait::async_trait;
use ethereum_consensus::primitives::{BlsPublicKey, Slot};
use futures_util::{Stream, StreamExt};
use serde::Deserialize;
use std::pin::Pin;
use url::Url;

type ByteStream = Pin<Box<dyn Stream<Item = reqwest::Result<bytes::Bytes>> + Send>>;

/// Server-sent payload-attributes events from a beacon node.
pub struct PayloadAttributesSseStream {
    stream: ByteStream,
    buffer: String,
}

impl PayloadAttributesSseStream {
    pub async fn connect(beacon_rpc: &Url) -> Result<Self, Error> {
        let url = beacon_rpc
            .join("eth/v1/events?topics=payload_attributes")
            .map_err(|err| Error::Custom(err.to_string()))?;
        tracing::info!(%url, "subscribing to payload attributes events");
        let response = reqwest::Client::new()
            .get(url)
            .header("Accept", "text/event-stream")
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| Error::Custom(err.to_string()))?;
        Ok(Self { stream: Box::pin(response.bytes_stream()), buffer: String::new() })
    }
}

#[async_trait]
impl PayloadAttributesFeed for PayloadAttributesSseStream {
    async fn next_event(&mut self) -> Option<PayloadAttributesEvent> {
        loop {
            if let Some(position) = self.buffer.find("\n\n") {
                let frame: String = self.buffer.drain(..position + 2).collect();
                if let Some(event) = parse_frame(&frame) {
                    return Some(event)
                }
                continue
            }
            match self.stream.next().await? {
                Ok(chunk) => self.buffer.push_str(&String::from_utf8_lossy(&chunk)),
                Err(err) => {
                    tracing::warn!(%err, "payload attributes stream failed");
                    return None
                }
            }
        }
    }
}

fn parse_frame(frame: &str) -> Option<PayloadAttributesEvent> {
    for line in frame.lines() {
        if let Some(data) = line.strip_prefix("data:") {
            match serde_json::from_str(data.trim()) {
                Ok(event) => return Some(event),
                Err(err) => {
                    tracing::warn!(%err, "skipping malformed payload attributes event");
                    return None
                }
            }
        }
    }
    None
}

#[derive(Debug, Deserialize)]
struct RelayValidatorEntry {
    #[serde(with = "crate::serde::as_str")]
    slot: Slot,
    entry: RelayRegistration,
}

#[derive(Debug, Deserialize)]
struct RelayRegistration {
    message: RelayRegistrationMessage,
}

#[derive(Debug, Deserialize)]
struct RelayRegistrationMessage {
    fee_recipient: Address,
    #[serde(with = "crate::serde::as_str")]
    gas_limit: u64,
    pubkey: BlsPublicKey,
}

/// Queries a boost relay for the validator registered to a slot.
pub struct BoostRelayClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl BoostRelayClient {
    pub fn new(endpoint: Url) -> Self {
        Self { http: reqwest::Client::new(), endpoint }
    }
}

#[async_trait]
impl ValidatorProvider for BoostRelayClient {
    async fn validator_for_slot(&self, slot: Slot) -> Result<ValidatorData, Error> {
        let url = self
            .endpoint
            .join("relay/v1/builder/validators")
            .map_err(|err| Error::Custom(err.to_string()))?;
        let entries: Vec<RelayValidatorEntry> = self
            .http
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| Error::Custom(err.to_string()))?
            .json()
            .await
            .map_err(|err| Error::Custom(err.to_string()))?;

        entries
            .into_iter()
            .find(|entry| entry.slot == slot)
            .map(|entry| ValidatorData {
                pubkey: entry.entry.message.pubkey,
                fee_recipient: entry.entry.message.fee_recipient,
                gas_limit: entry.entry.message.gas_limit,
            })
            .ok_or_else(|| Error::Custom(format!("no validator registered for slot {slot}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_payload_attributes_frame() {
        let frame = concat!(
            "event: payload_attributes\n",
            "data: {\"version\":\"capella\",\"data\":{\"proposal_slot\":\"173\",",
            "\"parent_block_hash\":\"0x1111111111111111111111111111111111111111111111111111111111111111\",",
            "\"payload_attributes\":{\"timestamp\":\"1700000000\",",
            "\"prev_randao\":\"0x2222222222222222222222222222222222222222222222222222222222222222\",",
            "\"suggested_fee_recipient\":\"0x3333333333333333333333333333333333333333\",",
            "\"parent_beacon_block_root\":\"0x4444444444444444444444444444444444444444444444444444444444444444\",",
            "\"withdrawals\":[{\"index\":\"7\",\"validator_index\":\"9\",",
            "\"address\":\"0x5555555555555555555555555555555555555555\",\"amount\":\"321\"}]}}}",
        );
        let event = parse_frame(frame).unwrap();
        assert_eq!(event.data.proposal_slot, 173);
        assert_eq!(event.data.payload_attributes.timestamp, 1_700_000_000);
        assert_eq!(event.data.payload_attributes.withdrawals.len(), 1);
        assert_eq!(event.data.payload_attributes.withdrawals[0].amount, 321);
    }

    #[test]
    fn ignores_comment_only_frames() {
        assert!(parse_frame(": keep-alive\n").is_none());
    }
}
