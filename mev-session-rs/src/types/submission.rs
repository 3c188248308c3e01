use ethereum_consensus::{
    crypto::{KzgCommitment, KzgProof},
    deneb::mainnet::{Blob, MAX_BLOB_COMMITMENTS_PER_BLOCK},
    primitives::{BlsPublicKey, BlsSignature, ExecutionAddress, Hash32, Root, Slot, U256},
    ssz::prelude::*,
};
pub use ethereum_consensus::deneb::mainnet::ExecutionPayload;

/// The message a builder offers to a proposer: a summary of the block and the
/// value it carries.
#[derive(Debug, Default, Clone, SimpleSerialize, serde::Serialize, serde::Deserialize)]
pub struct BidTrace {
    #[serde(with = "crate::serde::as_str")]
    pub slot: Slot,
    pub parent_hash: Hash32,
    pub block_hash: Hash32,
    #[serde(rename = "builder_pubkey")]
    pub builder_public_key: BlsPublicKey,
    #[serde(rename = "proposer_pubkey")]
    pub proposer_public_key: BlsPublicKey,
    pub proposer_fee_recipient: ExecutionAddress,
    #[serde(with = "crate::serde::as_str")]
    pub gas_limit: u64,
    #[serde(with = "crate::serde::as_str")]
    pub gas_used: u64,
    pub value: U256,
}

#[derive(Debug, Default, Clone, SimpleSerialize, serde::Serialize, serde::Deserialize)]
pub struct BlobsBundle {
    pub commitments: List<KzgCommitment, MAX_BLOB_COMMITMENTS_PER_BLOCK>,
    pub proofs: List<KzgProof, MAX_BLOB_COMMITMENTS_PER_BLOCK>,
    pub blobs: List<Blob, MAX_BLOB_COMMITMENTS_PER_BLOCK>,
}

/// An unsigned block submission.
///
/// `root` is the signing root of `message` under the builder domain; the
/// signature field is left empty here for a downstream signer to fill.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SubmitBlockRequest {
    pub root: Root,
    pub message: BidTrace,
    pub execution_payload: ExecutionPayload,
    pub signature: BlsSignature,
    pub blobs_bundle: BlobsBundle,
}
