//! Conversions between execution-layer values and their consensus-side SSZ
//! representations.

use crate::{
    error::Error,
    types::{SealedBlock, Withdrawal},
};
use alloy::primitives::{Address, Bloom, B256, U256, U512};
use ethereum_consensus::{
    deneb::mainnet as deneb,
    primitives::{Bytes32, ExecutionAddress},
    ssz::prelude::{ByteList, ByteVector, U256 as ConsensusU256},
};

pub fn to_bytes32(value: B256) -> Bytes32 {
    Bytes32::try_from(value.as_ref()).expect("correct length")
}

pub fn to_bytes20(value: Address) -> ExecutionAddress {
    ExecutionAddress::try_from(value.as_ref()).expect("correct length")
}

fn to_byte_vector(value: Bloom) -> ByteVector<256> {
    ByteVector::<256>::try_from(value.as_ref()).expect("correct length")
}

pub fn to_u256(value: U256) -> ConsensusU256 {
    ConsensusU256::from_le_bytes(value.to_le_bytes::<32>())
}

/// Narrows the wide fee accumulator into the 256-bit bid value, surfacing
/// totals that do not fit.
pub fn to_block_value(fees: U512) -> Result<ConsensusU256, Error> {
    if fees > U512::from(U256::MAX) {
        return Err(Error::BlockValueOverflow(fees))
    }
    let bytes = fees.to_le_bytes::<64>();
    let mut narrowed = [0u8; 32];
    narrowed.copy_from_slice(&bytes[..32]);
    Ok(ConsensusU256::from_le_bytes(narrowed))
}

pub fn to_execution_payload(block: &SealedBlock) -> Result<deneb::ExecutionPayload, Error> {
    let header = &block.header;
    let transactions = block
        .transactions
        .iter()
        .map(|tx| deneb::Transaction::try_from(tx.encoded().as_slice()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| Error::Custom("transaction exceeds payload bounds".to_string()))?;
    let withdrawals = block.withdrawals.iter().map(to_withdrawal).collect::<Vec<_>>();

    let payload = deneb::ExecutionPayload {
        parent_hash: to_bytes32(header.parent_hash),
        fee_recipient: to_bytes20(header.coinbase),
        state_root: to_bytes32(header.state_root),
        receipts_root: to_bytes32(header.receipts_root),
        logs_bloom: to_byte_vector(header.logs_bloom),
        prev_randao: to_bytes32(header.prev_randao),
        block_number: header.number,
        gas_limit: header.gas_limit,
        gas_used: header.gas_used,
        timestamp: header.timestamp,
        extra_data: ByteList::try_from(header.extra_data.as_ref())
            .map_err(|_| Error::Custom("extra data too long".to_string()))?,
        base_fee_per_gas: to_u256(header.base_fee),
        block_hash: to_bytes32(block.hash),
        transactions: TryFrom::try_from(transactions)
            .map_err(|_| Error::Custom("too many transactions for payload".to_string()))?,
        withdrawals: TryFrom::try_from(withdrawals)
            .map_err(|_| Error::Custom("too many withdrawals for payload".to_string()))?,
        blob_gas_used: 0,
        excess_blob_gas: 0,
    };
    Ok(payload)
}

fn to_withdrawal(withdrawal: &Withdrawal) -> deneb::Withdrawal {
    deneb::Withdrawal {
        index: withdrawal.index as usize,
        validator_index: withdrawal.validator_index as usize,
        address: to_bytes20(withdrawal.address),
        amount: withdrawal.amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrows_fees_that_fit() {
        let fees = U512::from(21_000u64) * U512::from(1_000_000_000u64);
        let value = to_block_value(fees).unwrap();
        assert_eq!(value, to_u256(U256::from(21_000_000_000_000u64)));
    }

    #[test]
    fn rejects_fees_past_one_word() {
        let fees = U512::from(U256::MAX) + U512::from(1u64);
        assert!(matches!(to_block_value(fees), Err(Error::BlockValueOverflow(_))));
    }

    #[test]
    fn round_trips_u256_through_bytes() {
        let value = U256::from(123_456_789u64);
        assert_eq!(to_u256(value), ConsensusU256::from(123_456_789u64));
    }
}
