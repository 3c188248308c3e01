use crate::{error::BundleError, types::Transaction};
use alloy::primitives::B256;
use serde::{Deserialize, Serialize};

/// Fallback refund percent applied when a refund bundle asks for `0`.
pub const DEFAULT_REFUND_PERCENT: u64 = 10;

/// An ordered group of transactions committed as a unit, with an optional
/// inclusion window and an optional profit refund policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    pub txs: Vec<Transaction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_block: Option<u64>,
    /// Hashes of member transactions permitted to fail without aborting the
    /// bundle.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reverting_hashes: Vec<B256>,
    /// Fraction of the bundle's profit paid back to the signer of the first
    /// transaction, in percent. `0` selects [`DEFAULT_REFUND_PERCENT`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refund_percent: Option<u64>,
}

impl Bundle {
    pub fn has_refund(&self) -> bool {
        self.refund_percent.is_some()
    }

    /// The refund percent in effect once the `0 => default` rule is applied.
    pub fn effective_refund_percent(&self) -> Option<u64> {
        self.refund_percent.map(|percent| if percent == 0 { DEFAULT_REFUND_PERCENT } else { percent })
    }

    /// Admission checks against the block currently being built.
    pub fn validate(&self, current_block_number: u64) -> Result<(), BundleError> {
        if let (Some(block_number), Some(max_block)) = (self.block_number, self.max_block) {
            if block_number > max_block {
                return Err(BundleError::InvalidInclusionRange)
            }
        }

        if let Some(block_number) = self.block_number {
            match self.max_block {
                None if current_block_number != block_number => {
                    return Err(BundleError::InvalidBlockNumber)
                }
                Some(max_block) => {
                    if current_block_number > max_block {
                        return Err(BundleError::ExceedsMaxBlock)
                    }
                    if current_block_number < block_number {
                        return Err(BundleError::InvalidBlockNumber)
                    }
                }
                _ => {}
            }
        }

        if self.txs.is_empty() {
            return Err(BundleError::EmptyTxs)
        }

        // https://github.com/flashbots/mev-share/blob/main/specs/bundles/refund-recipient.md#refundpercent
        if let Some(percent) = self.refund_percent {
            if percent > 99 {
                return Err(BundleError::InvalidRefundPercent)
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::{
        primitives::{Address, U256},
        signers::local::PrivateKeySigner,
    };

    fn bundle_with_txs(count: usize) -> Bundle {
        let signer = PrivateKeySigner::random();
        let txs = (0..count)
            .map(|nonce| {
                Transaction::transfer(
                    &signer,
                    1,
                    nonce as u64,
                    21_000,
                    1,
                    Address::repeat_byte(0x22),
                    U256::from(1),
                )
                .unwrap()
            })
            .collect();
        Bundle { txs, ..Default::default() }
    }

    #[test]
    fn rejects_inverted_inclusion_range() {
        let bundle =
            Bundle { block_number: Some(10), max_block: Some(5), ..bundle_with_txs(1) };
        assert_eq!(bundle.validate(7), Err(BundleError::InvalidInclusionRange));
    }

    #[test]
    fn pins_exact_block_when_only_block_number_is_set() {
        let bundle = Bundle { block_number: Some(10), ..bundle_with_txs(1) };
        assert_eq!(bundle.validate(10), Ok(()));
        assert_eq!(bundle.validate(11), Err(BundleError::InvalidBlockNumber));
    }

    #[test]
    fn enforces_inclusion_window() {
        let bundle =
            Bundle { block_number: Some(10), max_block: Some(12), ..bundle_with_txs(1) };
        assert_eq!(bundle.validate(11), Ok(()));
        assert_eq!(bundle.validate(13), Err(BundleError::ExceedsMaxBlock));
        assert_eq!(bundle.validate(9), Err(BundleError::InvalidBlockNumber));
    }

    #[test]
    fn rejects_empty_transaction_list() {
        let bundle = Bundle::default();
        assert_eq!(bundle.validate(1), Err(BundleError::EmptyTxs));
    }

    #[test]
    fn bounds_refund_percent() {
        let mut bundle = bundle_with_txs(2);
        bundle.refund_percent = Some(99);
        assert_eq!(bundle.validate(1), Ok(()));
        bundle.refund_percent = Some(100);
        assert_eq!(bundle.validate(1), Err(BundleError::InvalidRefundPercent));
    }

    #[test]
    fn zero_refund_percent_selects_the_default() {
        let mut bundle = bundle_with_txs(2);
        bundle.refund_percent = Some(0);
        assert_eq!(bundle.effective_refund_percent(), Some(DEFAULT_REFUND_PERCENT));
        bundle.refund_percent = Some(55);
        assert_eq!(bundle.effective_refund_percent(), Some(55));
    }
}
