use crate::error::Error;
use alloy::{
    consensus::{SignableTransaction, Signed, TxLegacy},
    primitives::{Address, Bytes, B256, U256},
    signers::{local::PrivateKeySigner, SignerSync},
};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A signed transaction as submitted by a session client.
///
/// The session core treats transactions as opaque values: it reads the hash,
/// the signer, and the gas parameters, and otherwise hands them to the
/// execution engine untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction(Signed<TxLegacy>);

impl Transaction {
    pub fn new(inner: Signed<TxLegacy>) -> Self {
        Self(inner)
    }

    pub fn hash(&self) -> B256 {
        *self.0.hash()
    }

    pub fn chain_id(&self) -> Option<u64> {
        self.0.tx().chain_id
    }

    pub fn nonce(&self) -> u64 {
        self.0.tx().nonce
    }

    pub fn gas_limit(&self) -> u64 {
        self.0.tx().gas_limit
    }

    pub fn gas_price(&self) -> u128 {
        self.0.tx().gas_price
    }

    pub fn to(&self) -> Option<Address> {
        match self.0.tx().to {
            alloy::primitives::TxKind::Call(address) => Some(address),
            alloy::primitives::TxKind::Create => None,
        }
    }

    pub fn value(&self) -> U256 {
        self.0.tx().value
    }

    pub fn input(&self) -> &Bytes {
        &self.0.tx().input
    }

    /// Recovers the sender from the chain-id-bound signature.
    pub fn recover_signer(&self) -> Result<Address, Error> {
        let signature_hash = self.0.tx().signature_hash();
        self.0
            .signature()
            .recover_address_from_prehash(&signature_hash)
            .map_err(|err| Error::Signature(err.to_string()))
    }

    /// The canonical wire encoding, as carried in an execution payload.
    pub fn encoded(&self) -> Vec<u8> {
        alloy_rlp::encode(&self.0)
    }

    /// Builds and signs a plain value transfer.
    pub fn transfer(
        signer: &PrivateKeySigner,
        chain_id: u64,
        nonce: u64,
        gas_limit: u64,
        gas_price: u128,
        to: Address,
        value: U256,
    ) -> Result<Self, Error> {
        let tx = TxLegacy {
            chain_id: Some(chain_id),
            nonce,
            gas_price,
            gas_limit,
            to: alloy::primitives::TxKind::Call(to),
            value,
            input: Bytes::new(),
        };
        let signature_hash = tx.signature_hash();
        let signature = signer
            .sign_hash_sync(&signature_hash)
            .map_err(|err| Error::Signature(err.to_string()))?;
        Ok(Self(tx.into_signed(signature)))
    }
}

// Transactions travel over the wire in their canonical RLP encoding, hex
// prefixed, the same shape every execution client accepts.
impl Serialize for Transaction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Bytes::from(self.encoded()).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Transaction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = Bytes::deserialize(deserializer)?;
        let inner = <Signed<TxLegacy> as alloy_rlp::Decodable>::decode(&mut encoded.as_ref())
            .map_err(de::Error::custom)?;
        Ok(Self(inner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_transfer(nonce: u64) -> (Transaction, Address) {
        let signer = PrivateKeySigner::random();
        let to = Address::repeat_byte(0x11);
        let tx = Transaction::transfer(&signer, 1, nonce, 21_000, 2, to, U256::from(100)).unwrap();
        (tx, signer.address())
    }

    #[test]
    fn recovers_the_signer() {
        let (tx, sender) = signed_transfer(0);
        assert_eq!(tx.recover_signer().unwrap(), sender);
    }

    #[test]
    fn round_trips_through_wire_encoding() {
        let (tx, _) = signed_transfer(7);
        let encoded = serde_json::to_string(&tx).unwrap();
        let decoded: Transaction = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, tx);
        assert_eq!(decoded.hash(), tx.hash());
        assert_eq!(decoded.nonce(), 7);
    }
}
