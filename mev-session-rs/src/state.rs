use crate::error::EngineError;
use alloy::primitives::{Address, U256};
use std::{collections::HashMap, sync::Arc};

/// Read access to the committed state a block is being built on, as exposed
/// by the chain collaborator.
pub trait StateReader: Send + Sync {
    fn balance(&self, address: &Address) -> U256;
    fn nonce(&self, address: &Address) -> u64;
    fn storage(&self, address: &Address, slot: U256) -> U256;
}

#[derive(Debug, Clone, Default)]
struct AccountOverride {
    balance: U256,
    nonce: u64,
}

/// The mutable state view of a block under construction: an overlay of
/// account changes over a shared, immutable parent view.
///
/// Cloning is the snapshot operation. The parent is shared by reference and
/// never written, so clones are cheap and mutations on one clone are
/// invisible to every other.
#[derive(Clone)]
pub struct PendingState {
    parent: Arc<dyn StateReader>,
    accounts: HashMap<Address, AccountOverride>,
    storage: HashMap<(Address, U256), U256>,
}

impl std::fmt::Debug for PendingState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingState")
            .field("accounts", &self.accounts)
            .field("storage", &self.storage.len())
            .finish()
    }
}

impl PendingState {
    pub fn new(parent: Arc<dyn StateReader>) -> Self {
        Self { parent, accounts: Default::default(), storage: Default::default() }
    }

    pub fn balance(&self, address: &Address) -> U256 {
        match self.accounts.get(address) {
            Some(account) => account.balance,
            None => self.parent.balance(address),
        }
    }

    pub fn nonce(&self, address: &Address) -> u64 {
        match self.accounts.get(address) {
            Some(account) => account.nonce,
            None => self.parent.nonce(address),
        }
    }

    pub fn storage(&self, address: &Address, slot: U256) -> U256 {
        match self.storage.get(&(*address, slot)) {
            Some(value) => *value,
            None => self.parent.storage(address, slot),
        }
    }

    pub fn set_storage(&mut self, address: Address, slot: U256, value: U256) {
        self.storage.insert((address, slot), value);
    }

    pub fn credit(&mut self, address: Address, amount: U256) {
        let account = self.entry(address);
        account.balance = account.balance.saturating_add(amount);
    }

    pub fn debit(&mut self, address: Address, amount: U256) -> Result<(), EngineError> {
        let account = self.entry(address);
        account.balance =
            account.balance.checked_sub(amount).ok_or(EngineError::InsufficientFunds)?;
        Ok(())
    }

    pub fn bump_nonce(&mut self, address: Address) {
        let account = self.entry(address);
        account.nonce += 1;
    }

    fn entry(&mut self, address: Address) -> &mut AccountOverride {
        let parent = &self.parent;
        self.accounts.entry(address).or_insert_with(|| AccountOverride {
            balance: parent.balance(&address),
            nonce: parent.nonce(&address),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedState(U256);

    impl StateReader for FixedState {
        fn balance(&self, _address: &Address) -> U256 {
            self.0
        }

        fn nonce(&self, _address: &Address) -> u64 {
            3
        }

        fn storage(&self, _address: &Address, _slot: U256) -> U256 {
            U256::ZERO
        }
    }

    #[test]
    fn falls_back_to_the_parent_view() {
        let state = PendingState::new(Arc::new(FixedState(U256::from(1000))));
        let address = Address::repeat_byte(0x01);
        assert_eq!(state.balance(&address), U256::from(1000));
        assert_eq!(state.nonce(&address), 3);
    }

    #[test]
    fn debit_fails_without_funds() {
        let mut state = PendingState::new(Arc::new(FixedState(U256::from(10))));
        let address = Address::repeat_byte(0x01);
        assert_eq!(state.debit(address, U256::from(11)), Err(EngineError::InsufficientFunds));
        assert_eq!(state.balance(&address), U256::from(10));
        state.debit(address, U256::from(4)).unwrap();
        assert_eq!(state.balance(&address), U256::from(6));
    }

    #[test]
    fn clones_are_isolated() {
        let mut state = PendingState::new(Arc::new(FixedState(U256::from(100))));
        let address = Address::repeat_byte(0x01);
        let mut snapshot = state.clone();

        snapshot.credit(address, U256::from(50));
        snapshot.bump_nonce(address);
        assert_eq!(state.balance(&address), U256::from(100));
        assert_eq!(state.nonce(&address), 3);

        state.debit(address, U256::from(30)).unwrap();
        assert_eq!(snapshot.balance(&address), U256::from(150));
        assert_eq!(state.balance(&address), U256::from(70));
    }
}
