//! Capped, sequential token issuer.
//!
//! Wraps a [`SupplyLedger`] and adds per-token ownership: every mint assigns the next
//! token id to the recipient. Ids start at zero and are never reused, so `next_token_id`
//! always equals the ledger's total issued.

use alloc::string::ToString;
use core::marker::PhantomData;
use sp_core::U256;
use sp_std::prelude::*;

use crate::{
    ledger::{SupplyLedger, SupplyTerms},
    storage::{OwnerRegistry, Slot, SlotStorage},
    ContractError, LOG_TARGET,
};

/// Collection-level metadata stored next to the supply terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollectionMetadata<'a> {
    pub base_uri: &'a [u8],
    pub banner: &'a [u8],
    pub icon: &'a [u8],
    pub description: &'a [u8],
    pub website: &'a [u8],
}

pub struct CappedIssuer<S, AccountId> {
    ledger: SupplyLedger<S>,
    _owner: PhantomData<AccountId>,
}

impl<S, AccountId> CappedIssuer<S, AccountId>
where
    S: SlotStorage + OwnerRegistry<AccountId>,
{
    pub fn new(store: S) -> Self {
        Self { ledger: SupplyLedger::new(store), _owner: PhantomData }
    }

    pub fn ledger(&self) -> &SupplyLedger<S> {
        &self.ledger
    }

    /// Writes metadata and the id counter, then hands over to the ledger, which sets the
    /// initialized marker last. No-op when already initialized.
    pub fn initialize(
        &mut self,
        terms: &SupplyTerms,
        metadata: &CollectionMetadata,
    ) -> Result<bool, ContractError> {
        if self.ledger.is_initialized()? {
            return Ok(false);
        }

        let store = self.ledger.store_mut();
        store.write_word(Slot::NextTokenId, U256::zero());
        store.write_text(Slot::BaseUri, metadata.base_uri)?;
        store.write_text(Slot::Banner, metadata.banner)?;
        store.write_text(Slot::Icon, metadata.icon)?;
        store.write_text(Slot::Description, metadata.description)?;
        store.write_text(Slot::Website, metadata.website)?;
        self.ledger.initialize(terms)
    }

    pub fn next_token_id(&self) -> Result<U256, ContractError> {
        self.ledger.store().read_word(Slot::NextTokenId)
    }

    pub fn remaining(&self) -> Result<U256, ContractError> {
        self.ledger.remaining()
    }

    /// Assigns the next token id to `to` and returns it.
    ///
    /// All checks run before the first write, so a rejected mint leaves storage as it was.
    pub fn mint(&mut self, to: AccountId) -> Result<U256, ContractError> {
        let issued = self.ledger.checked_issue()?;
        let token_id = self.next_token_id()?;
        let next = token_id.checked_add(U256::one()).ok_or(ContractError::ArithmeticOverflow)?;
        if next != issued {
            log::error!(
                target: LOG_TARGET,
                "next token id {token_id} out of step with total issued {}",
                issued - U256::one()
            );
            return Err(ContractError::CorruptedLedger);
        }

        self.ledger.store_mut().assign(token_id, to)?;
        self.ledger.issue()?;
        self.ledger.store_mut().write_word(Slot::NextTokenId, next);
        Ok(token_id)
    }

    pub fn owner_of(&self, token_id: U256) -> Result<AccountId, ContractError> {
        self.ledger.store().owner(token_id).ok_or(ContractError::NonexistentToken)
    }

    /// Base URI followed by the decimal token id.
    pub fn token_uri(&self, token_id: U256) -> Result<Vec<u8>, ContractError> {
        self.owner_of(token_id)?;
        let mut uri = self.base_uri()?;
        uri.extend_from_slice(token_id.to_string().as_bytes());
        Ok(uri)
    }

    pub fn base_uri(&self) -> Result<Vec<u8>, ContractError> {
        self.ledger.store().read_text(Slot::BaseUri)
    }

    pub fn banner(&self) -> Result<Vec<u8>, ContractError> {
        self.ledger.store().read_text(Slot::Banner)
    }

    pub fn icon(&self) -> Result<Vec<u8>, ContractError> {
        self.ledger.store().read_text(Slot::Icon)
    }

    pub fn description(&self) -> Result<Vec<u8>, ContractError> {
        self.ledger.store().read_text(Slot::Description)
    }

    pub fn website(&self) -> Result<Vec<u8>, ContractError> {
        self.ledger.store().read_text(Slot::Website)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use proptest::prelude::*;

    const TERMS: SupplyTerms<'static> =
        SupplyTerms { name: b"Test Drop", symbol: b"TD", max_supply: U256([5, 0, 0, 0]) };

    const METADATA: CollectionMetadata<'static> = CollectionMetadata {
        base_uri: b"ipfs://drop/",
        banner: b"ipfs://drop/banner.png",
        icon: b"ipfs://drop/icon.png",
        description: b"A test drop",
        website: b"https://drop.test",
    };

    fn issuer() -> CappedIssuer<MemoryStorage<u64>, u64> {
        let mut issuer = CappedIssuer::new(MemoryStorage::new());
        assert_eq!(issuer.initialize(&TERMS, &METADATA), Ok(true));
        issuer
    }

    #[test]
    fn initialize_writes_metadata_and_counter() {
        let issuer = issuer();

        assert_eq!(issuer.next_token_id(), Ok(U256::zero()));
        assert_eq!(issuer.remaining(), Ok(U256::from(5u64)));
        assert_eq!(issuer.base_uri().unwrap(), b"ipfs://drop/".to_vec());
        assert_eq!(issuer.banner().unwrap(), b"ipfs://drop/banner.png".to_vec());
        assert_eq!(issuer.icon().unwrap(), b"ipfs://drop/icon.png".to_vec());
        assert_eq!(issuer.description().unwrap(), b"A test drop".to_vec());
        assert_eq!(issuer.website().unwrap(), b"https://drop.test".to_vec());
    }

    #[test]
    fn reinitialize_keeps_existing_state() {
        let mut issuer = issuer();
        issuer.mint(1).unwrap();
        let before = issuer.ledger().store().clone();

        assert_eq!(issuer.initialize(&TERMS, &METADATA), Ok(false));
        assert_eq!(issuer.ledger().store(), &before);
    }

    #[test]
    fn mint_assigns_sequential_ids() {
        let mut issuer = issuer();

        assert_eq!(issuer.mint(10), Ok(U256::zero()));
        assert_eq!(issuer.mint(20), Ok(U256::one()));
        assert_eq!(issuer.owner_of(U256::zero()), Ok(10));
        assert_eq!(issuer.owner_of(U256::one()), Ok(20));
        assert_eq!(issuer.next_token_id(), Ok(U256::from(2u64)));
        assert_eq!(issuer.ledger().total_issued(), Ok(U256::from(2u64)));
        assert_eq!(issuer.remaining(), Ok(U256::from(3u64)));
    }

    #[test]
    fn mint_past_cap_leaves_storage_untouched() {
        let mut issuer = issuer();
        for _ in 0..5 {
            issuer.mint(1).unwrap();
        }
        let before = issuer.ledger().store().clone();

        assert_eq!(issuer.mint(2), Err(ContractError::SupplyExhausted));
        assert_eq!(issuer.ledger().store(), &before);
    }

    #[test]
    fn out_of_step_counter_is_rejected() {
        let mut issuer = issuer();
        issuer.ledger.store_mut().write_word(Slot::NextTokenId, U256::from(3u64));
        let before = issuer.ledger().store().clone();

        assert_eq!(issuer.mint(1), Err(ContractError::CorruptedLedger));
        assert_eq!(issuer.ledger().store(), &before);
    }

    #[test]
    fn counter_overflow_aborts_without_writes() {
        let mut issuer = issuer();
        issuer.ledger.store_mut().write_word(Slot::NextTokenId, U256::MAX);
        let before = issuer.ledger().store().clone();

        assert_eq!(issuer.mint(1), Err(ContractError::ArithmeticOverflow));
        assert_eq!(issuer.ledger().store(), &before);
    }

    #[test]
    fn already_owned_id_is_not_reassigned() {
        let mut issuer = issuer();
        issuer.ledger.store_mut().set_owner(U256::zero(), 99);

        assert_eq!(issuer.mint(1), Err(ContractError::TokenAlreadyMinted));
        assert_eq!(issuer.owner_of(U256::zero()), Ok(99));
        assert_eq!(issuer.ledger().total_issued(), Ok(U256::zero()));
    }

    #[test]
    fn token_uri_appends_decimal_id() {
        let mut issuer = issuer();
        for _ in 0..5 {
            issuer.mint(3).unwrap();
        }

        assert_eq!(issuer.token_uri(U256::from(4u64)).unwrap(), b"ipfs://drop/4".to_vec());
        assert_eq!(issuer.token_uri(U256::from(5u64)), Err(ContractError::NonexistentToken));
    }

    #[derive(Clone, Debug)]
    enum Step {
        Mint(u64),
        Remaining,
        OwnerOf(u64),
    }

    fn step() -> impl Strategy<Value = Step> {
        prop_oneof![
            (1u64..4).prop_map(Step::Mint),
            Just(Step::Remaining),
            (0u64..8).prop_map(Step::OwnerOf),
        ]
    }

    proptest! {
        #[test]
        fn reachable_states_keep_supply_invariants(steps in prop::collection::vec(step(), 0..24)) {
            let mut issuer = issuer();
            let mut minted: Vec<u64> = Vec::new();
            let mut last_remaining = issuer.remaining().unwrap();

            for step in steps {
                let before = issuer.ledger().store().clone();
                match step {
                    Step::Mint(to) => match issuer.mint(to) {
                        Ok(id) => {
                            prop_assert_eq!(id, U256::from(minted.len() as u64));
                            minted.push(to);
                        }
                        Err(err) => {
                            prop_assert_eq!(err, ContractError::SupplyExhausted);
                            prop_assert_eq!(issuer.ledger().store(), &before);
                        }
                    },
                    Step::Remaining => {
                        issuer.remaining().unwrap();
                        prop_assert_eq!(issuer.ledger().store(), &before);
                    }
                    Step::OwnerOf(id) => {
                        let _ = issuer.owner_of(U256::from(id));
                        prop_assert_eq!(issuer.ledger().store(), &before);
                    }
                }

                let total = issuer.ledger().total_issued().unwrap();
                let remaining = issuer.remaining().unwrap();
                prop_assert!(total <= issuer.ledger().max_supply().unwrap());
                prop_assert_eq!(issuer.next_token_id().unwrap(), total);
                prop_assert!(remaining <= last_remaining);
                last_remaining = remaining;

                for (id, owner) in minted.iter().enumerate() {
                    prop_assert_eq!(issuer.owner_of(U256::from(id as u64)), Ok(*owner));
                }
            }
        }
    }
}
