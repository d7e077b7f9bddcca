//! Persisted contract fields.
//!
//! The host exposes a key-value store addressed by small integer slot ids. [`SCHEMA`] is
//! the single place that maps each field onto its slot id and value kind; owners live in
//! a separate keyed registry.

use codec::{Decode, Encode, MaxEncodedLen};
use frame_support::{traits::ConstU32, BoundedVec};
use scale_info::TypeInfo;
use sp_core::U256;
use sp_runtime::RuntimeDebug;
use sp_std::{collections::btree_map::BTreeMap, prelude::*};

use crate::ContractError;

/// Upper bound on a text slot, in bytes.
pub const MAX_TEXT_LEN: u32 = 256;

pub type Text = BoundedVec<u8, ConstU32<MAX_TEXT_LEN>>;

/// A persisted field. The discriminant is the slot id.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, RuntimeDebug)]
#[repr(u16)]
pub enum Slot {
    Initialized = 0,
    Name = 1,
    Symbol = 2,
    TotalSupply = 3,
    MaxSupply = 4,
    NextTokenId = 5,
    BaseUri = 6,
    Banner = 7,
    Icon = 8,
    Description = 9,
    Website = 10,
}

#[derive(Clone, Copy, PartialEq, Eq, RuntimeDebug)]
pub enum SlotKind {
    Flag,
    Text,
    Word,
}

/// Slot layout, indexed by slot id.
pub const SCHEMA: [(Slot, SlotKind); 11] = [
    (Slot::Initialized, SlotKind::Flag),
    (Slot::Name, SlotKind::Text),
    (Slot::Symbol, SlotKind::Text),
    (Slot::TotalSupply, SlotKind::Word),
    (Slot::MaxSupply, SlotKind::Word),
    (Slot::NextTokenId, SlotKind::Word),
    (Slot::BaseUri, SlotKind::Text),
    (Slot::Banner, SlotKind::Text),
    (Slot::Icon, SlotKind::Text),
    (Slot::Description, SlotKind::Text),
    (Slot::Website, SlotKind::Text),
];

impl Slot {
    pub const fn id(self) -> u16 {
        self as u16
    }

    pub const fn kind(self) -> SlotKind {
        SCHEMA[self as usize].1
    }
}

/// Typed value held in a slot.
#[derive(Clone, PartialEq, Eq, Encode, Decode, TypeInfo, MaxEncodedLen, RuntimeDebug)]
pub enum SlotValue {
    Flag(bool),
    Text(Text),
    Word(U256),
}

/// Slot-addressed storage provided by the host.
///
/// Unset slots read as the zero value of their kind. A slot holding a value of another
/// kind is reported as [`ContractError::CorruptedLedger`].
pub trait SlotStorage {
    fn read(&self, slot: Slot) -> Option<SlotValue>;

    fn write(&mut self, slot: Slot, value: SlotValue);

    fn read_flag(&self, slot: Slot) -> Result<bool, ContractError> {
        match self.read(slot) {
            None => Ok(false),
            Some(SlotValue::Flag(flag)) => Ok(flag),
            Some(_) => Err(ContractError::CorruptedLedger),
        }
    }

    fn read_text(&self, slot: Slot) -> Result<Vec<u8>, ContractError> {
        match self.read(slot) {
            None => Ok(Vec::new()),
            Some(SlotValue::Text(text)) => Ok(text.into_inner()),
            Some(_) => Err(ContractError::CorruptedLedger),
        }
    }

    fn read_word(&self, slot: Slot) -> Result<U256, ContractError> {
        match self.read(slot) {
            None => Ok(U256::zero()),
            Some(SlotValue::Word(word)) => Ok(word),
            Some(_) => Err(ContractError::CorruptedLedger),
        }
    }

    fn write_flag(&mut self, slot: Slot, flag: bool) {
        debug_assert_eq!(slot.kind(), SlotKind::Flag);
        self.write(slot, SlotValue::Flag(flag));
    }

    fn write_text(&mut self, slot: Slot, text: &[u8]) -> Result<(), ContractError> {
        debug_assert_eq!(slot.kind(), SlotKind::Text);
        let text = Text::try_from(text.to_vec()).map_err(|_| ContractError::ValueTooLong)?;
        self.write(slot, SlotValue::Text(text));
        Ok(())
    }

    fn write_word(&mut self, slot: Slot, word: U256) {
        debug_assert_eq!(slot.kind(), SlotKind::Word);
        self.write(slot, SlotValue::Word(word));
    }
}

/// Token id to owner mapping provided by the host.
pub trait OwnerRegistry<AccountId> {
    fn owner(&self, token_id: U256) -> Option<AccountId>;

    fn set_owner(&mut self, token_id: U256, owner: AccountId);

    /// Records the first owner of `token_id`. Ids are never reassigned.
    fn assign(&mut self, token_id: U256, owner: AccountId) -> Result<(), ContractError> {
        if self.owner(token_id).is_some() {
            return Err(ContractError::TokenAlreadyMinted);
        }
        self.set_owner(token_id, owner);
        Ok(())
    }
}

impl<S: SlotStorage + ?Sized> SlotStorage for &mut S {
    fn read(&self, slot: Slot) -> Option<SlotValue> {
        (**self).read(slot)
    }

    fn write(&mut self, slot: Slot, value: SlotValue) {
        (**self).write(slot, value)
    }
}

impl<AccountId, R: OwnerRegistry<AccountId> + ?Sized> OwnerRegistry<AccountId> for &mut R {
    fn owner(&self, token_id: U256) -> Option<AccountId> {
        (**self).owner(token_id)
    }

    fn set_owner(&mut self, token_id: U256, owner: AccountId) {
        (**self).set_owner(token_id, owner)
    }
}

/// In-memory store, for running a contract outside of a runtime.
#[derive(Clone, PartialEq, Eq, RuntimeDebug)]
pub struct MemoryStorage<AccountId> {
    slots: BTreeMap<u16, SlotValue>,
    owners: BTreeMap<U256, AccountId>,
}

impl<AccountId> Default for MemoryStorage<AccountId> {
    fn default() -> Self {
        Self { slots: BTreeMap::new(), owners: BTreeMap::new() }
    }
}

impl<AccountId> MemoryStorage<AccountId> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<AccountId> SlotStorage for MemoryStorage<AccountId> {
    fn read(&self, slot: Slot) -> Option<SlotValue> {
        self.slots.get(&slot.id()).cloned()
    }

    fn write(&mut self, slot: Slot, value: SlotValue) {
        self.slots.insert(slot.id(), value);
    }
}

impl<AccountId: Clone> OwnerRegistry<AccountId> for MemoryStorage<AccountId> {
    fn owner(&self, token_id: U256) -> Option<AccountId> {
        self.owners.get(&token_id).cloned()
    }

    fn set_owner(&mut self, token_id: U256, owner: AccountId) {
        self.owners.insert(token_id, owner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_is_indexed_by_slot_id() {
        for (index, (slot, _)) in SCHEMA.iter().enumerate() {
            assert_eq!(slot.id() as usize, index);
        }
    }

    #[test]
    fn unset_slots_read_as_zero_values() {
        let store = MemoryStorage::<u64>::new();

        assert_eq!(store.read_flag(Slot::Initialized), Ok(false));
        assert_eq!(store.read_text(Slot::Name), Ok(Vec::new()));
        assert_eq!(store.read_word(Slot::TotalSupply), Ok(U256::zero()));
    }

    #[test]
    fn kind_mismatch_is_reported_as_corruption() {
        let mut store = MemoryStorage::<u64>::new();
        store.write(Slot::TotalSupply, SlotValue::Flag(true));

        assert_eq!(store.read_word(Slot::TotalSupply), Err(ContractError::CorruptedLedger));
    }

    #[test]
    fn oversized_text_is_rejected() {
        let mut store = MemoryStorage::<u64>::new();
        let long = vec![b'x'; MAX_TEXT_LEN as usize + 1];

        assert_eq!(store.write_text(Slot::Description, &long), Err(ContractError::ValueTooLong));
        assert_eq!(store.read(Slot::Description), None);
    }

    #[test]
    fn owners_are_assigned_once() {
        let mut store = MemoryStorage::<u64>::new();

        assert_eq!(store.assign(U256::zero(), 7), Ok(()));
        assert_eq!(store.assign(U256::zero(), 8), Err(ContractError::TokenAlreadyMinted));
        assert_eq!(store.owner(U256::zero()), Some(7));
    }
}
