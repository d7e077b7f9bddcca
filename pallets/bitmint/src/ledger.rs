//! Supply ledger: name, symbol, total issued and the hard cap.
//!
//! The ledger owns no state of its own. It borrows whatever [`SlotStorage`] the host hands
//! in for the duration of a call and enforces `total_issued <= max_supply` on every write.

use sp_core::U256;
use sp_std::prelude::*;

use crate::{
    storage::{Slot, SlotStorage},
    ContractError, LOG_TARGET,
};

/// Deployment constants written on first initialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SupplyTerms<'a> {
    pub name: &'a [u8],
    pub symbol: &'a [u8],
    pub max_supply: U256,
}

pub struct SupplyLedger<S> {
    store: S,
}

impl<S: SlotStorage> SupplyLedger<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn is_initialized(&self) -> Result<bool, ContractError> {
        self.store.read_flag(Slot::Initialized)
    }

    /// Writes `terms` and resets the issued count, then sets the initialized marker.
    ///
    /// Returns `false` without touching storage if the marker is already set.
    pub fn initialize(&mut self, terms: &SupplyTerms) -> Result<bool, ContractError> {
        if self.is_initialized()? {
            return Ok(false);
        }

        self.store.write_text(Slot::Name, terms.name)?;
        self.store.write_text(Slot::Symbol, terms.symbol)?;
        self.store.write_word(Slot::MaxSupply, terms.max_supply);
        self.store.write_word(Slot::TotalSupply, U256::zero());
        self.store.write_flag(Slot::Initialized, true);
        Ok(true)
    }

    pub fn name(&self) -> Result<Vec<u8>, ContractError> {
        self.store.read_text(Slot::Name)
    }

    pub fn symbol(&self) -> Result<Vec<u8>, ContractError> {
        self.store.read_text(Slot::Symbol)
    }

    pub fn total_issued(&self) -> Result<U256, ContractError> {
        self.store.read_word(Slot::TotalSupply)
    }

    pub fn max_supply(&self) -> Result<U256, ContractError> {
        self.store.read_word(Slot::MaxSupply)
    }

    /// Units still available under the cap.
    pub fn remaining(&self) -> Result<U256, ContractError> {
        let total = self.total_issued()?;
        let max = self.max_supply()?;
        if total > max {
            log::error!(
                target: LOG_TARGET,
                "total issued {total} exceeds max supply {max}, reporting nothing remaining"
            );
        }
        Ok(max.saturating_sub(total))
    }

    /// Total issued after one more unit, without writing it.
    pub fn checked_issue(&self) -> Result<U256, ContractError> {
        let total = self.total_issued()?;
        if total >= self.max_supply()? {
            return Err(ContractError::SupplyExhausted);
        }
        total.checked_add(U256::one()).ok_or(ContractError::ArithmeticOverflow)
    }

    /// Issues one unit and returns the new total.
    pub fn issue(&mut self) -> Result<U256, ContractError> {
        let issued = self.checked_issue()?;
        self.store.write_word(Slot::TotalSupply, issued);
        Ok(issued)
    }
}
