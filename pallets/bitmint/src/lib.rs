#![cfg_attr(not(feature = "std"), no_std)]
// `Config::RuntimeEvent` is deprecated upstream; kept until the runtime stops wiring it
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

//! # BitMint pallet
//!
//! Hosts one supply-capped token contract. Calls arrive as a 4-byte method selector plus
//! opaque calldata, are routed through the contract's closed method table, and run
//! against the pallet's slot storage. A failing call returns an error and FRAME discards
//! every write it made.
//!
//! Two contracts are provided in [`deployments`]: a plain supply counter and a
//! collection that records an owner per token id.

extern crate alloc;

use core::marker::PhantomData;
use frame_support::{
    dispatch::DispatchResult,
    pallet_prelude::*,
    storage::{with_transaction, TransactionOutcome},
};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_core::U256;
use sp_std::prelude::*;

pub use pallet::*;

pub mod abi;
pub mod contract;
pub mod deployments;
pub mod dispatch;
pub mod error;
pub mod issuer;
pub mod ledger;
pub mod migrations;
pub mod storage;
pub mod weights;

pub use contract::{CallContext, Contract, Issued, Receipt};
pub use dispatch::{Method, Selector};
pub use error::ContractError;
pub use storage::{OwnerRegistry, Slot, SlotStorage, SlotValue};
pub use weights::WeightInfo;

use dispatch::has_distinct_selectors;
use ledger::SupplyLedger;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub(crate) const LOG_TARGET: &str = "pallet-bitmint";

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Contract hosted by this pallet, deployment constants included.
        type Contract: Contract<Self::AccountId>;

        /// Largest calldata accepted by `invoke`.
        #[pallet::constant]
        type MaxCalldataLen: Get<u32>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Contract fields keyed by slot id (see [`storage::SCHEMA`])
    #[pallet::storage]
    pub type Slots<T> = StorageMap<_, Twox64Concat, u16, SlotValue, OptionQuery>;

    /// Owner of each minted token id
    #[pallet::storage]
    pub type Owners<T: Config> =
        StorageMap<_, Blake2_128Concat, U256, T::AccountId, OptionQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Deployment constants written on first use
        Initialized { max_supply: U256 },
        /// One unit issued to `to`
        Minted { to: T::AccountId, token_id: Option<U256>, total_supply: U256 },
        /// A call completed
        Returned { caller: T::AccountId, selector: Selector, output: Vec<u8> },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Unknown method
        UnknownMethod,
        /// Max supply reached
        SupplyExhausted,
        /// Arithmetic overflow
        ArithmeticOverflow,
        /// Invalid calldata
        InvalidCalldata,
        /// Nonexistent token
        NonexistentToken,
        /// Token already minted
        TokenAlreadyMinted,
        /// Ledger state is corrupted
        CorruptedLedger,
        /// Value too long
        ValueTooLong,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        fn integrity_test() {
            assert!(
                has_distinct_selectors(<T::Contract as Contract<T::AccountId>>::METHODS),
                "contract method selectors collide"
            );
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Runs the contract method identified by `selector` with the signer as caller.
        #[pallet::call_index(0)]
        #[pallet::weight(Pallet::<T>::invoke_weight(selector))]
        pub fn invoke(
            origin: OriginFor<T>,
            selector: Selector,
            calldata: BoundedVec<u8, T::MaxCalldataLen>,
        ) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            let receipt = Self::execute(caller.clone(), &selector, &calldata)?;

            if let Some(issued) = receipt.issued {
                Self::deposit_event(Event::Minted {
                    to: caller.clone(),
                    token_id: issued.token_id,
                    total_supply: issued.total_supply,
                });
            }
            Self::deposit_event(Event::Returned { caller, selector, output: receipt.output });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Accounts minted to, in order, right after initialization
        pub premint: Vec<T::AccountId>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            Pallet::<T>::ensure_initialized().expect("Deployment constants fit their slots");

            for account in &self.premint {
                <T::Contract as Contract<T::AccountId>>::execute(
                    PalletStorage::<T>::default(),
                    CallContext { caller: account.clone() },
                    Method::Mint,
                    &[],
                )
                .expect("Premint list exceeds max supply");
            }
        }
    }
}

impl<T> From<ContractError> for Error<T> {
    fn from(err: ContractError) -> Self {
        match err {
            ContractError::UnknownMethod => Error::UnknownMethod,
            ContractError::SupplyExhausted => Error::SupplyExhausted,
            ContractError::ArithmeticOverflow => Error::ArithmeticOverflow,
            ContractError::InvalidCalldata => Error::InvalidCalldata,
            ContractError::NonexistentToken => Error::NonexistentToken,
            ContractError::TokenAlreadyMinted => Error::TokenAlreadyMinted,
            ContractError::CorruptedLedger => Error::CorruptedLedger,
            ContractError::ValueTooLong => Error::ValueTooLong,
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Mint-priced unless the selector resolves to a read-only method.
    pub fn invoke_weight(selector: &Selector) -> Weight {
        match Method::resolve(<T::Contract as Contract<T::AccountId>>::METHODS, selector) {
            Ok(method) if !method.is_mutating() => T::WeightInfo::invoke_view(),
            _ => T::WeightInfo::invoke_mint(),
        }
    }

    /// Writes the deployment constants if this is the contract's first use.
    pub fn ensure_initialized() -> Result<bool, Error<T>> {
        let fresh =
            <T::Contract as Contract<T::AccountId>>::initialize(PalletStorage::<T>::default())?;
        if fresh {
            let max_supply = <T::Contract as Contract<T::AccountId>>::max_supply();
            log::info!(target: LOG_TARGET, "contract initialized, max supply {max_supply}");
            Self::deposit_event(Event::Initialized { max_supply });
        }
        Ok(fresh)
    }

    /// Initializes if needed, then dispatches the call.
    ///
    /// Writes are not rolled back here; callers run inside a dispatchable or a
    /// storage transaction.
    pub fn execute(
        caller: T::AccountId,
        selector: &Selector,
        calldata: &[u8],
    ) -> Result<Receipt, Error<T>> {
        Self::ensure_initialized()?;

        log::debug!(target: LOG_TARGET, "dispatching {selector:02x?} from {caller:?}");
        <T::Contract as Contract<T::AccountId>>::call_method(
            PalletStorage::<T>::default(),
            CallContext { caller },
            selector,
            calldata,
        )
        .map_err(|err| {
            log::warn!(target: LOG_TARGET, "call {selector:02x?} aborted: {err}");
            err.into()
        })
    }

    /// Runs a call and discards all of its writes, returning only the output.
    pub fn query(
        caller: T::AccountId,
        selector: &Selector,
        calldata: &[u8],
    ) -> Result<Vec<u8>, DispatchError> {
        with_transaction(|| {
            let output = Self::execute(caller, selector, calldata)
                .map(|receipt| receipt.output)
                .map_err(DispatchError::from);
            TransactionOutcome::Rollback(output)
        })
    }

    fn ledger() -> SupplyLedger<PalletStorage<T>> {
        SupplyLedger::new(PalletStorage::default())
    }

    pub fn is_initialized() -> Result<bool, Error<T>> {
        Ok(Self::ledger().is_initialized()?)
    }

    pub fn token_name() -> Result<Vec<u8>, Error<T>> {
        Ok(Self::ledger().name()?)
    }

    pub fn token_symbol() -> Result<Vec<u8>, Error<T>> {
        Ok(Self::ledger().symbol()?)
    }

    pub fn total_supply() -> Result<U256, Error<T>> {
        Ok(Self::ledger().total_issued()?)
    }

    pub fn max_supply() -> Result<U256, Error<T>> {
        Ok(Self::ledger().max_supply()?)
    }

    pub fn remaining() -> Result<U256, Error<T>> {
        Ok(Self::ledger().remaining()?)
    }

    pub fn next_token_id() -> Result<U256, Error<T>> {
        Ok(PalletStorage::<T>::default().read_word(Slot::NextTokenId)?)
    }

    pub fn owner_of(token_id: U256) -> Option<T::AccountId> {
        Owners::<T>::get(token_id)
    }
}

/// Slot and owner storage backed by this pallet's storage maps.
#[derive(frame_support::DefaultNoBound)]
pub struct PalletStorage<T>(PhantomData<T>);

impl<T: Config> SlotStorage for PalletStorage<T> {
    fn read(&self, slot: Slot) -> Option<SlotValue> {
        Slots::<T>::get(slot.id())
    }

    fn write(&mut self, slot: Slot, value: SlotValue) {
        Slots::<T>::insert(slot.id(), value);
    }
}

impl<T: Config> OwnerRegistry<T::AccountId> for PalletStorage<T> {
    fn owner(&self, token_id: U256) -> Option<T::AccountId> {
        Owners::<T>::get(token_id)
    }

    fn set_owner(&mut self, token_id: U256, owner: T::AccountId) {
        Owners::<T>::insert(token_id, owner);
    }
}
