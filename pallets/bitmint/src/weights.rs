//! Weights for pallet-bitmint.
//!
//! Hand-estimated from the storage access pattern. Regenerate from the `invoke_mint` and
//! `invoke_view` benchmarks in `benchmarking.rs` on reference hardware.
//!
//! Both calls initialize the contract if it has never been used, so each weight includes
//! the 11 slot writes of a first-call initialization. On an initialized chain those
//! writes do not happen and the weight overcharges.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

pub trait WeightInfo {
    fn invoke_mint() -> Weight;
    fn invoke_view() -> Weight;
}

/// Weights backed by the runtime's configured database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);

impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: `BitMint::Slots` (r:5 w:11), 9 of the writes only on first-call initialization
    /// Storage: `BitMint::Owners` (r:1 w:1)
    fn invoke_mint() -> Weight {
        Weight::from_parts(30_000_000, 4_100)
            .saturating_add(T::DbWeight::get().reads(6))
            .saturating_add(T::DbWeight::get().writes(12))
    }

    /// Storage: `BitMint::Slots` (r:3 w:11), the 11 writes only on first-call initialization
    /// Storage: `BitMint::Owners` (r:1 w:0)
    fn invoke_view() -> Weight {
        Weight::from_parts(15_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(11))
    }
}

impl WeightInfo for () {
    fn invoke_mint() -> Weight {
        Weight::from_parts(30_000_000, 4_100)
            .saturating_add(RocksDbWeight::get().reads(6))
            .saturating_add(RocksDbWeight::get().writes(12))
    }

    fn invoke_view() -> Weight {
        Weight::from_parts(15_000_000, 3_600)
            .saturating_add(RocksDbWeight::get().reads(4))
            .saturating_add(RocksDbWeight::get().writes(11))
    }
}
