//! Benchmarking setup for pallet-bitmint

use super::*;

#[allow(unused)]
use crate::Pallet as BitMint;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn invoke_mint() {
        let caller: T::AccountId = whitelisted_caller();
        Pallet::<T>::ensure_initialized().expect("Deployment constants fit their slots");
        let before = Pallet::<T>::total_supply().expect("Initialized ledger");

        #[extrinsic_call]
        invoke(RawOrigin::Signed(caller), Method::Mint.selector(), BoundedVec::default());

        assert_eq!(Pallet::<T>::total_supply().ok(), Some(before + U256::one()));
    }

    #[benchmark]
    fn invoke_view() {
        let caller: T::AccountId = whitelisted_caller();
        Pallet::<T>::ensure_initialized().expect("Deployment constants fit their slots");
        let before = Pallet::<T>::total_supply().expect("Initialized ledger");

        #[extrinsic_call]
        invoke(RawOrigin::Signed(caller), Method::TotalSupply.selector(), BoundedVec::default());

        assert_eq!(Pallet::<T>::total_supply().ok(), Some(before));
    }

    impl_benchmark_test_suite!(
        BitMint,
        crate::mock::collection::new_test_ext(),
        crate::mock::collection::Test
    );
}
