//! Mock runtimes, one per shipped contract.

use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU32, ConstU64},
};
use sp_core::H256;
use sp_runtime::traits::{BlakeTwo256, IdentityLookup};

parameter_types! {
    pub const MaxCalldataLen: u32 = 256;
}

macro_rules! system_config {
    ($runtime:ident) => {
        #[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
        impl frame_system::Config for $runtime {
            type BaseCallFilter = frame_support::traits::Everything;
            type BlockWeights = ();
            type BlockLength = ();
            type DbWeight = ();
            type RuntimeOrigin = RuntimeOrigin;
            type RuntimeCall = RuntimeCall;
            type Nonce = u64;
            type Hash = H256;
            type Hashing = BlakeTwo256;
            type AccountId = u64;
            type Lookup = IdentityLookup<Self::AccountId>;
            type Block = Block;
            type RuntimeEvent = RuntimeEvent;
            type BlockHashCount = ConstU64<250>;
            type Version = ();
            type PalletInfo = PalletInfo;
            type AccountData = ();
            type OnNewAccount = ();
            type OnKilledAccount = ();
            type SystemWeightInfo = ();
            type SS58Prefix = ();
            type OnSetCode = ();
            type MaxConsumers = ConstU32<16>;
        }
    };
}

/// Runtime hosting the plain supply counter.
pub mod counter {
    use super::*;
    use crate as pallet_bitmint;
    use sp_runtime::BuildStorage;

    type Block = frame_system::mocking::MockBlock<Test>;

    frame_support::construct_runtime!(
        pub enum Test {
            System: frame_system,
            BitMint: pallet_bitmint,
        }
    );

    system_config!(Test);

    impl pallet_bitmint::Config for Test {
        type RuntimeEvent = RuntimeEvent;
        type Contract = pallet_bitmint::deployments::BitMintCounter;
        type MaxCalldataLen = MaxCalldataLen;
        type WeightInfo = ();
    }

    pub fn new_test_ext() -> sp_io::TestExternalities {
        new_test_ext_with_premint(vec![])
    }

    pub fn new_test_ext_with_premint(premint: Vec<u64>) -> sp_io::TestExternalities {
        let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

        pallet_bitmint::GenesisConfig::<Test> { premint }.assimilate_storage(&mut t).unwrap();

        let mut ext = sp_io::TestExternalities::new(t);
        ext.execute_with(|| System::set_block_number(1));
        ext
    }
}

/// Runtime hosting the owned-token collection.
pub mod collection {
    use super::*;
    use crate as pallet_bitmint;
    use sp_runtime::BuildStorage;

    type Block = frame_system::mocking::MockBlock<Test>;

    frame_support::construct_runtime!(
        pub enum Test {
            System: frame_system,
            BitMint: pallet_bitmint,
        }
    );

    system_config!(Test);

    impl pallet_bitmint::Config for Test {
        type RuntimeEvent = RuntimeEvent;
        type Contract = pallet_bitmint::deployments::BitMintCollection;
        type MaxCalldataLen = MaxCalldataLen;
        type WeightInfo = ();
    }

    pub fn new_test_ext() -> sp_io::TestExternalities {
        new_test_ext_with_premint(vec![])
    }

    pub fn new_test_ext_with_premint(premint: Vec<u64>) -> sp_io::TestExternalities {
        let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

        pallet_bitmint::GenesisConfig::<Test> { premint }.assimilate_storage(&mut t).unwrap();

        let mut ext = sp_io::TestExternalities::new(t);
        ext.execute_with(|| System::set_block_number(1));
        ext
    }
}
