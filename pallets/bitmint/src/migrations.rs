//! Storage migrations for pallet-bitmint.
//!
//! Each migration checks the on-chain storage version first, so it runs exactly once and
//! is safe to leave wired into the runtime's `Executive` after it has been applied:
//!
//! ```ignore
//! pub type Executive = frame_executive::Executive<
//!     Runtime,
//!     Block,
//!     frame_system::ChainContext<Runtime>,
//!     Runtime,
//!     AllPalletsWithSystem,
//!     pallet_bitmint::migrations::v1::MigrateToV1<Runtime>,
//! >;
//! ```

use frame_support::{pallet_prelude::*, traits::OnRuntimeUpgrade};
use sp_std::marker::PhantomData;

use crate::{Config, Pallet, LOG_TARGET};

/// Migration to version 1.
///
/// Chains that add the pallet after genesis never run the genesis build, so the contract
/// is initialized here instead. Initialization is a no-op when the marker is already set.
pub mod v1 {
    use super::*;

    pub struct MigrateToV1<T>(PhantomData<T>);

    impl<T: Config> OnRuntimeUpgrade for MigrateToV1<T> {
        fn on_runtime_upgrade() -> Weight {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();

            if on_chain_version >= 1 {
                log::info!(
                    target: LOG_TARGET,
                    "Storage already at v{on_chain_version:?}, skipping v1 migration"
                );
                return T::DbWeight::get().reads(1);
            }

            match Pallet::<T>::ensure_initialized() {
                Ok(fresh) => {
                    log::info!(
                        target: LOG_TARGET,
                        "Migrated storage v0 → v1 (contract initialized: {fresh})"
                    );
                    StorageVersion::new(1).put::<Pallet<T>>();
                    // Version + marker reads; every slot plus the version on a fresh write
                    if fresh {
                        T::DbWeight::get().reads_writes(2, 12)
                    } else {
                        T::DbWeight::get().reads_writes(2, 1)
                    }
                }
                Err(err) => {
                    log::error!(
                        target: LOG_TARGET,
                        "v1 migration could not initialize the contract: {err:?}"
                    );
                    T::DbWeight::get().reads(2)
                }
            }
        }

        #[cfg(feature = "try-runtime")]
        fn pre_upgrade() -> Result<sp_std::vec::Vec<u8>, sp_runtime::TryRuntimeError> {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();
            log::info!(
                target: LOG_TARGET,
                "Pre-upgrade: on-chain storage version is {:?}",
                on_chain_version
            );
            Ok(on_chain_version.encode())
        }

        #[cfg(feature = "try-runtime")]
        fn post_upgrade(state: sp_std::vec::Vec<u8>) -> Result<(), sp_runtime::TryRuntimeError> {
            let pre_version: u16 = Decode::decode(&mut &state[..])
                .map_err(|_| sp_runtime::TryRuntimeError::Other("Failed to decode pre-state"))?;
            let post_version = Pallet::<T>::on_chain_storage_version();

            if pre_version < 1 {
                frame_support::ensure!(
                    post_version >= 1,
                    sp_runtime::TryRuntimeError::Other("Migration to v1 did not complete")
                );
            }
            frame_support::ensure!(
                Pallet::<T>::is_initialized().unwrap_or(false),
                sp_runtime::TryRuntimeError::Other("Contract not initialized after v1")
            );
            Ok(())
        }
    }
}
