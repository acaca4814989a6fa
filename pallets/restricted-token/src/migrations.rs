//! Storage migrations for pallet-restricted-token.
//!
//! Each migration is versioned, checks the on-chain storage version before doing
//! anything and runs exactly once.
//!
//! # Wiring Migrations in Runtime
//!
//! ```ignore
//! pub type Executive = frame_executive::Executive<
//!     Runtime,
//!     Block,
//!     frame_system::ChainContext<Runtime>,
//!     Runtime,
//!     AllPalletsWithSystem,
//!     pallet_restricted_token::migrations::v1::MigrateToV1<Runtime>,
//! >;
//! ```
//!
//! # Guidelines
//!
//! - **Never skip versions**: always migrate sequentially (v1 → v2 → v3)
//! - **Accurate weights**: return the weight of the DB operations performed
//! - **Logging**: use `log::info!` with the pallet target to track progress

use frame_support::{pallet_prelude::*, traits::OnRuntimeUpgrade};
use sp_std::{marker::PhantomData, vec::Vec};

use crate::{BlockedBalances, Config, Pallet, LOG_TARGET};

/// Migration to version 1.
///
/// Version 0 accepted any blocked amount. From version 1 on a blocked balance
/// never exceeds the balance it belongs to, so v0 entries above their balance are
/// clamped down to it (and dropped when the balance is zero).
pub mod v1 {
    use super::*;
    use crate::Balances;

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

            let entries: Vec<_> = BlockedBalances::<T>::iter().collect();
            let scanned = entries.len() as u64;
            let mut clamped: u64 = 0;
            for (who, blocked) in entries {
                let balance = Balances::<T>::get(&who);
                if blocked > balance {
                    clamped += 1;
                    if balance == 0 {
                        BlockedBalances::<T>::remove(&who);
                    } else {
                        BlockedBalances::<T>::insert(&who, balance);
                    }
                }
            }

            StorageVersion::new(1).put::<Pallet<T>>();

            log::info!(
                target: LOG_TARGET,
                "Migrated to v1: clamped {clamped} of {scanned} blocked balances"
            );

            // version read + (blocked, balance) per entry; version write + one per clamp
            T::DbWeight::get().reads_writes(1 + scanned * 2, 1 + clamped)
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

            for (who, blocked) in BlockedBalances::<T>::iter() {
                frame_support::ensure!(
                    blocked <= Balances::<T>::get(&who),
                    sp_runtime::TryRuntimeError::Other("Blocked balance above balance after v1")
                );
            }

            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        mock::{new_test_ext, Test},
        Balances,
    };
    use frame_support::traits::StorageVersion;

    #[test]
    fn migration_v1_clamps_oversized_blocked_balances() {
        new_test_ext().execute_with(|| {
            StorageVersion::new(0).put::<Pallet<Test>>();

            // Within balance, above balance, and with nothing held at all
            BlockedBalances::<Test>::insert(2, 400_000);
            BlockedBalances::<Test>::insert(3, 900_000);
            BlockedBalances::<Test>::insert(50, 7);

            let _weight = v1::MigrateToV1::<Test>::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 1);
            assert_eq!(BlockedBalances::<Test>::get(2), 400_000);
            assert_eq!(BlockedBalances::<Test>::get(3), Balances::<Test>::get(3));
            assert!(!BlockedBalances::<Test>::contains_key(50));
            assert_eq!(Pallet::<Test>::do_try_state(), Ok(()));
        });
    }

    /// Running again after the upgrade must not touch storage.
    #[test]
    fn migration_v1_idempotent() {
        new_test_ext().execute_with(|| {
            StorageVersion::new(1).put::<Pallet<Test>>();
            BlockedBalances::<Test>::insert(50, 7);

            let _weight = v1::MigrateToV1::<Test>::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 1);
            assert_eq!(BlockedBalances::<Test>::get(50), 7);
        });
    }

    #[test]
    fn migration_v1_skipped_on_higher_version() {
        new_test_ext().execute_with(|| {
            StorageVersion::new(5).put::<Pallet<Test>>();

            let _weight = v1::MigrateToV1::<Test>::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 5);
        });
    }

    #[test]
    fn migration_handles_unset_version() {
        new_test_ext().execute_with(|| {
            StorageVersion::new(0).put::<Pallet<Test>>();

            v1::MigrateToV1::<Test>::on_runtime_upgrade();
            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 1);

            v1::MigrateToV1::<Test>::on_runtime_upgrade();
            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 1);
        });
    }
}
