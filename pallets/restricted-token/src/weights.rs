//! Weights for pallet-restricted-token.
//!
//! Hand-estimated from the storage accesses of each call until the numbers are
//! regenerated from `benchmarking.rs` on reference hardware:
//!
//! ```text
//! ./target/release/node benchmark pallet \
//!     --pallet pallet_restricted_token --extrinsic '*' \
//!     --output pallets/restricted-token/src/weights.rs
//! ```

#![allow(unused_parens)]
#![allow(unused_imports)]

use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};
use sp_std::marker::PhantomData;

pub trait WeightInfo {
    fn transfer() -> Weight;
    fn transfer_from() -> Weight;
    fn approve() -> Weight;
    fn mint() -> Weight;
    fn burn() -> Weight;
    fn blacklist() -> Weight;
    fn remove_from_blacklist() -> Weight;
    fn enable_whitelist() -> Weight;
    fn disable_whitelist() -> Weight;
    fn add_to_whitelist() -> Weight;
    fn remove_from_whitelist() -> Weight;
    fn batch_add_to_whitelist(n: u32) -> Weight;
    fn batch_remove_from_whitelist(n: u32) -> Weight;
    fn block_balance() -> Weight;
    fn unblock_balance() -> Weight;
    fn set_admin() -> Weight;
}

/// Weights using the runtime's configured database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);

impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    // Reads: Blacklisted x2, WhitelistEnabled, WhitelistAllowances, Balances x2, BlockedBalances
    // Writes: WhitelistAllowances, Balances x2
    fn transfer() -> Weight {
        Weight::from_parts(32_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(7))
            .saturating_add(T::DbWeight::get().writes(3))
    }
    // transfer + Approvals read/write
    fn transfer_from() -> Weight {
        Weight::from_parts(38_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(8))
            .saturating_add(T::DbWeight::get().writes(4))
    }
    fn approve() -> Weight {
        Weight::from_parts(14_000_000, 0).saturating_add(T::DbWeight::get().writes(1))
    }
    // Reads: Blacklisted, TotalSupply, Balances. Writes: TotalSupply, Balances
    fn mint() -> Weight {
        Weight::from_parts(20_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    // Reads: Balances, TotalSupply, BlockedBalances. Writes: Balances, TotalSupply, BlockedBalances
    fn burn() -> Weight {
        Weight::from_parts(22_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(3))
    }
    fn blacklist() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(T::DbWeight::get().writes(1))
    }
    fn remove_from_blacklist() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(T::DbWeight::get().writes(1))
    }
    fn enable_whitelist() -> Weight {
        Weight::from_parts(14_000_000, 3_500)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn disable_whitelist() -> Weight {
        Weight::from_parts(14_000_000, 3_500)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn add_to_whitelist() -> Weight {
        Weight::from_parts(17_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn remove_from_whitelist() -> Weight {
        Weight::from_parts(17_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn batch_add_to_whitelist(n: u32) -> Weight {
        Weight::from_parts(9_000_000, 3_500)
            .saturating_add(Weight::from_parts(10_000_000, 2_600).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().reads((2_u64).saturating_mul(n.into())))
            .saturating_add(T::DbWeight::get().writes((1_u64).saturating_mul(n.into())))
    }
    fn batch_remove_from_whitelist(n: u32) -> Weight {
        Weight::from_parts(9_000_000, 3_500)
            .saturating_add(Weight::from_parts(10_000_000, 2_600).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().reads((2_u64).saturating_mul(n.into())))
            .saturating_add(T::DbWeight::get().writes((1_u64).saturating_mul(n.into())))
    }
    fn block_balance() -> Weight {
        Weight::from_parts(16_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn unblock_balance() -> Weight {
        Weight::from_parts(15_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn set_admin() -> Weight {
        Weight::from_parts(11_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
}

// For backwards compatibility and tests
impl WeightInfo for () {
    fn transfer() -> Weight {
        Weight::from_parts(32_000_000, 3_600)
            .saturating_add(RocksDbWeight::get().reads(7))
            .saturating_add(RocksDbWeight::get().writes(3))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(38_000_000, 3_600)
            .saturating_add(RocksDbWeight::get().reads(8))
            .saturating_add(RocksDbWeight::get().writes(4))
    }
    fn approve() -> Weight {
        Weight::from_parts(14_000_000, 0).saturating_add(RocksDbWeight::get().writes(1))
    }
    fn mint() -> Weight {
        Weight::from_parts(20_000_000, 3_600)
            .saturating_add(RocksDbWeight::get().reads(3))
            .saturating_add(RocksDbWeight::get().writes(2))
    }
    fn burn() -> Weight {
        Weight::from_parts(22_000_000, 3_600)
            .saturating_add(RocksDbWeight::get().reads(3))
            .saturating_add(RocksDbWeight::get().writes(3))
    }
    fn blacklist() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(RocksDbWeight::get().writes(1))
    }
    fn remove_from_blacklist() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(RocksDbWeight::get().writes(1))
    }
    fn enable_whitelist() -> Weight {
        Weight::from_parts(14_000_000, 3_500)
            .saturating_add(RocksDbWeight::get().reads(1))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn disable_whitelist() -> Weight {
        Weight::from_parts(14_000_000, 3_500)
            .saturating_add(RocksDbWeight::get().reads(1))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn add_to_whitelist() -> Weight {
        Weight::from_parts(17_000_000, 3_600)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn remove_from_whitelist() -> Weight {
        Weight::from_parts(17_000_000, 3_600)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn batch_add_to_whitelist(n: u32) -> Weight {
        Weight::from_parts(9_000_000, 3_500)
            .saturating_add(Weight::from_parts(10_000_000, 2_600).saturating_mul(n.into()))
            .saturating_add(RocksDbWeight::get().reads(1))
            .saturating_add(RocksDbWeight::get().reads((2_u64).saturating_mul(n.into())))
            .saturating_add(RocksDbWeight::get().writes((1_u64).saturating_mul(n.into())))
    }
    fn batch_remove_from_whitelist(n: u32) -> Weight {
        Weight::from_parts(9_000_000, 3_500)
            .saturating_add(Weight::from_parts(10_000_000, 2_600).saturating_mul(n.into()))
            .saturating_add(RocksDbWeight::get().reads(1))
            .saturating_add(RocksDbWeight::get().reads((2_u64).saturating_mul(n.into())))
            .saturating_add(RocksDbWeight::get().writes((1_u64).saturating_mul(n.into())))
    }
    fn block_balance() -> Weight {
        Weight::from_parts(16_000_000, 3_600)
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn unblock_balance() -> Weight {
        Weight::from_parts(15_000_000, 3_600)
            .saturating_add(RocksDbWeight::get().reads(1))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
    fn set_admin() -> Weight {
        Weight::from_parts(11_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads(1))
            .saturating_add(RocksDbWeight::get().writes(1))
    }
}
