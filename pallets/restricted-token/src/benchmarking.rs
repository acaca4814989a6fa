//! Benchmarking setup for pallet-restricted-token

use super::*;

#[allow(unused)]
use crate::Pallet as RestrictedToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

const AMOUNT: u128 = 1_000_000;

/// Installs a ledger admin and returns an origin the runtime accepts as admin.
fn admin_origin<T: Config>() -> T::RuntimeOrigin {
    Admin::<T>::put(account::<T::AccountId>("admin", 0, 0));
    T::AdminOrigin::try_successful_origin().expect("Admin origin")
}

/// Gives `who` a balance with part of it blocked and an enabled whitelist
/// listing `counterparty`, so transfers walk every check.
fn restricted_holder<T: Config>(who: &T::AccountId, counterparty: &T::AccountId) {
    Balances::<T>::insert(who, 10 * AMOUNT);
    TotalSupply::<T>::put(10 * AMOUNT);
    BlockedBalances::<T>::insert(who, AMOUNT);
    WhitelistEnabled::<T>::insert(who, true);
    WhitelistAllowances::<T>::insert(who, counterparty, 10 * AMOUNT);
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        restricted_holder::<T>(&caller, &recipient);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), AMOUNT);

        assert_eq!(Balances::<T>::get(&recipient), AMOUNT);
        assert_eq!(WhitelistAllowances::<T>::get(&caller, &recipient), Some(9 * AMOUNT));
    }

    #[benchmark]
    fn transfer_from() {
        let spender: T::AccountId = whitelisted_caller();
        let owner: T::AccountId = account("owner", 0, 0);
        let recipient: T::AccountId = account("recipient", 0, 0);
        restricted_holder::<T>(&owner, &recipient);
        Approvals::<T>::insert(&owner, &spender, 2 * AMOUNT);

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), owner.clone(), recipient.clone(), AMOUNT);

        assert_eq!(Balances::<T>::get(&recipient), AMOUNT);
        assert_eq!(Approvals::<T>::get(&owner, &spender), AMOUNT);
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), AMOUNT);

        assert_eq!(Approvals::<T>::get(&caller, &spender), AMOUNT);
    }

    #[benchmark]
    fn mint() {
        let recipient: T::AccountId = account("recipient", 0, 0);
        let origin = admin_origin::<T>();

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, recipient.clone(), AMOUNT);

        assert_eq!(Balances::<T>::get(&recipient), AMOUNT);
    }

    // Burns into the blocked part so the clamp is included
    #[benchmark]
    fn burn() {
        let caller: T::AccountId = whitelisted_caller();
        Balances::<T>::insert(&caller, 10 * AMOUNT);
        TotalSupply::<T>::put(10 * AMOUNT);
        BlockedBalances::<T>::insert(&caller, 10 * AMOUNT);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), AMOUNT);

        assert_eq!(Balances::<T>::get(&caller), 9 * AMOUNT);
        assert_eq!(BlockedBalances::<T>::get(&caller), 9 * AMOUNT);
    }

    #[benchmark]
    fn blacklist() {
        let target: T::AccountId = account("target", 0, 0);
        let origin = admin_origin::<T>();

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, target.clone());

        assert!(Blacklisted::<T>::get(&target));
    }

    #[benchmark]
    fn remove_from_blacklist() {
        let target: T::AccountId = account("target", 0, 0);
        Blacklisted::<T>::insert(&target, true);
        let origin = admin_origin::<T>();

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, target.clone());

        assert!(!Blacklisted::<T>::get(&target));
    }

    #[benchmark]
    fn enable_whitelist() {
        let user: T::AccountId = account("user", 0, 0);
        let origin = admin_origin::<T>();

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, user.clone());

        assert!(WhitelistEnabled::<T>::get(&user));
    }

    #[benchmark]
    fn disable_whitelist() {
        let user: T::AccountId = account("user", 0, 0);
        WhitelistEnabled::<T>::insert(&user, true);
        let origin = admin_origin::<T>();

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, user.clone());

        assert!(!WhitelistEnabled::<T>::get(&user));
    }

    #[benchmark]
    fn add_to_whitelist() {
        let user: T::AccountId = account("user", 0, 0);
        let counterparty: T::AccountId = account("counterparty", 0, 0);
        WhitelistEnabled::<T>::insert(&user, true);
        let origin = admin_origin::<T>();

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, user.clone(), counterparty.clone(), AMOUNT);

        assert_eq!(WhitelistAllowances::<T>::get(&user, &counterparty), Some(AMOUNT));
    }

    #[benchmark]
    fn remove_from_whitelist() {
        let user: T::AccountId = account("user", 0, 0);
        let counterparty: T::AccountId = account("counterparty", 0, 0);
        WhitelistEnabled::<T>::insert(&user, true);
        WhitelistAllowances::<T>::insert(&user, &counterparty, AMOUNT);
        let origin = admin_origin::<T>();

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, user.clone(), counterparty.clone());

        assert!(!WhitelistAllowances::<T>::contains_key(&user, &counterparty));
    }

    #[benchmark]
    fn batch_add_to_whitelist(n: Linear<1, { T::MaxBatchSize::get() }>) {
        let user: T::AccountId = account("user", 0, 0);
        WhitelistEnabled::<T>::insert(&user, true);
        let entries: BoundedVec<(T::AccountId, u128), T::MaxBatchSize> = (0..n)
            .map(|i| (account("counterparty", i, 0), AMOUNT))
            .collect::<Vec<_>>()
            .try_into()
            .expect("n is within MaxBatchSize");
        let origin = admin_origin::<T>();

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, user.clone(), entries);

        assert_eq!(WhitelistAllowances::<T>::iter_prefix(&user).count() as u32, n);
    }

    #[benchmark]
    fn batch_remove_from_whitelist(n: Linear<1, { T::MaxBatchSize::get() }>) {
        let user: T::AccountId = account("user", 0, 0);
        WhitelistEnabled::<T>::insert(&user, true);
        let counterparties: Vec<T::AccountId> =
            (0..n).map(|i| account("counterparty", i, 0)).collect();
        for counterparty in &counterparties {
            WhitelistAllowances::<T>::insert(&user, counterparty, AMOUNT);
        }
        let counterparties: BoundedVec<T::AccountId, T::MaxBatchSize> =
            counterparties.try_into().expect("n is within MaxBatchSize");
        let origin = admin_origin::<T>();

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, user.clone(), counterparties);

        assert_eq!(WhitelistAllowances::<T>::iter_prefix(&user).count(), 0);
    }

    #[benchmark]
    fn block_balance() {
        let target: T::AccountId = account("target", 0, 0);
        Balances::<T>::insert(&target, 10 * AMOUNT);
        BlockedBalances::<T>::insert(&target, AMOUNT);
        let origin = admin_origin::<T>();

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, target.clone(), AMOUNT);

        assert_eq!(BlockedBalances::<T>::get(&target), 2 * AMOUNT);
    }

    #[benchmark]
    fn unblock_balance() {
        let target: T::AccountId = account("target", 0, 0);
        Balances::<T>::insert(&target, 10 * AMOUNT);
        BlockedBalances::<T>::insert(&target, 2 * AMOUNT);
        let origin = admin_origin::<T>();

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, target.clone(), AMOUNT);

        assert_eq!(BlockedBalances::<T>::get(&target), AMOUNT);
    }

    #[benchmark]
    fn set_admin() {
        let new_admin: T::AccountId = account("new_admin", 0, 0);
        let origin = admin_origin::<T>();

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, new_admin.clone());

        assert_eq!(Admin::<T>::get(), Some(new_admin));
    }

    impl_benchmark_test_suite!(RestrictedToken, crate::mock::new_test_ext(), crate::mock::Test);
}
