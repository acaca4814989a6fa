//! # Restricted Token Pallet
//!
//! A token ledger where every balance mutation is gated by three layers of
//! permission state:
//!
//! - a global **blacklist**: a blacklisted account can neither send, receive nor
//!   be minted to;
//! - a per-account opt-in **whitelist**: once enabled, outgoing transfers of that
//!   account are limited to listed counterparties, each with a spending cap that
//!   transfers draw down;
//! - per-account **blocked balances**: a frozen part of the balance that counts
//!   towards the holding but cannot be transferred out.
//!
//! Administrative calls are gated by the injected [`Config::AdminOrigin`]. The
//! pallet ships [`EnsureLedgerAdmin`] for runtimes that want the admin to be the
//! account stored in [`Admin`] and rotated through `set_admin`.

#![cfg_attr(not(feature = "std"), no_std)]
// Allow deprecated items for the `RuntimeEvent` config type and storage getters
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*, traits::EnsureOrigin};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_std::{marker::PhantomData, prelude::*};

pub use pallet::*;
pub use weights::WeightInfo;

pub mod migrations;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub(crate) const LOG_TARGET: &str = "pallet-restricted-token";

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Origin allowed to mint, manage permission state and rotate the admin.
        type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;

        /// Maximum number of items accepted by the batch whitelist calls.
        #[pallet::constant]
        type MaxBatchSize: Get<u32>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "Restricted Settlement Token")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "RST")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Total token supply
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Current ledger administrator, consulted by [`EnsureLedgerAdmin`].
    #[pallet::storage]
    #[pallet::getter(fn admin)]
    pub type Admin<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Account balances (total held, blocked part included)
    #[pallet::storage]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Part of the balance that cannot be transferred out. Never exceeds `Balances`.
    #[pallet::storage]
    pub type BlockedBalances<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Blacklisted accounts (cannot send, receive or be minted to)
    #[pallet::storage]
    pub type Blacklisted<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Accounts whose outgoing transfers are restricted to their allow-list
    #[pallet::storage]
    pub type WhitelistEnabled<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Allow-list of a sender: `(sender, counterparty) -> remaining amount`.
    ///
    /// Presence of the key is what makes the counterparty whitelisted; an entry
    /// drawn down to zero stays until it is explicitly removed.
    #[pallet::storage]
    pub type WhitelistAllowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        OptionQuery,
    >;

    /// Delegated spending approvals: `(owner, spender) -> amount`.
    #[pallet::storage]
    pub type Approvals<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens transferred from one account to another
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// New tokens minted
        Minted { to: T::AccountId, amount: u128 },
        /// Tokens burned by their holder
        Burned { from: T::AccountId, amount: u128 },
        /// Owner set the amount a spender may move on its behalf
        Approved { owner: T::AccountId, spender: T::AccountId, amount: u128 },
        /// Spender used part of its approval in a delegated transfer
        ApprovalSpent { owner: T::AccountId, spender: T::AccountId, amount: u128 },
        /// Account added to the blacklist
        Blacklisted { account: T::AccountId },
        /// Account removed from the blacklist
        RemovedFromBlacklist { account: T::AccountId },
        /// Outgoing transfers of `user` are now restricted to its allow-list
        WhitelistEnabled { user: T::AccountId },
        /// Allow-list of `user` no longer applies; its entries are kept
        WhitelistDisabled { user: T::AccountId },
        /// Counterparty added to the allow-list of `user`
        AddedToWhitelist { user: T::AccountId, counterparty: T::AccountId, amount: u128 },
        /// Counterparty removed from the allow-list of `user`
        RemovedFromWhitelist { user: T::AccountId, counterparty: T::AccountId },
        /// Part of the balance of `account` blocked
        BalanceBlocked { account: T::AccountId, amount: u128 },
        /// Part of the blocked balance of `account` released
        BalanceUnblocked { account: T::AccountId, amount: u128 },
        /// Ledger admin rotated
        AdminChanged { old_admin: Option<T::AccountId>, new_admin: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The sending account is blacklisted.
        SenderBlacklisted,
        /// The receiving account is blacklisted.
        RecipientBlacklisted,
        /// The account does not have its whitelist enabled.
        WhitelistNotEnabled,
        /// The counterparty has no usable entry in the sender's allow-list.
        NotWhitelisted,
        /// The counterparty is already in the allow-list.
        AlreadyWhitelisted,
        /// The amount exceeds what remains of the counterparty's allowance.
        InsufficientAllowance,
        /// The amount exceeds the balance that is not blocked.
        InsufficientUnblockedBalance,
        /// The amount exceeds the blocked balance.
        InsufficientBlockedBalance,
        /// The amount must be greater than zero.
        InvalidAmount,
        /// Blocking the amount would exceed the account balance.
        ExceedsAvailableBalance,
        /// The whitelist is already enabled, or already disabled.
        AlreadyInState,
        /// The amount exceeds the account balance.
        InsufficientBalance,
        /// The spender's approval does not cover the amount.
        InsufficientApproval,
        Overflow,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        fn integrity_test() {
            assert!(T::MaxBatchSize::get() > 0, "MaxBatchSize must allow at least one item");
        }

        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Move `amount` from the caller to `to`.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            let remaining_allowance = Self::ensure_can_transfer(&sender, &to, amount)?;
            Self::apply_transfer(&sender, &to, amount, remaining_allowance)?;
            Self::deposit_event(Event::Transferred { from: sender, to, amount });
            Ok(())
        }

        /// Move `amount` from `from` to `to` on the strength of an approval the
        /// caller holds from `from`. Permission checks apply to `from`.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            let remaining_allowance = Self::ensure_can_transfer(&from, &to, amount)?;
            let remaining_approval = Approvals::<T>::get(&from, &spender)
                .checked_sub(amount)
                .ok_or(Error::<T>::InsufficientApproval)?;

            Self::apply_transfer(&from, &to, amount, remaining_allowance)?;
            Self::set_approval(&from, &spender, remaining_approval);

            Self::deposit_event(Event::ApprovalSpent {
                owner: from.clone(),
                spender,
                amount,
            });
            Self::deposit_event(Event::Transferred { from, to, amount });
            Ok(())
        }

        /// Let `spender` move up to `amount` of the caller's tokens. Replaces any
        /// previous approval; zero revokes it.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(origin: OriginFor<T>, spender: T::AccountId, amount: u128) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::set_approval(&owner, &spender, amount);
            Self::deposit_event(Event::Approved { owner, spender, amount });
            Ok(())
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            ensure!(!Blacklisted::<T>::get(&to), Error::<T>::RecipientBlacklisted);
            ensure!(amount > 0, Error::<T>::InvalidAmount);

            let new_supply =
                TotalSupply::<T>::get().checked_add(amount).ok_or(Error::<T>::Overflow)?;
            let new_balance =
                Balances::<T>::get(&to).checked_add(amount).ok_or(Error::<T>::Overflow)?;

            TotalSupply::<T>::put(new_supply);
            Balances::<T>::insert(&to, new_balance);
            Self::deposit_event(Event::Minted { to, amount });
            Ok(())
        }

        /// Destroy `amount` of the caller's own tokens.
        ///
        /// Checked against the total balance, blocked part included. Burning into
        /// the blocked part shrinks the blocked balance to what is left.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let remaining = Balances::<T>::get(&who)
                .checked_sub(amount)
                .ok_or(Error::<T>::InsufficientBalance)?;
            let new_supply =
                TotalSupply::<T>::get().checked_sub(amount).ok_or(Error::<T>::Overflow)?;

            Balances::<T>::insert(&who, remaining);
            TotalSupply::<T>::put(new_supply);
            Self::deposit_event(Event::Burned { from: who.clone(), amount });

            let blocked = BlockedBalances::<T>::get(&who);
            if blocked > remaining {
                Self::set_blocked(&who, remaining);
                Self::deposit_event(Event::BalanceUnblocked {
                    account: who,
                    amount: blocked - remaining,
                });
            }
            Ok(())
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::blacklist())]
        pub fn blacklist(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            Blacklisted::<T>::insert(&account, true);
            log::debug!(target: LOG_TARGET, "blacklisted {account:?}");
            Self::deposit_event(Event::Blacklisted { account });
            Ok(())
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::remove_from_blacklist())]
        pub fn remove_from_blacklist(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            Blacklisted::<T>::remove(&account);
            log::debug!(target: LOG_TARGET, "removed {account:?} from blacklist");
            Self::deposit_event(Event::RemovedFromBlacklist { account });
            Ok(())
        }

        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::enable_whitelist())]
        pub fn enable_whitelist(origin: OriginFor<T>, user: T::AccountId) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            ensure!(!WhitelistEnabled::<T>::get(&user), Error::<T>::AlreadyInState);
            WhitelistEnabled::<T>::insert(&user, true);
            Self::deposit_event(Event::WhitelistEnabled { user });
            Ok(())
        }

        /// Lift the allow-list restriction of `user`. Entries are kept, so enabling
        /// again restores the allowances as they were.
        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::disable_whitelist())]
        pub fn disable_whitelist(origin: OriginFor<T>, user: T::AccountId) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            ensure!(WhitelistEnabled::<T>::get(&user), Error::<T>::AlreadyInState);
            WhitelistEnabled::<T>::remove(&user);
            Self::deposit_event(Event::WhitelistDisabled { user });
            Ok(())
        }

        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::add_to_whitelist())]
        pub fn add_to_whitelist(
            origin: OriginFor<T>,
            user: T::AccountId,
            counterparty: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            Self::do_add_to_whitelist(&user, counterparty, amount)
        }

        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::remove_from_whitelist())]
        pub fn remove_from_whitelist(
            origin: OriginFor<T>,
            user: T::AccountId,
            counterparty: T::AccountId,
        ) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            Self::do_remove_from_whitelist(&user, counterparty)
        }

        /// Add every `(counterparty, amount)` in order. Dispatch runs in its own
        /// storage layer, so the first failing item reverts the items before it.
        #[pallet::call_index(11)]
        #[pallet::weight(T::WeightInfo::batch_add_to_whitelist(entries.len() as u32))]
        pub fn batch_add_to_whitelist(
            origin: OriginFor<T>,
            user: T::AccountId,
            entries: BoundedVec<(T::AccountId, u128), T::MaxBatchSize>,
        ) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            for (counterparty, amount) in entries {
                Self::do_add_to_whitelist(&user, counterparty, amount)?;
            }
            Ok(())
        }

        /// Remove every counterparty in order, all or nothing.
        #[pallet::call_index(12)]
        #[pallet::weight(T::WeightInfo::batch_remove_from_whitelist(counterparties.len() as u32))]
        pub fn batch_remove_from_whitelist(
            origin: OriginFor<T>,
            user: T::AccountId,
            counterparties: BoundedVec<T::AccountId, T::MaxBatchSize>,
        ) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            for counterparty in counterparties {
                Self::do_remove_from_whitelist(&user, counterparty)?;
            }
            Ok(())
        }

        #[pallet::call_index(13)]
        #[pallet::weight(T::WeightInfo::block_balance())]
        pub fn block_balance(
            origin: OriginFor<T>,
            account: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            ensure!(amount > 0, Error::<T>::InvalidAmount);

            let blocked = BlockedBalances::<T>::get(&account)
                .checked_add(amount)
                .ok_or(Error::<T>::ExceedsAvailableBalance)?;
            ensure!(blocked <= Balances::<T>::get(&account), Error::<T>::ExceedsAvailableBalance);

            Self::set_blocked(&account, blocked);
            Self::deposit_event(Event::BalanceBlocked { account, amount });
            Ok(())
        }

        #[pallet::call_index(14)]
        #[pallet::weight(T::WeightInfo::unblock_balance())]
        pub fn unblock_balance(
            origin: OriginFor<T>,
            account: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            ensure!(amount > 0, Error::<T>::InvalidAmount);

            let blocked = BlockedBalances::<T>::get(&account);
            ensure!(amount <= blocked, Error::<T>::InsufficientBlockedBalance);
            let remaining =
                blocked.checked_sub(amount).ok_or(Error::<T>::InsufficientBlockedBalance)?;

            Self::set_blocked(&account, remaining);
            Self::deposit_event(Event::BalanceUnblocked { account, amount });
            Ok(())
        }

        /// Hand the admin role to `new_admin`.
        #[pallet::call_index(15)]
        #[pallet::weight(T::WeightInfo::set_admin())]
        pub fn set_admin(origin: OriginFor<T>, new_admin: T::AccountId) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            let old_admin = Admin::<T>::get();
            Admin::<T>::put(&new_admin);
            log::info!(target: LOG_TARGET, "ledger admin changed from {old_admin:?} to {new_admin:?}");
            Self::deposit_event(Event::AdminChanged { old_admin, new_admin });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Initial ledger admin
        pub admin: Option<T::AccountId>,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Token decimals
        pub decimals: u8,
        /// Initial token mints (account, amount)
        pub initial_balances: Vec<(T::AccountId, u128)>,
        /// Accounts blacklisted at genesis
        pub blacklisted_accounts: Vec<T::AccountId>,
        /// Accounts starting with their whitelist enabled, with their allow-lists
        pub whitelists: Vec<(T::AccountId, Vec<(T::AccountId, u128)>)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            Decimals::<T>::put(self.decimals);

            if let Some(ref admin) = self.admin {
                Admin::<T>::put(admin);
            }

            let mut total: u128 = 0;
            for (account, amount) in &self.initial_balances {
                Balances::<T>::mutate(account, |balance| {
                    *balance = balance.checked_add(*amount).expect("Genesis balance overflows u128")
                });
                total = total.checked_add(*amount).expect("Genesis total supply overflows u128");
            }
            TotalSupply::<T>::put(total);

            for account in &self.blacklisted_accounts {
                Blacklisted::<T>::insert(account, true);
            }

            for (user, entries) in &self.whitelists {
                WhitelistEnabled::<T>::insert(user, true);
                for (counterparty, amount) in entries {
                    assert!(
                        !WhitelistAllowances::<T>::contains_key(user, counterparty),
                        "Duplicate whitelist entry in genesis"
                    );
                    WhitelistAllowances::<T>::insert(user, counterparty, amount);
                }
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    pub fn balance_of(who: &T::AccountId) -> u128 {
        Balances::<T>::get(who)
    }

    pub fn blocked_balance_of(who: &T::AccountId) -> u128 {
        BlockedBalances::<T>::get(who)
    }

    /// Balance available for outgoing transfers.
    pub fn spendable_balance(who: &T::AccountId) -> u128 {
        Balances::<T>::get(who).saturating_sub(BlockedBalances::<T>::get(who))
    }

    pub fn is_blacklisted(who: &T::AccountId) -> bool {
        Blacklisted::<T>::get(who)
    }

    pub fn is_whitelist_enabled(who: &T::AccountId) -> bool {
        WhitelistEnabled::<T>::get(who)
    }

    /// Whether `counterparty` has an entry in the allow-list of `user`, whatever
    /// its remaining amount.
    pub fn is_whitelisted(user: &T::AccountId, counterparty: &T::AccountId) -> bool {
        WhitelistAllowances::<T>::contains_key(user, counterparty)
    }

    /// Remaining allowance of `counterparty` under `user`; zero when absent.
    pub fn whitelisted_amount(user: &T::AccountId, counterparty: &T::AccountId) -> u128 {
        WhitelistAllowances::<T>::get(user, counterparty).unwrap_or_default()
    }

    pub fn approval(owner: &T::AccountId, spender: &T::AccountId) -> u128 {
        Approvals::<T>::get(owner, spender)
    }

    /// Runs the transfer permission checks for a balance moving out of `from`.
    ///
    /// Returns the allowance `to` keeps once the transfer is applied, or `None`
    /// when `from` has no whitelist enabled.
    pub fn ensure_can_transfer(
        from: &T::AccountId,
        to: &T::AccountId,
        amount: u128,
    ) -> Result<Option<u128>, DispatchError> {
        ensure!(!Blacklisted::<T>::get(from), Error::<T>::SenderBlacklisted);
        ensure!(!Blacklisted::<T>::get(to), Error::<T>::RecipientBlacklisted);

        let remaining_allowance = if WhitelistEnabled::<T>::get(from) {
            let allowance = WhitelistAllowances::<T>::get(from, to)
                .filter(|allowance| *allowance > 0)
                .ok_or(Error::<T>::NotWhitelisted)?;
            Some(allowance.checked_sub(amount).ok_or(Error::<T>::InsufficientAllowance)?)
        } else {
            None
        };

        ensure!(Self::spendable_balance(from) >= amount, Error::<T>::InsufficientUnblockedBalance);
        Ok(remaining_allowance)
    }

    /// Applies a transfer already cleared by [`Self::ensure_can_transfer`].
    /// Nothing is written if the recipient balance would overflow.
    fn apply_transfer(
        from: &T::AccountId,
        to: &T::AccountId,
        amount: u128,
        remaining_allowance: Option<u128>,
    ) -> DispatchResult {
        if from != to {
            let from_balance = Balances::<T>::get(from)
                .checked_sub(amount)
                .ok_or(Error::<T>::InsufficientUnblockedBalance)?;
            let to_balance =
                Balances::<T>::get(to).checked_add(amount).ok_or(Error::<T>::Overflow)?;
            Balances::<T>::insert(from, from_balance);
            Balances::<T>::insert(to, to_balance);
        }

        if let Some(remaining) = remaining_allowance {
            WhitelistAllowances::<T>::insert(from, to, remaining);
        }
        Ok(())
    }

    fn do_add_to_whitelist(
        user: &T::AccountId,
        counterparty: T::AccountId,
        amount: u128,
    ) -> DispatchResult {
        ensure!(WhitelistEnabled::<T>::get(user), Error::<T>::WhitelistNotEnabled);
        ensure!(
            !WhitelistAllowances::<T>::contains_key(user, &counterparty),
            Error::<T>::AlreadyWhitelisted
        );

        WhitelistAllowances::<T>::insert(user, &counterparty, amount);
        Self::deposit_event(Event::AddedToWhitelist { user: user.clone(), counterparty, amount });
        Ok(())
    }

    fn do_remove_from_whitelist(user: &T::AccountId, counterparty: T::AccountId) -> DispatchResult {
        ensure!(WhitelistEnabled::<T>::get(user), Error::<T>::WhitelistNotEnabled);
        ensure!(
            WhitelistAllowances::<T>::contains_key(user, &counterparty),
            Error::<T>::NotWhitelisted
        );

        WhitelistAllowances::<T>::remove(user, &counterparty);
        Self::deposit_event(Event::RemovedFromWhitelist { user: user.clone(), counterparty });
        Ok(())
    }

    fn set_blocked(who: &T::AccountId, amount: u128) {
        if amount == 0 {
            BlockedBalances::<T>::remove(who);
        } else {
            BlockedBalances::<T>::insert(who, amount);
        }
    }

    fn set_approval(owner: &T::AccountId, spender: &T::AccountId, amount: u128) {
        if amount == 0 {
            Approvals::<T>::remove(owner, spender);
        } else {
            Approvals::<T>::insert(owner, spender, amount);
        }
    }

    /// Checks the ledger invariants: no blocked balance above its balance, and
    /// balances summing to the total supply.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), DispatchError> {
        for (who, blocked) in BlockedBalances::<T>::iter() {
            ensure!(blocked <= Balances::<T>::get(&who), "Blocked balance exceeds balance");
        }

        let mut total: u128 = 0;
        for (_, balance) in Balances::<T>::iter() {
            total = total.checked_add(balance).ok_or("Sum of balances overflows")?;
        }
        ensure!(total == TotalSupply::<T>::get(), "Sum of balances differs from total supply");
        Ok(())
    }
}

/// Admin capability backed by [`Admin`]: accepts signed origins of the account
/// currently stored there.
pub struct EnsureLedgerAdmin<T>(PhantomData<T>);

impl<T: Config> EnsureOrigin<OriginFor<T>> for EnsureLedgerAdmin<T> {
    type Success = T::AccountId;

    fn try_origin(o: OriginFor<T>) -> Result<Self::Success, OriginFor<T>> {
        let raw: Result<frame_system::RawOrigin<T::AccountId>, OriginFor<T>> = o.clone().into();
        match raw {
            Ok(frame_system::RawOrigin::Signed(who)) if Admin::<T>::get().as_ref() == Some(&who) => {
                Ok(who)
            }
            _ => Err(o),
        }
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn try_successful_origin() -> Result<OriginFor<T>, ()> {
        Admin::<T>::get().map(|who| frame_system::RawOrigin::Signed(who).into()).ok_or(())
    }
}
