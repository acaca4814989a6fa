use crate as pallet_restricted_token;
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU32, ConstU64},
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        RestrictedToken: pallet_restricted_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
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

parameter_types! {
    pub const AdminAccount: u64 = 1;
}

/// Largest batch accepted by the whitelist batch calls in tests.
pub const MAX_BATCH: u32 = 4;

impl pallet_restricted_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type AdminOrigin = pallet_restricted_token::EnsureLedgerAdmin<Test>;
    type MaxBatchSize = ConstU32<MAX_BATCH>;
    type WeightInfo = ();
}

// Accounts used by the genesis below:
// - 1: admin
// - 2: holder of 1_000_000, no restrictions
// - 3: holder of 500_000, whitelist enabled with 2 -> 200_000 and 4 -> 0
// - 4: no balance
// - 9: blacklisted holder of 10_000
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_restricted_token::GenesisConfig::<Test> {
        admin: Some(AdminAccount::get()),
        token_name: b"Test Token".to_vec(),
        token_symbol: b"TST".to_vec(),
        decimals: 6,
        initial_balances: vec![(2, 1_000_000), (3, 500_000), (9, 10_000)],
        blacklisted_accounts: vec![9],
        whitelists: vec![(3, vec![(2, 200_000), (4, 0)])],
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}

/// Admin origin for the genesis admin.
pub fn admin() -> RuntimeOrigin {
    RuntimeOrigin::signed(AdminAccount::get())
}
