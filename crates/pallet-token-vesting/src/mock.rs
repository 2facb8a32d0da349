//! The mock for the pallet.

use frame_support::{
    sp_io,
    sp_runtime::{
        testing::{Header, H256},
        traits::{BlakeTwo256, IdentityLookup},
        BuildStorage as _,
    },
    traits::{ConstU32, ConstU64},
};

use crate::{
    self as pallet_token_vesting, identifier::HashedScheduleId, origin::EnsureAdministrator,
};

mod utils;
pub use self::utils::*;

type UncheckedExtrinsic = frame_system::mocking::MockUncheckedExtrinsic<Test>;
type Block = frame_system::mocking::MockBlock<Test>;

frame_support::construct_runtime!(
    pub struct Test where
        Block = Block,
        NodeBlock = Block,
        UncheckedExtrinsic = UncheckedExtrinsic,
    {
        System: frame_system::{Pallet, Call, Config, Storage, Event<T>},
        TokenVesting: pallet_token_vesting::{Pallet, Call, Storage, Config<T>, Event<T>},
    }
);

impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Index = u64;
    type BlockNumber = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<u64>;
    type Header = Header;
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

/// The maximum moment accepted in the schedules.
pub const MAX_TIMESTAMP: u64 = 1 << 40;
/// The maximum slice period accepted in the schedules.
pub const MAX_SLICE_PERIOD_SECONDS: u64 = 60 * 60 * 24 * 30;

impl pallet_token_vesting::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type AssetId = u64;
    type AdminOrigin = EnsureAdministrator<Self>;
    type ScheduleId = H256;
    type ScheduleIdDeriver = HashedScheduleId<BlakeTwo256>;
    type OnScheduleCreated = MockOnScheduleCreated;
    type MaxTimestamp = ConstU64<MAX_TIMESTAMP>;
    type MaxSlicePeriodSeconds = ConstU64<MAX_SLICE_PERIOD_SECONDS>;
    type WeightInfo = ();
}

/// The administrator set at genesis.
pub const ADMIN: u64 = 1;
/// The vested asset set at genesis.
pub const ASSET: u64 = 1000;

pub fn new_test_ext() -> sp_io::TestExternalities {
    let genesis_config = GenesisConfig {
        system: Default::default(),
        token_vesting: TokenVestingConfig {
            administrator: Some(ADMIN),
            asset_address: Some(ASSET),
        },
    };
    new_test_ext_with(genesis_config)
}

// This function basically just builds a genesis storage key/value store according to
// our desired mockup.
pub fn new_test_ext_with(genesis_config: GenesisConfig) -> sp_io::TestExternalities {
    let storage = genesis_config.build_storage().unwrap();
    storage.into()
}
