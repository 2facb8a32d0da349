//! The runtime APIs.

use codec::{Codec, Decode, Encode};
use sp_core::U256;

sp_api::decl_runtime_apis! {
    /// A runtime API for reading the token vesting ledger.
    pub trait TokenVestingApi<AccountId, AssetId, ScheduleId, Schedule>
    where
        AccountId: Encode,
        AssetId: Decode,
        ScheduleId: Codec,
        Schedule: Decode,
    {
        /// The vested asset.
        fn asset_address() -> Option<AssetId>;

        /// The total amount committed to the schedules.
        fn total_committed() -> U256;

        /// The number of schedules created for the given beneficiary.
        fn schedule_count(beneficiary: &AccountId) -> u64;

        /// The schedule with the given identifier.
        fn schedule(schedule_id: &ScheduleId) -> Option<Schedule>;

        /// The identifier the next schedule of the given beneficiary will get.
        fn next_schedule_id(beneficiary: &AccountId) -> ScheduleId;
    }
}
