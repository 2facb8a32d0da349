//! A substrate pallet containing the token vesting ledger.
//!
//! The pallet keeps the vesting schedules committed to the beneficiaries by a single
//! administrator. The schedules are keyed by identifiers derived from the beneficiary and
//! the per-beneficiary sequence number, so no global counter is involved.

#![cfg_attr(not(feature = "std"), no_std)]
// Fix clippy for sp_api::decl_runtime_apis!
#![allow(clippy::too_many_arguments, clippy::unnecessary_mut_passed)]

use frame_support::traits::StorageVersion;
use sp_core::U256;
use token_vesting_schedule::ValidationError;

pub use self::pallet::*;
pub use self::weights::*;

pub mod api;
#[cfg(feature = "runtime-benchmarks")]
pub mod benchmarking;
pub mod identifier;
pub mod origin;
pub mod traits;
mod weights;

#[cfg(test)]
mod mock;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(0);

/// The log target of the pallet.
pub const LOG_TARGET: &str = "runtime::token-vesting";

/// The amount of the vested asset.
pub type Amount = U256;
/// The moment representation used by the schedules.
pub type Moment = u64;
/// The vesting schedule record from a given config.
pub type ScheduleOf<T> = token_vesting_schedule::VestingSchedule<
    <T as frame_system::Config>::AccountId,
    Amount,
    Moment,
>;
/// The vesting terms of a new schedule.
pub type TermsOf = token_vesting_schedule::VestingTerms<Amount, Moment>;

// We have to temporarily allow some clippy lints. Later on we'll send patches to substrate to
// fix them at their end.
#[allow(clippy::missing_docs_in_private_items)]
#[frame_support::pallet]
pub mod pallet {
    use frame_support::{pallet_prelude::*, storage::transactional::in_storage_layer};
    use frame_system::pallet_prelude::*;
    use sp_runtime::{traits::TrailingZeroInput, ArithmeticError};
    use token_vesting_schedule::{validation, Limits, VestingTerms};

    use super::*;
    use crate::{
        traits::{OnScheduleCreated, ScheduleIdDeriver},
        weights::WeightInfo,
    };

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// Overarching event type.
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// The identity of the vested asset.
        type AssetId: Member + Parameter + MaxEncodedLen + MaybeSerializeDeserialize;

        /// The origin allowed to administer the vesting schedules.
        type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;

        /// The vesting schedule identifier.
        type ScheduleId: Member + Parameter + MaxEncodedLen + Copy;

        /// The derivation of the schedule identifiers.
        type ScheduleIdDeriver: ScheduleIdDeriver<Self::AccountId, ScheduleId = Self::ScheduleId>;

        /// The receiver of the schedule creation notifications.
        type OnScheduleCreated: OnScheduleCreated<Self::AccountId, Self::ScheduleId>;

        /// The maximum value of any moment in a schedule.
        #[pallet::constant]
        type MaxTimestamp: Get<Moment>;

        /// The maximum slice period of a schedule.
        #[pallet::constant]
        type MaxSlicePeriodSeconds: Get<Moment>;

        /// The weight information provider type.
        type WeightInfo: WeightInfo;
    }

    /// The administrator of the vesting schedules.
    #[pallet::storage]
    #[pallet::getter(fn administrator)]
    pub type Administrator<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// The vested asset.
    #[pallet::storage]
    #[pallet::getter(fn asset_address)]
    pub type AssetAddress<T: Config> = StorageValue<_, T::AssetId, OptionQuery>;

    /// The total amount committed to the vesting schedules.
    #[pallet::storage]
    #[pallet::getter(fn total_committed)]
    pub type TotalCommitted<T> = StorageValue<_, Amount, ValueQuery>;

    /// The number of schedules ever created for a given beneficiary.
    #[pallet::storage]
    #[pallet::getter(fn schedule_count_by_beneficiary)]
    pub type ScheduleCountByBeneficiary<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, u64, ValueQuery>;

    /// The vesting schedules.
    ///
    /// The keys are derived hashes already, so no extra hashing is applied.
    #[pallet::storage]
    #[pallet::getter(fn schedule_by_id)]
    pub type Schedules<T: Config> =
        StorageMap<_, Identity, T::ScheduleId, ScheduleOf<T>, OptionQuery>;

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// The administrator of the vesting schedules.
        pub administrator: Option<T::AccountId>,
        /// The vested asset.
        pub asset_address: Option<T::AssetId>,
    }

    // The build of genesis for the pallet.
    #[pallet::genesis_build]
    impl<T: Config> GenesisBuild<T> for GenesisConfig<T> {
        fn build(&self) {
            if let Some(ref administrator) = self.administrator {
                <Administrator<T>>::put(administrator);
            }
            if let Some(ref asset_address) = self.asset_address {
                <AssetAddress<T>>::put(asset_address);
            }
        }
    }

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// A new vesting schedule was created.
        ScheduleCreated {
            /// Who the schedule vests to.
            beneficiary: T::AccountId,
            /// The total amount under the schedule.
            amount_total: Amount,
            /// The identifier of the schedule.
            schedule_id: T::ScheduleId,
        },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The caller is not allowed to administer the vesting schedules.
        Unauthorized,
        /// The beneficiary must not be the zero identity.
        InvalidBeneficiary,
        /// A timestamp is out of the allowed range.
        InvalidTimestamp,
        /// The duration must be greater than zero.
        InvalidDuration,
        /// The slice period is out of the allowed range.
        InvalidSlicePeriod,
        /// The derived schedule identifier is already in use.
        ScheduleIdCollision,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Create a new vesting schedule.
        ///
        /// The dispatch origin must pass the [`Config::AdminOrigin`] check.
        /// The cliff is given as an offset from the `start`.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::create_schedule())]
        pub fn create_schedule(
            origin: OriginFor<T>,
            beneficiary: T::AccountId,
            cliff_delta: Moment,
            start: Moment,
            duration: Moment,
            slice_period_seconds: Moment,
            revocable: bool,
            amount_total: Amount,
        ) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin).map_err(|_| <Error<T>>::Unauthorized)?;

            Self::create_vesting_schedule(
                beneficiary,
                VestingTerms {
                    cliff_delta,
                    start,
                    duration,
                    slice_period_seconds,
                    revocable,
                    amount_total,
                },
            )?;

            Ok(())
        }
    }

    impl<T: Config> Pallet<T> {
        /// Create a vesting schedule for the `beneficiary` with the given `terms` and return
        /// its identifier.
        ///
        /// The caller is responsible for the authority check.
        ///
        /// Either all of the state changes are applied, or none of them.
        pub fn create_vesting_schedule(
            beneficiary: T::AccountId,
            terms: TermsOf,
        ) -> Result<T::ScheduleId, DispatchError> {
            in_storage_layer(|| {
                let schedule = Self::validated_schedule(beneficiary, terms)?;

                let sequence_number =
                    <ScheduleCountByBeneficiary<T>>::get(&schedule.beneficiary);
                let schedule_id =
                    T::ScheduleIdDeriver::derive(&schedule.beneficiary, sequence_number);

                // Records are write-once.
                if <Schedules<T>>::contains_key(schedule_id) {
                    return Err(<Error<T>>::ScheduleIdCollision.into());
                }

                let next_sequence_number = sequence_number
                    .checked_add(1)
                    .ok_or(ArithmeticError::Overflow)?;
                <ScheduleCountByBeneficiary<T>>::insert(
                    &schedule.beneficiary,
                    next_sequence_number,
                );

                let beneficiary = schedule.beneficiary.clone();
                let amount_total = schedule.amount_total;
                <Schedules<T>>::insert(schedule_id, schedule);

                log::debug!(
                    target: LOG_TARGET,
                    "created vesting schedule {:?} #{} for {:?}",
                    schedule_id,
                    sequence_number,
                    beneficiary,
                );

                Self::deposit_event(Event::ScheduleCreated {
                    beneficiary: beneficiary.clone(),
                    amount_total,
                    schedule_id,
                });
                T::OnScheduleCreated::on_schedule_created(&beneficiary, amount_total, &schedule_id);

                Ok(schedule_id)
            })
        }

        /// The identifier of the `index`-th schedule of the `beneficiary`.
        ///
        /// The schedule does not have to exist.
        pub fn compute_schedule_id(beneficiary: &T::AccountId, index: u64) -> T::ScheduleId {
            T::ScheduleIdDeriver::derive(beneficiary, index)
        }

        /// The identifier the next schedule of the `beneficiary` will get.
        pub fn compute_next_schedule_id(beneficiary: &T::AccountId) -> T::ScheduleId {
            Self::compute_schedule_id(
                beneficiary,
                <ScheduleCountByBeneficiary<T>>::get(beneficiary),
            )
        }

        /// The most recently created schedule of the `beneficiary`, along with its identifier.
        pub fn last_schedule_of(
            beneficiary: &T::AccountId,
        ) -> Option<(T::ScheduleId, ScheduleOf<T>)> {
            let last_index = <ScheduleCountByBeneficiary<T>>::get(beneficiary).checked_sub(1)?;
            let schedule_id = Self::compute_schedule_id(beneficiary, last_index);
            <Schedules<T>>::get(schedule_id).map(|schedule| (schedule_id, schedule))
        }

        /// Build the schedule record out of the terms and run the precondition checks on it.
        fn validated_schedule(
            beneficiary: T::AccountId,
            terms: TermsOf,
        ) -> Result<ScheduleOf<T>, Error<T>> {
            let limits = Limits {
                max_timestamp: T::MaxTimestamp::get(),
                max_slice_period_seconds: T::MaxSlicePeriodSeconds::get(),
            };

            ScheduleOf::<T>::from_terms(beneficiary, terms)
                .and_then(|schedule| {
                    validation::validate(&schedule, Self::zero_account().as_ref(), &limits)?;
                    Ok(schedule)
                })
                .map_err(|err| {
                    log::debug!(target: LOG_TARGET, "rejected vesting schedule: {err:?}");
                    err.into()
                })
        }

        /// The all-zeroes account, if the account type has one.
        fn zero_account() -> Option<T::AccountId> {
            T::AccountId::decode(&mut TrailingZeroInput::zeroes()).ok()
        }
    }
}

impl<T> From<ValidationError> for Error<T> {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidTimestamp => Self::InvalidTimestamp,
            ValidationError::InvalidBeneficiary => Self::InvalidBeneficiary,
            ValidationError::InvalidDuration => Self::InvalidDuration,
            ValidationError::InvalidSlicePeriod => Self::InvalidSlicePeriod,
        }
    }
}
