//! The benchmarks for the pallet.

use frame_benchmarking::benchmarks;
use frame_support::traits::Get;
use frame_system::RawOrigin;

use crate::*;

/// The benchmark interface into the environment.
pub trait Interface: super::Config {
    /// Obtain the administrator Account ID.
    ///
    /// This is the account that creates the schedule.
    fn administrator() -> <Self as frame_system::Config>::AccountId;

    /// Obtain the beneficiary Account ID.
    ///
    /// This is the account to create the schedule for.
    fn beneficiary() -> <Self as frame_system::Config>::AccountId;
}

benchmarks! {
    where_clause {
        where
            T: Interface
    }

    create_schedule {
        let administrator = <T as Interface>::administrator();
        let beneficiary = <T as Interface>::beneficiary();
        let slice_period_seconds = T::MaxSlicePeriodSeconds::get();

        <Administrator<T>>::put(administrator.clone());

        // Occupy a few sequence numbers so that the schedule is not the first one.
        <ScheduleCountByBeneficiary<T>>::insert(&beneficiary, 3);
        let schedule_id = <Pallet<T>>::compute_next_schedule_id(&beneficiary);

        #[cfg(test)]
        let test_data = {
            use crate::mock;

            let mock_runtime_guard = mock::runtime_lock();

            let on_schedule_created_ctx = mock::MockOnScheduleCreated::on_schedule_created_context();
            on_schedule_created_ctx.expect().once().return_const(());

            (mock_runtime_guard, on_schedule_created_ctx)
        };

        let origin = RawOrigin::Signed(administrator);

    }: _(origin, beneficiary.clone(), 100, 1000, 5000, slice_period_seconds, true, Amount::from(10000))
    verify {
        assert_eq!(<ScheduleCountByBeneficiary<T>>::get(&beneficiary), 4);
        let schedule = <Schedules<T>>::get(schedule_id).unwrap();
        assert_eq!(schedule.beneficiary, beneficiary);
        assert_eq!(schedule.cliff, 1100);

        #[cfg(test)]
        {
            let (mock_runtime_guard, on_schedule_created_ctx) = test_data;

            on_schedule_created_ctx.checkpoint();

            drop(mock_runtime_guard);
        }
    }

    impl_benchmark_test_suite!(
        Pallet,
        crate::mock::new_test_ext(),
        crate::mock::Test,
    );
}

#[cfg(test)]
impl Interface for crate::mock::Test {
    fn administrator() -> <Self as frame_system::Config>::AccountId {
        crate::mock::ADMIN
    }

    fn beneficiary() -> <Self as frame_system::Config>::AccountId {
        42
    }
}
