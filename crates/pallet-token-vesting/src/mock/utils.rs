//! Mock utils.

use mockall::mock;
use sp_core::U256;

use super::*;
use crate::traits;

type AccountId = <Test as frame_system::Config>::AccountId;
type ScheduleId = H256;

mock! {
    #[derive(Debug)]
    pub OnScheduleCreated {}
    impl traits::OnScheduleCreated<AccountId, ScheduleId> for OnScheduleCreated {
        fn on_schedule_created(
            beneficiary: &AccountId,
            amount_total: U256,
            schedule_id: &ScheduleId,
        );
    }
}

pub fn runtime_lock() -> std::sync::MutexGuard<'static, ()> {
    static MOCK_RUNTIME_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());

    // Ignore the poisoning for the tests that panic.
    // We only care about concurrency here, not about the poisoning.
    match MOCK_RUNTIME_MUTEX.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

pub trait TestExternalitiesExt {
    fn execute_with_ext<R, E>(&mut self, execute: E) -> R
    where
        E: for<'e> FnOnce(&'e ()) -> R;
}

impl TestExternalitiesExt for frame_support::sp_io::TestExternalities {
    fn execute_with_ext<R, E>(&mut self, execute: E) -> R
    where
        E: for<'e> FnOnce(&'e ()) -> R,
    {
        let guard = runtime_lock();
        let result = self.execute_with(|| execute(&guard));
        drop(guard);
        result
    }
}
