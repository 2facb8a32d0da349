//! Traits we use and expose.

use sp_core::U256;

/// The derivation of the schedule identifiers.
///
/// The implementation must be a pure function of its inputs, and must map distinct
/// `(beneficiary, sequence_number)` pairs to distinct identifiers.
pub trait ScheduleIdDeriver<AccountId> {
    /// The identifier type.
    type ScheduleId;

    /// Derive the identifier of the `sequence_number`-th schedule of the `beneficiary`.
    fn derive(beneficiary: &AccountId, sequence_number: u64) -> Self::ScheduleId;
}

/// The handler of the schedule creation notifications.
///
/// Invoked after the new schedule has been stored; the handler can not fail the creation.
pub trait OnScheduleCreated<AccountId, ScheduleId> {
    /// A new schedule has been created.
    fn on_schedule_created(beneficiary: &AccountId, amount_total: U256, schedule_id: &ScheduleId);
}

impl<AccountId, ScheduleId> OnScheduleCreated<AccountId, ScheduleId> for () {
    fn on_schedule_created(
        _beneficiary: &AccountId,
        _amount_total: U256,
        _schedule_id: &ScheduleId,
    ) {
    }
}
