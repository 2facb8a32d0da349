//! The token vesting schedule record and its creation-time validation.

#![cfg_attr(not(feature = "std"), no_std)]

use num_traits::CheckedAdd;

pub mod validation;

pub use validation::{Limits, ValidationError};

/// The terms a new vesting schedule is requested with.
///
/// The cliff is given relative to the start; the absolute cliff is computed when
/// the schedule record is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VestingTerms<Balance, Moment> {
    /// The cliff offset, counting from `start`.
    pub cliff_delta: Moment,
    /// The moment the vesting starts accruing.
    pub start: Moment,
    /// The length of the vesting.
    pub duration: Moment,
    /// The granularity of the vesting steps.
    pub slice_period_seconds: Moment,
    /// Whether the schedule can be revoked later on.
    pub revocable: bool,
    /// The total amount put under the schedule.
    pub amount_total: Balance,
}

/// The vesting schedule record.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    codec::Encode,
    codec::Decode,
    codec::MaxEncodedLen,
    scale_info::TypeInfo,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(deny_unknown_fields))]
pub struct VestingSchedule<AccountId, Balance, Moment> {
    /// Who receives the vested amount.
    pub beneficiary: AccountId,
    /// The absolute moment before which nothing is releasable.
    pub cliff: Moment,
    /// The absolute moment the vesting starts accruing.
    pub start: Moment,
    /// The length of the vesting.
    pub duration: Moment,
    /// The granularity of the vesting steps.
    pub slice_period_seconds: Moment,
    /// Whether the schedule can be revoked.
    pub revocable: bool,
    /// The total amount under the schedule.
    pub amount_total: Balance,
    /// The amount already released.
    pub released: Balance,
    /// Whether the schedule was revoked.
    pub revoked: bool,
}

impl<AccountId, Balance, Moment> VestingSchedule<AccountId, Balance, Moment>
where
    Balance: Default,
    Moment: CheckedAdd + Copy,
{
    /// Build a fresh schedule record out of the requested terms.
    ///
    /// The record starts with nothing released and not revoked.
    /// Fails with [`ValidationError::InvalidTimestamp`] if the absolute cliff does not fit
    /// into the moment type.
    ///
    /// No domain checks are done here, see [`validation::validate`] for those.
    pub fn from_terms(
        beneficiary: AccountId,
        terms: VestingTerms<Balance, Moment>,
    ) -> Result<Self, ValidationError> {
        let VestingTerms {
            cliff_delta,
            start,
            duration,
            slice_period_seconds,
            revocable,
            amount_total,
        } = terms;

        Ok(Self {
            beneficiary,
            cliff: validation::compute_cliff(start, cliff_delta)?,
            start,
            duration,
            slice_period_seconds,
            revocable,
            amount_total,
            released: Default::default(),
            revoked: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestSchedule = VestingSchedule<u8, u128, u64>;

    fn terms(cliff_delta: u64, start: u64) -> VestingTerms<u128, u64> {
        VestingTerms {
            cliff_delta,
            start,
            duration: 5000,
            slice_period_seconds: 60,
            revocable: true,
            amount_total: 10000,
        }
    }

    #[test]
    fn from_terms_computes_absolute_cliff() {
        let schedule = TestSchedule::from_terms(7, terms(100, 1000)).unwrap();

        assert_eq!(
            schedule,
            TestSchedule {
                beneficiary: 7,
                cliff: 1100,
                start: 1000,
                duration: 5000,
                slice_period_seconds: 60,
                revocable: true,
                amount_total: 10000,
                released: 0,
                revoked: false,
            }
        );
    }

    #[test]
    fn from_terms_no_cliff() {
        let schedule = TestSchedule::from_terms(7, terms(0, 1000)).unwrap();
        assert_eq!(schedule.cliff, schedule.start);
    }

    #[test]
    fn from_terms_cliff_overflow() {
        assert_eq!(
            TestSchedule::from_terms(7, terms(1, u64::MAX)),
            Err(ValidationError::InvalidTimestamp)
        );
    }

    #[test]
    fn serde_parse() {
        let val = r#"{
            "beneficiary": 3,
            "cliff": 20,
            "start": 10,
            "duration": 100,
            "slice_period_seconds": 5,
            "revocable": false,
            "amount_total": 40,
            "released": 0,
            "revoked": false
        }"#;
        let val: TestSchedule = serde_json::from_str(val).unwrap();
        assert_eq!(
            val,
            TestSchedule {
                beneficiary: 3,
                cliff: 20,
                start: 10,
                duration: 100,
                slice_period_seconds: 5,
                revocable: false,
                amount_total: 40,
                released: 0,
                revoked: false,
            }
        );
    }

    #[test]
    #[should_panic = "unknown field `unknown_field`"]
    fn serde_parse_does_not_allow_unknown_fields() {
        let val = r#"{
            "beneficiary": 3,
            "cliff": 20,
            "start": 10,
            "duration": 100,
            "slice_period_seconds": 5,
            "revocable": false,
            "amount_total": 40,
            "released": 0,
            "revoked": false,
            "unknown_field": 123
        }"#;
        let _: TestSchedule = serde_json::from_str(val).unwrap();
    }
}
