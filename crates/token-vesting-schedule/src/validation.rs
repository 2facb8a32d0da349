//! Creation-time validation of the vesting schedules.

use num_traits::{CheckedAdd, One, Zero};

use crate::VestingSchedule;

/// A violated schedule constraint.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, codec::Encode, codec::Decode, scale_info::TypeInfo,
)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
pub enum ValidationError {
    /// One of the moments is above the maximum allowed timestamp.
    #[cfg_attr(feature = "std", error("timestamp is out of the allowed range"))]
    InvalidTimestamp,
    /// The beneficiary is the zero identity.
    #[cfg_attr(feature = "std", error("beneficiary must not be the zero identity"))]
    InvalidBeneficiary,
    /// The duration is zero.
    #[cfg_attr(feature = "std", error("duration must be greater than zero"))]
    InvalidDuration,
    /// The slice period is zero or above the maximum allowed slice period.
    #[cfg_attr(feature = "std", error("slice period is out of the allowed range"))]
    InvalidSlicePeriod,
}

/// The bounds the schedule moments are checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits<Moment> {
    /// The maximum value of any moment in the schedule.
    pub max_timestamp: Moment,
    /// The maximum slice period.
    pub max_slice_period_seconds: Moment,
}

/// Compute the absolute cliff as `start + cliff_delta`.
///
/// An overflow means the cliff is past any representable moment, so it is reported as
/// [`ValidationError::InvalidTimestamp`].
pub fn compute_cliff<Moment: CheckedAdd>(
    start: Moment,
    cliff_delta: Moment,
) -> Result<Moment, ValidationError> {
    start
        .checked_add(&cliff_delta)
        .ok_or(ValidationError::InvalidTimestamp)
}

/// Check the proposed schedule against the domain constraints.
///
/// The checks go in a fixed order, so the first violated constraint is the one reported:
/// timestamps, beneficiary, duration, slice period.
///
/// The `zero_identity` is the account considered unset; pass [`None`] if the account type
/// has no such value.
pub fn validate<AccountId, Balance, Moment>(
    schedule: &VestingSchedule<AccountId, Balance, Moment>,
    zero_identity: Option<&AccountId>,
    limits: &Limits<Moment>,
) -> Result<(), ValidationError>
where
    AccountId: PartialEq,
    Moment: PartialOrd + Zero + One,
{
    // Moments are unsigned, so only the upper bound needs checking.
    let moments = [
        &schedule.cliff,
        &schedule.start,
        &schedule.duration,
        &schedule.slice_period_seconds,
    ];
    if moments
        .into_iter()
        .any(|moment| *moment > limits.max_timestamp)
    {
        return Err(ValidationError::InvalidTimestamp);
    }

    if zero_identity == Some(&schedule.beneficiary) {
        return Err(ValidationError::InvalidBeneficiary);
    }

    if schedule.duration.is_zero() {
        return Err(ValidationError::InvalidDuration);
    }

    if schedule.slice_period_seconds < Moment::one()
        || schedule.slice_period_seconds > limits.max_slice_period_seconds
    {
        return Err(ValidationError::InvalidSlicePeriod);
    }

    Ok(())
}
