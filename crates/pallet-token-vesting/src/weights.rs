//! The weights.

use frame_support::dispatch::Weight;

/// The weight information trait, to be implemented in from the benches.
pub trait WeightInfo {
    /// Weight for the `create_schedule` call.
    fn create_schedule() -> Weight;
}

impl WeightInfo for () {
    fn create_schedule() -> Weight {
        Weight::zero()
    }
}
