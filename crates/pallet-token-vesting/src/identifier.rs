//! Schedule identifier derivation.
//!
//! The identifier of the `N`-th schedule of a beneficiary is the hash of the SCALE encoding of
//! the `(SCHEDULE_ID_DOMAIN, beneficiary, N)` tuple.
//!
//! SCALE encodings are self-delimiting, and the domain tag and the sequence number are encoded
//! with a fixed width, so distinct `(beneficiary, N)` pairs always produce distinct preimages.
//! Distinct identifiers then rely on the collision resistance of the hasher: the uniqueness of
//! the schedule keys is exactly as strong as the hasher's collision resistance. Use a
//! cryptographic hasher (like `BlakeTwo256` or `Keccak256`) here, never a fast non-cryptographic
//! one.

use core::marker::PhantomData;

use codec::Encode;
use sp_runtime::traits::Hash;

use crate::traits::ScheduleIdDeriver;

/// The domain separation tag mixed into every schedule identifier preimage.
pub const SCHEDULE_ID_DOMAIN: [u8; 8] = *b"tvesting";

/// Derives the schedule identifiers by hashing with the given `Hashing`.
pub struct HashedScheduleId<Hashing>(PhantomData<Hashing>);

impl<AccountId: Encode, Hashing: Hash> ScheduleIdDeriver<AccountId> for HashedScheduleId<Hashing> {
    type ScheduleId = Hashing::Output;

    fn derive(beneficiary: &AccountId, sequence_number: u64) -> Self::ScheduleId {
        Hashing::hash_of(&(SCHEDULE_ID_DOMAIN, beneficiary, sequence_number))
    }
}
