//! The administrator origin.

use core::marker::PhantomData;

use frame_support::traits::EnsureOrigin;
use frame_system::RawOrigin;

use crate::{Administrator, Config};

/// Ensures the origin is signed by the administrator designated at genesis.
///
/// Nobody passes the check if no administrator is set.
pub struct EnsureAdministrator<T>(PhantomData<T>);

impl<T: Config> EnsureOrigin<T::RuntimeOrigin> for EnsureAdministrator<T> {
    type Success = T::AccountId;

    fn try_origin(o: T::RuntimeOrigin) -> Result<Self::Success, T::RuntimeOrigin> {
        o.into().and_then(|o| match o {
            RawOrigin::Signed(who) if <Administrator<T>>::get().as_ref() == Some(&who) => Ok(who),
            r => Err(T::RuntimeOrigin::from(r)),
        })
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn try_successful_origin() -> Result<T::RuntimeOrigin, ()> {
        <Administrator<T>>::get()
            .map(|who| RawOrigin::Signed(who).into())
            .ok_or(())
    }
}
