//! Lock primitives used by [`Queue`](crate::Queue).
//!
//! Normal builds use `std::sync`. Building with `RUSTFLAGS="--cfg loom"` swaps
//! in `loom::sync` so the queue's lock/condvar protocol can be model-checked.

#[cfg(loom)]
pub(crate) use loom::sync::{Condvar, Mutex, MutexGuard};

#[cfg(not(loom))]
pub(crate) use std::sync::{Condvar, Mutex, MutexGuard};

use std::sync::LockResult;

/// Takes the guard out of a possibly poisoned lock result.
///
/// Every queue operation leaves the `VecDeque` consistent before it can
/// panic, so a poisoned lock still guards valid data.
#[inline]
pub(crate) fn recover<G>(result: LockResult<G>) -> G {
    result.unwrap_or_else(|poisoned| poisoned.into_inner())
}
