//! Per-thread generator, created lazily and seeded at most once.
//!
//! The first call on a thread decides how that thread's generator is seeded:
//! from an explicit [`SeedSequence`] or from OS entropy. After that the
//! generator only hands out handles; asking to seed it again is a usage error.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::debug;

use super::{RandomError, SeedSequence};

thread_local! {
    static THREAD_RNG: RefCell<Option<Rc<RefCell<StdRng>>>> = const { RefCell::new(None) };
}

/// Handle to the calling thread's generator.
///
/// Handles are cheap to clone and all refer to the same generator. They are
/// `!Send`: a thread's generator never leaves that thread.
#[derive(Clone)]
pub struct ThreadRng {
    inner: Rc<RefCell<StdRng>>,
}

impl ThreadRng {
    /// Whether two handles refer to the same generator instance.
    pub fn ptr_eq(a: &ThreadRng, b: &ThreadRng) -> bool {
        Rc::ptr_eq(&a.inner, &b.inner)
    }
}

impl fmt::Debug for ThreadRng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThreadRng").finish_non_exhaustive()
    }
}

impl RngCore for ThreadRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.borrow_mut().next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.inner.borrow_mut().next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.borrow_mut().fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.borrow_mut().try_fill_bytes(dest)
    }
}

/// Returns the calling thread's generator, seeding it from OS entropy if this
/// is the first access on the thread.
pub fn rng() -> ThreadRng {
    THREAD_RNG.with(|slot| {
        let mut slot = slot.borrow_mut();
        if let Some(inner) = slot.as_ref() {
            return ThreadRng { inner: inner.clone() };
        }
        debug!("seeding thread rng from entropy");
        install(&mut slot, StdRng::from_entropy())
    })
}

/// Returns the calling thread's generator, seeding it from `seed` if this is
/// the first access on the thread.
///
/// An empty `seed` behaves exactly like [`rng`].
///
/// # Panics
///
/// Panics with `rng cannot be re-seeded on this thread` if `seed` is not
/// empty and the thread's generator already exists, whether it was seeded
/// explicitly or from entropy. Use [`try_rng_with_seed`] to get the error as
/// a value.
pub fn rng_with_seed(seed: impl Into<SeedSequence>) -> ThreadRng {
    match try_rng_with_seed(seed) {
        Ok(rng) => rng,
        Err(err) => panic!("{err}"),
    }
}

/// Fallible form of [`rng_with_seed`].
pub fn try_rng_with_seed(seed: impl Into<SeedSequence>) -> Result<ThreadRng, RandomError> {
    let seed = seed.into();
    if seed.is_empty() {
        return Ok(rng());
    }

    THREAD_RNG.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            debug!(words = seed.len(), "rejected reseed of thread rng");
            return Err(RandomError::ReseedOnSeededThread);
        }
        debug!(words = seed.len(), "seeding thread rng from seed sequence");
        Ok(install(&mut slot, seed.generator()))
    })
}

/// Whether the calling thread's generator has been created.
pub fn is_initialized() -> bool {
    THREAD_RNG.with(|slot| slot.borrow().is_some())
}

fn install(slot: &mut Option<Rc<RefCell<StdRng>>>, generator: StdRng) -> ThreadRng {
    let inner = Rc::new(RefCell::new(generator));
    *slot = Some(inner.clone());
    ThreadRng { inner }
}
