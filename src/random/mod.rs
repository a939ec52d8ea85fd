//! Per-thread and explicitly owned pseudo-random generation.
//!
//! Every thread gets one lazily created generator. Its seed is fixed by the
//! first call on the thread: an explicit [`SeedSequence`] passed to
//! [`rng_with_seed`], or OS entropy otherwise. Seeding a thread a second time
//! is refused, so a deterministic test cannot be silently re-randomised.
//!
//! [`RandomContext`] offers the same sampling surface on a generator the
//! caller owns and passes around.
//!
//! ```
//! use std::thread;
//!
//! thread::spawn(|| {
//!     let _ = rsl::rng_with_seed([0, 1]);
//!     let x = rsl::uniform_real(0.0, 1.0).unwrap();
//!     assert!((0.0..1.0).contains(&x));
//!     assert!(rsl::try_rng_with_seed([2, 3]).is_err());
//! })
//! .join()
//! .unwrap();
//! ```

mod context;
mod error;
mod quaternion;
mod sample;
mod seed;
mod thread;

pub use context::RandomContext;
pub use error::RandomError;
pub use quaternion::UnitQuaternion;
pub use sample::{
    random_unit_quaternion, random_unit_quaternion_with, uniform_int, uniform_int_with,
    uniform_real, uniform_real_with,
};
pub use seed::SeedSequence;
pub use thread::{is_initialized, rng, rng_with_seed, try_rng_with_seed, ThreadRng};
