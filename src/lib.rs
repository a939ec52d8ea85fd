//! rsl - blocking FIFO queue and seed-once thread-local random generation
//!
//! [`Queue`] hands values between any number of producer and consumer threads;
//! consumers can wait a bounded time for work. The [`random`] module gives
//! every thread its own generator, seeded at most once, plus uniform sampling
//! helpers and an explicitly owned [`RandomContext`].
#![warn(missing_docs)]

mod queue;
pub mod random;
mod sync;

pub use queue::Queue;
pub use random::{
    random_unit_quaternion, rng, rng_with_seed, try_rng_with_seed, uniform_int, uniform_real,
    RandomContext, RandomError, SeedSequence, ThreadRng, UnitQuaternion,
};
