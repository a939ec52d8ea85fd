//! Uniform sampling helpers.
//!
//! The `*_with` functions draw from any generator. The plain forms draw from
//! the calling thread's generator (see [`rng`](super::rng)).

use std::f64::consts::TAU;
use std::fmt::Debug;

use num_traits::{Float, PrimInt};
use rand::distributions::uniform::SampleUniform;
use rand::Rng;

use super::{rng, RandomError, UnitQuaternion};

/// Draws a real uniformly from `[lower, upper)`.
///
/// Fails with [`RandomError::InvalidRange`] unless `lower < upper` and the
/// width of the range is finite.
pub fn uniform_real_with<R, T>(rng: &mut R, lower: T, upper: T) -> Result<T, RandomError>
where
    R: Rng + ?Sized,
    T: Float + SampleUniform + Debug,
{
    if !(lower < upper) || !(upper - lower).is_finite() {
        return Err(RandomError::invalid_range(lower, upper, false));
    }
    Ok(rng.gen_range(lower..upper))
}

/// Draws an integer uniformly from `[lower, upper]`.
///
/// Fails with [`RandomError::InvalidRange`] if `lower > upper`.
pub fn uniform_int_with<R, T>(rng: &mut R, lower: T, upper: T) -> Result<T, RandomError>
where
    R: Rng + ?Sized,
    T: PrimInt + SampleUniform + Debug,
{
    if lower > upper {
        return Err(RandomError::invalid_range(lower, upper, true));
    }
    Ok(rng.gen_range(lower..=upper))
}

/// Draws a rotation uniformly from SO(3).
///
/// Shoemake, "Uniform Random Rotations", Graphics Gems III, pp. 124-132.
pub fn random_unit_quaternion_with<R>(rng: &mut R) -> UnitQuaternion
where
    R: Rng + ?Sized,
{
    loop {
        let x0: f64 = rng.gen();
        let r1 = (1.0 - x0).sqrt();
        let r2 = x0.sqrt();
        let t1 = rng.gen_range(0.0..TAU);
        let t2 = rng.gen_range(0.0..TAU);
        let (x, y) = (r1 * t1.sin(), r1 * t1.cos());
        let (z, w) = (r2 * t2.sin(), r2 * t2.cos());
        // r1 and r2 are never both zero, so this only loops on rounding
        // pathologies.
        if let Some(q) = UnitQuaternion::new_normalize(w, x, y, z) {
            return q;
        }
    }
}

/// [`uniform_real_with`] on the calling thread's generator.
///
/// ```
/// let value = rsl::uniform_real(-1.0, 1.0).unwrap();
/// assert!((-1.0..1.0).contains(&value));
/// assert!(rsl::uniform_real(1.0, 1.0).is_err());
/// ```
pub fn uniform_real<T>(lower: T, upper: T) -> Result<T, RandomError>
where
    T: Float + SampleUniform + Debug,
{
    uniform_real_with(&mut rng(), lower, upper)
}

/// [`uniform_int_with`] on the calling thread's generator.
///
/// ```
/// let die = rsl::uniform_int(1, 6).unwrap();
/// assert!((1..=6).contains(&die));
/// ```
pub fn uniform_int<T>(lower: T, upper: T) -> Result<T, RandomError>
where
    T: PrimInt + SampleUniform + Debug,
{
    uniform_int_with(&mut rng(), lower, upper)
}

/// [`random_unit_quaternion_with`] on the calling thread's generator.
pub fn random_unit_quaternion() -> UnitQuaternion {
    random_unit_quaternion_with(&mut rng())
}
