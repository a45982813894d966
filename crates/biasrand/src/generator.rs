//! Mixture sampling over a [`RangeSpec`].
//!
//! Each of the [`BATCH_SIZE`] draws first rolls a number in `[0, 100)`. If the
//! roll lands below the spec's percentage the value comes from a Gaussian
//! centered on the average with a standard deviation of a tenth of the range,
//! otherwise it is drawn uniformly from `[min, max)`. Either way the value is
//! clamped back into `[min, max]` and rounded half away from zero.

use crate::{RandSource, RangeSpec, ThreadRandom};
use core::f64::consts::PI;

/// Number of integers produced per batch.
pub const BATCH_SIZE: usize = 5;

/// An ordered batch of [`BATCH_SIZE`] integers, each within the spec's
/// `[min, max]`, in the order they were drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct SampleBatch([i64; BATCH_SIZE]);

impl SampleBatch {
    pub const fn as_slice(&self) -> &[i64] {
        &self.0
    }

    pub fn iter(&self) -> core::slice::Iter<'_, i64> {
        self.0.iter()
    }

    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        BATCH_SIZE
    }

    pub const fn into_inner(self) -> [i64; BATCH_SIZE] {
        self.0
    }
}

impl AsRef<[i64]> for SampleBatch {
    fn as_ref(&self) -> &[i64] {
        &self.0
    }
}

impl IntoIterator for SampleBatch {
    type Item = i64;
    type IntoIter = core::array::IntoIter<i64, BATCH_SIZE>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SampleBatch {
    type Item = &'a i64;
    type IntoIter = core::slice::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Draws a batch using the thread-local CSPRNG.
pub fn generate(spec: &RangeSpec) -> SampleBatch {
    generate_with(spec, &ThreadRandom)
}

/// Draws a batch from an arbitrary random source.
///
/// Useful for deterministic tests; production code should go through
/// [`generate`].
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip(rand), ret)
)]
pub fn generate_with<R>(spec: &RangeSpec, rand: &R) -> SampleBatch
where
    R: RandSource<u32>,
{
    SampleBatch(core::array::from_fn(|_| sample(spec, rand)))
}

/// Maps 32 random bits onto `[0, 1]` by dividing by `u32::MAX`.
///
/// `1.0` is reachable (with probability 2^-32); every caller clamps.
pub fn unit_float<R>(rand: &R) -> f64
where
    R: RandSource<u32>,
{
    f64::from(rand.rand()) / f64::from(u32::MAX)
}

/// Restricts `value` to `[min, max]`, leaving it unchanged if already inside.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

fn sample<R>(spec: &RangeSpec, rand: &R) -> i64
where
    R: RandSource<u32>,
{
    let roll = unit_float(rand) * 100.0;

    let value = if roll < f64::from(spec.percentage()) {
        gaussian(spec.average() as f64, spec.std_dev(), rand)
    } else {
        uniform(spec, rand)
    };

    let (min, max) = (spec.min() as f64, spec.max() as f64);
    // `as` saturates, and the integer clamp covers bounds f64 cannot
    // represent exactly.
    (clamp(value, min, max).round() as i64).clamp(spec.min(), spec.max())
}

fn uniform<R>(spec: &RangeSpec, rand: &R) -> f64
where
    R: RandSource<u32>,
{
    unit_float(rand) * spec.span() + spec.min() as f64
}

/// Box-Muller transform. Each uniform is re-drawn while it is exactly zero so
/// the logarithm stays finite.
fn gaussian<R>(mean: f64, std_dev: f64, rand: &R) -> f64
where
    R: RandSource<u32>,
{
    let u = nonzero_unit_float(rand);
    let v = nonzero_unit_float(rand);
    let standard_normal = (-2.0 * u.ln()).sqrt() * (2.0 * PI * v).cos();
    mean + std_dev * standard_normal
}

fn nonzero_unit_float<R>(rand: &R) -> f64
where
    R: RandSource<u32>,
{
    loop {
        let x = unit_float(rand);
        if x != 0.0 {
            return x;
        }
    }
}
