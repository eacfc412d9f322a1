//! Pluggable fast-transform strategies
//!
//! The engine is generic over [`FftStrategy`], so the algorithm is fixed when
//! the engine type is named and calls are statically dispatched.

pub mod radix2;
pub mod planned;
pub mod real;

pub use radix2::Radix2;
pub use planned::PlannedFft;
pub use real::RealFft;

use crate::transform::RotorTable;
use num_complex::Complex64;

/// Fast transform algorithm plugged into a [`crate::TransformEngine`]
pub trait FftStrategy: Sized {
    /// Short identifier used in log output
    const NAME: &'static str;

    /// Working length for a requested sample count
    fn calc_size(requested: usize) -> usize;

    /// Precompute whatever the algorithm needs beyond the rotor table
    fn plan(size: usize) -> Self;

    /// Unscaled forward transform of `buffer`
    ///
    /// Must return `buffer.len()` coefficients equal (within rounding) to
    /// sum_n x[n] * exp(-i*2*pi*k*n/N), and be deterministic.
    fn transform(&self, buffer: &[f64], rotors: &RotorTable) -> Vec<Complex64>;
}
