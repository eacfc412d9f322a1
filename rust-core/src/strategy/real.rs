//! Real-to-complex FFT using realfft
//!
//! realfft only produces bins 0..=N/2; the rest follow from
//! X[N-k] = conj(X[k]) for real input.

use super::FftStrategy;
use crate::transform::{size, RotorTable};
use num_complex::Complex64;
use realfft::{RealFftPlanner, RealToComplex};
use std::sync::Arc;

/// realfft forward transform at the exact requested length
pub struct RealFft {
    r2c: Arc<dyn RealToComplex<f64>>,
}

impl FftStrategy for RealFft {
    const NAME: &'static str = "real";

    fn calc_size(requested: usize) -> usize {
        size::exact(requested)
    }

    fn plan(size: usize) -> Self {
        let mut planner = RealFftPlanner::<f64>::new();
        Self {
            r2c: planner.plan_fft_forward(size),
        }
    }

    fn transform(&self, buffer: &[f64], _rotors: &RotorTable) -> Vec<Complex64> {
        let n = buffer.len();
        let mut input = buffer.to_vec();
        let mut half = self.r2c.make_output_vec();

        if let Err(err) = self.r2c.process(&mut input, &mut half) {
            // The engine reports the short result as a contract violation
            tracing::warn!(error = %err, "real FFT processing failed");
            return Vec::new();
        }

        let mut out = Vec::with_capacity(n);
        out.extend_from_slice(&half);
        for k in half.len()..n {
            out.push(half[n - k].conj());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::direct_transform;

    fn check_against_direct(n: usize) {
        let signal: Vec<f64> = (0..n).map(|i| (i as f64 * 1.3).cos() - 0.5).collect();

        let fast = RealFft::plan(n).transform(&signal, &RotorTable::new(n));
        let direct = direct_transform(&signal);

        assert_eq!(fast.len(), n);
        for (k, (a, b)) in fast.iter().zip(direct.iter()).enumerate() {
            assert!((a - b).norm() < 1e-9, "Mismatch at {} (n={}): {} vs {}", k, n, a, b);
        }
    }

    #[test]
    fn test_even_length_mirror() {
        check_against_direct(16);
    }

    #[test]
    fn test_odd_length_mirror() {
        check_against_direct(9);
    }

    #[test]
    fn test_length_one() {
        let out = RealFft::plan(1).transform(&[3.0], &RotorTable::new(1));
        assert_eq!(out.len(), 1);
        assert!((out[0] - Complex64::new(3.0, 0.0)).norm() < 1e-12);
    }
}
