//! Iterative radix-2 decimation-in-time FFT over the engine's rotor table

use super::FftStrategy;
use crate::transform::{size, RotorTable};
use num_complex::Complex64;

/// Radix-2 FFT; pads the working length to a power of two
#[derive(Debug, Clone)]
pub struct Radix2 {
    bitrev: Vec<usize>,
}

impl Radix2 {
    /// Bit-reversal permutation for a power-of-two `n`
    fn bit_reversal(n: usize) -> Vec<usize> {
        let mut bitrev = vec![0; n];
        let mut j = 0;
        for entry in bitrev.iter_mut().skip(1) {
            let mut k = n >> 1;
            while j >= k {
                j -= k;
                k >>= 1;
            }
            j += k;
            *entry = j;
        }
        bitrev
    }
}

impl FftStrategy for Radix2 {
    const NAME: &'static str = "radix2";

    fn calc_size(requested: usize) -> usize {
        size::power_of_two(requested)
    }

    fn plan(size: usize) -> Self {
        Self {
            bitrev: Self::bit_reversal(size),
        }
    }

    fn transform(&self, buffer: &[f64], rotors: &RotorTable) -> Vec<Complex64> {
        let n = buffer.len();
        debug_assert_eq!(n, rotors.len());
        debug_assert_eq!(n, self.bitrev.len());

        // Bit-reversed load
        let mut out: Vec<Complex64> = self
            .bitrev
            .iter()
            .map(|&j| Complex64::new(buffer[j], 0.0))
            .collect();

        // Butterflies; at half-width `stride` the twiddle step is N / (2*stride)
        let mut stride = 1;
        while stride < n {
            let tw_step = n / (stride << 1);
            for start in (0..n).step_by(stride << 1) {
                for i in 0..stride {
                    let w = rotors.rotor_for(i, tw_step);
                    let a = out[start + i];
                    let t = out[start + i + stride] * w;
                    out[start + i] = a + t;
                    out[start + i + stride] = a - t;
                }
            }
            stride <<= 1;
        }

        out
    }
}
