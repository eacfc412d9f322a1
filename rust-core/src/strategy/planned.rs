//! Mixed-radix complex FFT planned by rustfft

use super::FftStrategy;
use crate::transform::{size, RotorTable};
use num_complex::Complex64;
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;

/// rustfft forward transform at the exact requested length
pub struct PlannedFft {
    fft: Arc<dyn Fft<f64>>,
}

impl FftStrategy for PlannedFft {
    const NAME: &'static str = "planned";

    fn calc_size(requested: usize) -> usize {
        size::exact(requested)
    }

    fn plan(size: usize) -> Self {
        let mut planner = FftPlanner::new();
        Self {
            fft: planner.plan_fft_forward(size),
        }
    }

    fn transform(&self, buffer: &[f64], _rotors: &RotorTable) -> Vec<Complex64> {
        let mut out: Vec<Complex64> = buffer.iter().map(|&x| Complex64::new(x, 0.0)).collect();
        self.fft.process(&mut out);
        out
    }
}
