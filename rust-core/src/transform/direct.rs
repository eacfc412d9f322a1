//! Brute-force DFT used to cross-check the fast strategies
//!
//! Builds the full N x N rotation matrix on every call, so it costs O(N^2) in
//! both time and memory. Keep it to validation-sized inputs.

use num_complex::Complex64;
use std::f64::consts::PI;

/// Unscaled direct transform: X[k] = sum_n x[n] * exp(-i*2*pi*k*n/N)
pub fn direct_transform(buffer: &[f64]) -> Vec<Complex64> {
    let size = buffer.len();
    if size == 0 {
        return Vec::new();
    }

    let matrix = rotation_matrix(size);
    let mut coefficients = vec![Complex64::new(0.0, 0.0); size];

    for (k, coef) in coefficients.iter_mut().enumerate() {
        let row = &matrix[k * size..(k + 1) * size];
        for (rotor, &sample) in row.iter().zip(buffer.iter()) {
            *coef += *rotor * sample;
        }
    }

    coefficients
}

/// Row-major W[k][n] = exp(-i*2*pi*k*n/N)
fn rotation_matrix(size: usize) -> Vec<Complex64> {
    let base_freq = 2.0 * PI / size as f64;
    let mut matrix = Vec::with_capacity(size * size);

    for k in 0..size {
        for n in 0..size {
            // Reduce k*n first; large angles lose precision in sin/cos.
            let (sin, cos) = (base_freq * ((k * n) % size) as f64).sin_cos();
            matrix.push(Complex64::new(cos, -sin));
        }
    }

    matrix
}
