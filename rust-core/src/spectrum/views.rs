//! Amplitude, power and phase views over complex coefficients

use num_complex::Complex64;

/// Magnitude |z| = sqrt(re^2 + im^2) of each coefficient
pub fn amplitude(coefficients: &[Complex64]) -> Vec<f64> {
    coefficients.iter().map(|c| c.norm()).collect()
}

/// Power spectrum from already computed magnitudes
///
/// Squares the given values so power stays bit-identical to amplitude^2.
pub fn power_from_amplitude(mut amplitude: Vec<f64>) -> Vec<f64> {
    for mag in amplitude.iter_mut() {
        *mag *= *mag;
    }
    amplitude
}

/// Power spectrum |z|^2 of each coefficient
pub fn power_spectrum(coefficients: &[Complex64]) -> Vec<f64> {
    power_from_amplitude(amplitude(coefficients))
}

/// Principal argument atan2(im, re) of each coefficient, in (-pi, pi]
pub fn phase(coefficients: &[Complex64]) -> Vec<f64> {
    coefficients.iter().map(|c| c.im.atan2(c.re)).collect()
}
