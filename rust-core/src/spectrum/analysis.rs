//! Decibel scaling and frequency axis helpers

/// Convert magnitudes to dB: 20*log10(|X[k]|/reference)
///
/// Magnitudes are clamped to 1e-10 to avoid log(0).
pub fn amplitude_to_db(amplitude: &[f64], reference: f64) -> Vec<f64> {
    amplitude
        .iter()
        .map(|&mag| {
            let mag_clamped = mag.max(1e-10);
            20.0 * (mag_clamped / reference).log10()
        })
        .collect()
}

/// Convert power values to dB: 10*log10(P[k]/reference^2)
pub fn power_to_db(power: &[f64], reference: f64) -> Vec<f64> {
    power
        .iter()
        .map(|&p| {
            let p_clamped = p.max(1e-20);
            10.0 * (p_clamped / (reference * reference)).log10()
        })
        .collect()
}

/// Frequency in Hz of bin `bin` for an N-point transform
pub fn bin_to_hz(bin: usize, size: usize, sample_rate: f64) -> f64 {
    bin as f64 * sample_rate / size as f64
}

/// Frequencies of all N bins (bins above N/2 alias negative frequencies)
pub fn bin_frequencies(size: usize, sample_rate: f64) -> Vec<f64> {
    (0..size).map(|bin| bin_to_hz(bin, size, sample_rate)).collect()
}
