//! Direct vs fast transform agreement across strategies and signal shapes

use fourier::{FftStrategy, PlannedFft, Radix2, RealFft, Scaling, EngineConfig, TransformEngine};
use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

const REL_TOL: f64 = 1e-9;

fn impulse(n: usize) -> Vec<f64> {
    let mut signal = vec![0.0; n];
    signal[0] = 1.0;
    signal
}

fn bin_sinusoid(n: usize, bin: usize) -> Vec<f64> {
    (0..n)
        .map(|i| (2.0 * PI * bin as f64 * i as f64 / n as f64).sin())
        .collect()
}

fn noise(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

fn assert_close(direct: &[Complex64], fast: &[Complex64], label: &str) {
    assert_eq!(direct.len(), fast.len(), "{}: length mismatch", label);

    let scale = direct.iter().map(|c| c.norm()).fold(1.0, f64::max);
    for (k, (d, f)) in direct.iter().zip(fast.iter()).enumerate() {
        let diff = (d - f).norm();
        assert!(
            diff <= REL_TOL * scale,
            "{}: mismatch at bin {}: {} vs {} (diff = {})",
            label, k, d, f, diff
        );
    }
}

fn cross_validate<S: FftStrategy>(requested: usize, scaling: Scaling) {
    let mut engine = TransformEngine::<S>::with_config(
        EngineConfig::new(requested).with_scaling(scaling),
    );
    let n = engine.size();

    let signals = [
        ("impulse", impulse(n)),
        ("sinusoid", bin_sinusoid(n, n / 4)),
        ("noise", noise(n, requested as u64)),
        ("short noise", noise(requested / 2 + 1, 7)),
    ];

    for (name, signal) in signals.iter() {
        engine.run_direct(signal).unwrap();
        let direct = engine.coefficients();
        engine.run_fast(signal).unwrap();
        let fast = engine.coefficients();

        let label = format!("{} n={} {} {:?}", S::NAME, n, name, scaling);
        assert_close(&direct, &fast, &label);
    }
}

#[test]
fn test_radix2_agrees_with_direct() {
    for &n in &[1, 2, 8, 64, 100, 256] {
        cross_validate::<Radix2>(n, Scaling::Unnormalized);
    }
}

#[test]
fn test_planned_agrees_with_direct() {
    for &n in &[1, 3, 12, 45, 97, 128] {
        cross_validate::<PlannedFft>(n, Scaling::Unnormalized);
    }
}

#[test]
fn test_real_agrees_with_direct() {
    for &n in &[1, 2, 9, 30, 64, 101] {
        cross_validate::<RealFft>(n, Scaling::Unnormalized);
    }
}

#[test]
fn test_scaling_applies_to_both_paths() {
    for scaling in [Scaling::Normalized, Scaling::LegacyLengthSquared] {
        cross_validate::<Radix2>(32, scaling);
        cross_validate::<PlannedFft>(20, scaling);
    }
}

#[test]
fn test_zero_input_gives_zero_coefficients() {
    let mut engine = TransformEngine::<Radix2>::new(16);
    for len in [0, 5, 16] {
        let zeros = vec![0.0; len];

        engine.run_direct(&zeros).unwrap();
        assert!(engine.coefficients().iter().all(|c| c.norm() == 0.0));

        engine.run_fast(&zeros).unwrap();
        assert!(engine.coefficients().iter().all(|c| c.norm() == 0.0));
    }
}

#[test]
fn test_impulse_spectrum_is_flat() {
    let n = 16;

    let mut engine = TransformEngine::<Radix2>::new(n);
    engine.run_direct(&impulse(n)).unwrap();
    for mag in engine.amplitude() {
        assert!((mag - 1.0).abs() < 1e-9);
    }

    let config = EngineConfig::new(n).with_scaling(Scaling::LegacyLengthSquared);
    let mut engine = TransformEngine::<Radix2>::with_config(config);
    engine.run_direct(&impulse(n)).unwrap();
    for mag in engine.amplitude() {
        assert!((mag - n as f64).abs() < 1e-9);
    }
}

#[test]
fn test_sinusoid_peaks_at_its_bin() {
    let n = 64;
    let mut engine = TransformEngine::<PlannedFft>::new(n);
    engine.run_fast(&bin_sinusoid(n, 5)).unwrap();

    let amplitude = engine.amplitude();
    // A real sine at bin 5 splits into bins 5 and N-5, each N/2
    assert!((amplitude[5] - 32.0).abs() < 1e-9);
    assert!((amplitude[n - 5] - 32.0).abs() < 1e-9);
    assert!(amplitude[4] < 1e-9);

    // sin -> -i*N/2 at the positive bin
    let phase = engine.phase();
    assert!((phase[5] + PI / 2.0).abs() < 1e-9);
}

#[test]
fn test_second_run_fully_replaces_first() {
    let mut engine = TransformEngine::<RealFft>::new(10);
    engine.run_fast(&noise(10, 1)).unwrap();
    engine.run_fast(&impulse(3)).unwrap();

    for coef in engine.coefficients() {
        assert!((coef - Complex64::new(1.0, 0.0)).norm() < 1e-12);
    }
}
