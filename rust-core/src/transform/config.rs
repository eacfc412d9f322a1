//! Engine configuration

use num_complex::Complex64;

/// Scale correction applied to the coefficients of both transform paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scaling {
    /// Plain sum; a unit impulse gives |X[k]| = 1
    #[default]
    Unnormalized,

    /// Divide by the working length
    Normalized,

    /// Multiply by the working length; a unit impulse gives |X[k]| = N
    LegacyLengthSquared,
}

impl Scaling {
    /// Factor applied to every coefficient for working length `size`
    pub fn factor(self, size: usize) -> f64 {
        match self {
            Scaling::Unnormalized => 1.0,
            Scaling::Normalized => 1.0 / size as f64,
            Scaling::LegacyLengthSquared => size as f64,
        }
    }

    /// Scale coefficients in place
    pub fn apply(self, coefficients: &mut [Complex64]) {
        if self == Scaling::Unnormalized {
            return;
        }
        let factor = self.factor(coefficients.len());
        for coef in coefficients.iter_mut() {
            *coef *= factor;
        }
    }
}

/// Transform engine configuration
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Requested sample count; the strategy derives the working length
    pub requested_size: usize,

    /// Scale correction for computed coefficients
    pub scaling: Scaling,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            requested_size: 1024,
            scaling: Scaling::Unnormalized,
        }
    }
}

impl EngineConfig {
    pub fn new(requested_size: usize) -> Self {
        Self {
            requested_size,
            ..Self::default()
        }
    }

    pub fn with_scaling(mut self, scaling: Scaling) -> Self {
        self.scaling = scaling;
        self
    }
}
