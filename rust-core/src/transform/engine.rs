//! Transform engine
//!
//! Owns the working length, the rotor table, the zero-padded working buffer
//! and the most recent coefficients. Each run overwrites the coefficients; a
//! rejected run leaves them untouched.

use super::config::{EngineConfig, Scaling};
use super::direct::direct_transform;
use super::rotor::RotorTable;
use crate::error::TransformError;
use crate::spectrum::{self, analysis};
use crate::strategy::FftStrategy;
use num_complex::Complex64;

/// DFT engine over real samples, generic over the fast strategy
pub struct TransformEngine<S: FftStrategy> {
    config: EngineConfig,

    /// Working length N
    size: usize,

    rotors: RotorTable,

    strategy: S,

    /// Zero-padded copy of the last accepted input
    buffer: Vec<f64>,

    /// Coefficients of the last successful run (empty before the first)
    coefficients: Vec<Complex64>,
}

impl<S: FftStrategy> TransformEngine<S> {
    /// Create an engine for `requested_size` samples with default settings
    ///
    /// # Arguments
    /// * `requested_size` - Number of samples the caller intends to supply;
    ///   the strategy derives the working length from it
    pub fn new(requested_size: usize) -> Self {
        Self::with_config(EngineConfig::new(requested_size))
    }

    /// Create an engine from a full configuration
    ///
    /// Computes the working length and rotor table once; neither changes for
    /// the life of the engine.
    ///
    /// # Arguments
    /// * `config` - Requested size and scaling mode
    pub fn with_config(config: EngineConfig) -> Self {
        let size = S::calc_size(config.requested_size);
        let rotors = RotorTable::new(size);
        let strategy = S::plan(size);

        tracing::debug!(
            requested = config.requested_size,
            size,
            strategy = S::NAME,
            scaling = ?config.scaling,
            "transform engine created"
        );

        Self {
            config,
            size,
            rotors,
            strategy,
            buffer: vec![0.0; size],
            coefficients: Vec::new(),
        }
    }

    /// Run the O(N^2) reference transform
    ///
    /// Slow; meant for validating the fast path on small inputs.
    ///
    /// # Arguments
    /// * `samples` - Input signal (zero-padded if shorter than the working length)
    ///
    /// # Returns
    /// `OversizeInput` if `samples` is longer than the working length, in
    /// which case neither the buffer nor the coefficients change
    pub fn run_direct(&mut self, samples: &[f64]) -> Result<(), TransformError> {
        self.load(samples)?;
        tracing::trace!(len = samples.len(), size = self.size, "direct transform");

        let coefficients = direct_transform(&self.buffer);
        self.commit(coefficients)
    }

    /// Run the configured fast strategy
    ///
    /// # Arguments
    /// * `samples` - Input signal (zero-padded if shorter than the working length)
    ///
    /// # Returns
    /// `OversizeInput` for too-long input (no state changes), or
    /// `StrategyContract` if the strategy returned the wrong number of
    /// coefficients (previous coefficients are kept)
    pub fn run_fast(&mut self, samples: &[f64]) -> Result<(), TransformError> {
        self.load(samples)?;
        tracing::trace!(
            len = samples.len(),
            size = self.size,
            strategy = S::NAME,
            "fast transform"
        );

        let coefficients = self.strategy.transform(&self.buffer, &self.rotors);
        self.commit(coefficients)
    }

    /// Copy samples into the working buffer, zero-padding the tail
    fn load(&mut self, samples: &[f64]) -> Result<(), TransformError> {
        if samples.len() > self.size {
            tracing::warn!(
                len = samples.len(),
                capacity = self.size,
                "rejecting oversize input"
            );
            return Err(TransformError::OversizeInput {
                len: samples.len(),
                capacity: self.size,
            });
        }

        let copy_len = samples.len();
        self.buffer[..copy_len].copy_from_slice(samples);
        self.buffer[copy_len..].fill(0.0);
        Ok(())
    }

    /// Scale and store a freshly computed coefficient sequence
    fn commit(&mut self, mut coefficients: Vec<Complex64>) -> Result<(), TransformError> {
        if coefficients.len() != self.size {
            tracing::warn!(
                expected = self.size,
                actual = coefficients.len(),
                strategy = S::NAME,
                "transform strategy broke its length contract"
            );
            return Err(TransformError::StrategyContract {
                expected: self.size,
                actual: coefficients.len(),
            });
        }

        self.config.scaling.apply(&mut coefficients);
        self.coefficients = coefficients;
        Ok(())
    }

    /// Copy of the rotor table
    pub fn rotors(&self) -> Vec<Complex64> {
        self.rotors.to_vec()
    }

    /// Borrow the rotor table without copying
    pub fn rotor_table(&self) -> &RotorTable {
        &self.rotors
    }

    /// Working length N
    pub fn size(&self) -> usize {
        self.size
    }

    /// Copy of the coefficients from the last successful run
    pub fn coefficients(&self) -> Vec<Complex64> {
        self.coefficients.clone()
    }

    /// Borrow the coefficients from the last successful run
    pub fn coefficient_slice(&self) -> &[Complex64] {
        &self.coefficients
    }

    /// Whether any transform has completed yet
    pub fn has_coefficients(&self) -> bool {
        !self.coefficients.is_empty()
    }

    /// Zero-padded input of the last accepted run
    pub fn working_buffer(&self) -> &[f64] {
        &self.buffer
    }

    /// Get current configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Scale correction applied to both transform paths
    pub fn scaling(&self) -> Scaling {
        self.config.scaling
    }

    /// |X[k]| for every coefficient
    pub fn amplitude(&self) -> Vec<f64> {
        spectrum::amplitude(&self.coefficients)
    }

    /// |X[k]|^2, squared from [`Self::amplitude`]
    pub fn power_spectrum(&self) -> Vec<f64> {
        spectrum::power_from_amplitude(self.amplitude())
    }

    /// atan2(im, re) for every coefficient
    pub fn phase(&self) -> Vec<f64> {
        spectrum::phase(&self.coefficients)
    }

    /// True per-bin amplitude |X[k]| / N
    ///
    /// Undoes the configured scaling first, so the result does not depend on
    /// the scaling mode.
    pub fn normalized_amplitude(&self) -> Vec<f64> {
        let scale = 1.0 / (self.size as f64 * self.config.scaling.factor(self.size));
        self.amplitude().into_iter().map(|mag| mag * scale).collect()
    }

    /// Amplitude in dB relative to `reference`
    ///
    /// # Arguments
    /// * `reference` - Reference level for dB calculation
    ///
    /// # Returns
    /// 20*log10(|X[k]|/reference), magnitudes clamped at 1e-10
    pub fn amplitude_db(&self, reference: f64) -> Vec<f64> {
        analysis::amplitude_to_db(&self.amplitude(), reference)
    }

    /// Power in dB relative to `reference` squared
    pub fn power_db(&self, reference: f64) -> Vec<f64> {
        analysis::power_to_db(&self.power_spectrum(), reference)
    }

    /// Frequency in Hz of each of the N bins
    ///
    /// # Arguments
    /// * `sample_rate` - Sample rate in Hz
    pub fn bin_frequencies(&self, sample_rate: f64) -> Vec<f64> {
        analysis::bin_frequencies(self.size, sample_rate)
    }
}
