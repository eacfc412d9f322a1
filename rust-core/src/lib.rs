//! Fourier Core - Real-Sample DFT Engine
//!
//! Discrete Fourier transform of real sample buffers with a brute-force
//! reference path, pluggable fast strategies, and amplitude/power/phase views.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![allow(non_local_definitions)]

pub mod error;
pub mod transform;
pub mod strategy;
pub mod spectrum;

#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::TransformError;
pub use strategy::{FftStrategy, PlannedFft, Radix2, RealFft};
pub use transform::{EngineConfig, RotorTable, Scaling, TransformEngine};
