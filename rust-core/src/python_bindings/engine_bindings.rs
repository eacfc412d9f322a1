//! Python bindings for the transform engine

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use numpy::{PyArray1, PyReadonlyArray1};
use num_complex::Complex64;
use crate::strategy::{PlannedFft, Radix2, RealFft};
use crate::transform::{EngineConfig, Scaling, TransformEngine};
use crate::TransformError;

/// Scaling mode exposed to Python
#[pyclass(name = "Scaling")]
#[derive(Clone)]
pub enum PyScaling {
    Unnormalized,
    Normalized,
    LegacyLengthSquared,
}

impl From<PyScaling> for Scaling {
    fn from(py_scaling: PyScaling) -> Self {
        match py_scaling {
            PyScaling::Unnormalized => Scaling::Unnormalized,
            PyScaling::Normalized => Scaling::Normalized,
            PyScaling::LegacyLengthSquared => Scaling::LegacyLengthSquared,
        }
    }
}

/// The strategy is a type parameter in Rust, so Python picks one at runtime
enum Backend {
    Radix2(TransformEngine<Radix2>),
    Planned(TransformEngine<PlannedFft>),
    Real(TransformEngine<RealFft>),
}

macro_rules! with_engine {
    ($backend:expr, $engine:ident => $body:expr) => {
        match $backend {
            Backend::Radix2($engine) => $body,
            Backend::Planned($engine) => $body,
            Backend::Real($engine) => $body,
        }
    };
}

fn to_py_err(err: TransformError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Transform engine exposed to Python
#[pyclass(name = "TransformEngine")]
pub struct PyTransformEngine {
    backend: Backend,
}

#[pymethods]
impl PyTransformEngine {
    /// Create a new transform engine
    ///
    /// Args:
    ///     size: Requested sample count
    ///     strategy: "radix2" (pads to a power of two), "planned" or "real"
    ///     scaling: Scale correction applied to the coefficients
    #[new]
    #[pyo3(signature = (size, strategy="radix2", scaling=PyScaling::Unnormalized))]
    fn new(size: usize, strategy: &str, scaling: PyScaling) -> PyResult<Self> {
        let config = EngineConfig::new(size).with_scaling(scaling.into());

        let backend = match strategy {
            "radix2" => Backend::Radix2(TransformEngine::with_config(config)),
            "planned" => Backend::Planned(TransformEngine::with_config(config)),
            "real" => Backend::Real(TransformEngine::with_config(config)),
            other => {
                return Err(PyValueError::new_err(format!(
                    "Unknown strategy '{}' (expected radix2, planned or real)",
                    other
                )))
            }
        };

        Ok(Self { backend })
    }

    /// Run the O(N^2) reference transform
    ///
    /// Raises:
    ///     ValueError: if the signal is longer than the working length
    fn run_direct(&mut self, signal: PyReadonlyArray1<f64>) -> PyResult<()> {
        let sig = signal.as_slice()?;
        with_engine!(&mut self.backend, engine => engine.run_direct(sig)).map_err(to_py_err)
    }

    /// Run the fast strategy
    ///
    /// Raises:
    ///     ValueError: if the signal is longer than the working length
    fn run_fast(&mut self, signal: PyReadonlyArray1<f64>) -> PyResult<()> {
        let sig = signal.as_slice()?;
        with_engine!(&mut self.backend, engine => engine.run_fast(sig)).map_err(to_py_err)
    }

    /// Working length N
    fn size(&self) -> usize {
        with_engine!(&self.backend, engine => engine.size())
    }

    /// Rotor table as a complex numpy array
    fn rotors<'py>(&self, py: Python<'py>) -> &'py PyArray1<Complex64> {
        let rotors = with_engine!(&self.backend, engine => engine.rotors());
        PyArray1::from_vec(py, rotors)
    }

    /// Coefficients of the last run as a complex numpy array
    fn coefficients<'py>(&self, py: Python<'py>) -> &'py PyArray1<Complex64> {
        let coefficients = with_engine!(&self.backend, engine => engine.coefficients());
        PyArray1::from_vec(py, coefficients)
    }

    /// Amplitude spectrum |X[k]|
    fn amplitude<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        let amplitude = with_engine!(&self.backend, engine => engine.amplitude());
        PyArray1::from_vec(py, amplitude)
    }

    /// Power spectrum |X[k]|^2
    fn power_spectrum<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        let power = with_engine!(&self.backend, engine => engine.power_spectrum());
        PyArray1::from_vec(py, power)
    }

    /// Phase spectrum atan2(im, re)
    fn phase<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        let phase = with_engine!(&self.backend, engine => engine.phase());
        PyArray1::from_vec(py, phase)
    }

    /// Amplitude in dB
    #[pyo3(signature = (reference=1.0))]
    fn amplitude_db<'py>(&self, py: Python<'py>, reference: f64) -> &'py PyArray1<f64> {
        let db = with_engine!(&self.backend, engine => engine.amplitude_db(reference));
        PyArray1::from_vec(py, db)
    }

    /// Bin frequencies in Hz
    fn bin_frequencies<'py>(&self, py: Python<'py>, sample_rate: f64) -> &'py PyArray1<f64> {
        let freqs = with_engine!(&self.backend, engine => engine.bin_frequencies(sample_rate));
        PyArray1::from_vec(py, freqs)
    }
}
